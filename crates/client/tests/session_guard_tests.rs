//! Integration tests for the session-expiry protocol

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use contrato_client::bootstrap::{self, Sessao};
use contrato_client::{ContratoClient, SessionExpired, SessionExpiredHook};
use contrato_core::session::Session;
use contrato_core::{SessionHandle, Usuario};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn usuario() -> Usuario {
    Usuario {
        id: 7,
        nome_completo: "Maria Souza".into(),
        email: "maria@exemplo.com.br".into(),
    }
}

struct Harness {
    client: ContratoClient,
    session: SessionHandle,
    fired: Arc<AtomicUsize>,
    redirect: Arc<Mutex<Option<String>>>,
}

fn harness(uri: String) -> Harness {
    let session = SessionHandle::in_memory();
    session
        .replace(Session::new(usuario(), Some("tok-123".into())))
        .unwrap();

    let fired = Arc::new(AtomicUsize::new(0));
    let redirect = Arc::new(Mutex::new(None));
    let hook: SessionExpiredHook = {
        let fired = fired.clone();
        let redirect = redirect.clone();
        Arc::new(move |expired: SessionExpired| {
            fired.fetch_add(1, Ordering::SeqCst);
            *redirect.lock().unwrap() = Some(expired.redirect);
        })
    };

    let client = ContratoClient::builder()
        .base_url(uri)
        .session(session.clone())
        .on_session_expired(hook)
        .build()
        .unwrap();

    Harness {
        client,
        session,
        fired,
        redirect,
    }
}

#[tokio::test]
async fn unauthorized_outside_auth_clears_session_and_fires_hook_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contratos"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let h = harness(mock_server.uri());
    assert!(h.session.is_authenticated());

    // the caller still gets its envelope: side effect and return value are
    // independent
    let envelope = h.client.listar_contratos().await.unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.authenticated, Some(false));
    assert!(envelope.contratos.is_empty());

    assert!(!h.session.is_authenticated());
    assert_eq!(h.fired.load(Ordering::SeqCst), 1);
    assert_eq!(h.redirect.lock().unwrap().as_deref(), Some("/"));
}

#[tokio::test]
async fn unauthorized_on_other_endpoints_surfaces_as_error_but_still_guards() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboard/stats"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let h = harness(mock_server.uri());
    let result = h.client.dashboard_stats().await;

    assert!(matches!(
        result,
        Err(contrato_client::ApiError::Unauthorized(_))
    ));
    assert!(!h.session.is_authenticated());
    assert_eq!(h.fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unauthorized_on_auth_endpoints_is_exempt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Senha inválida"
        })))
        .mount(&mock_server)
        .await;

    let h = harness(mock_server.uri());
    let result = h.client.login("maria@exemplo.com.br", "errada").await;

    // the 401 surfaces to the caller, but a failed login must not nuke the
    // session that was already cached
    assert!(result.is_err());
    assert!(h.session.is_authenticated());
    assert_eq!(h.fired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn expired_session_fires_once_per_observed_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contratos"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let h = harness(mock_server.uri());
    h.client.listar_contratos().await.unwrap();
    h.client.listar_contratos().await.unwrap();

    // two revoked responses, two hook firings; never more per response
    assert_eq!(h.fired.load(Ordering::SeqCst), 2);
}

// ========== bootstrap helper ==========

#[tokio::test]
async fn verificar_sessao_active() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authenticated": true,
            "user": {
                "id": 7,
                "nome_completo": "Maria Souza",
                "email": "maria@exemplo.com.br"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = ContratoClient::new(mock_server.uri()).unwrap();
    match bootstrap::verificar_sessao(&client).await {
        Sessao::Ativa(user) => assert_eq!(user, usuario()),
        Sessao::Redirecionar(target) => panic!("unexpected redirect to {target}"),
    }
    // the check doubled as a session refresh
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn verificar_sessao_expired_redirects_with_marker() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/check"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "authenticated": false })),
        )
        .mount(&mock_server)
        .await;

    let client = ContratoClient::new(mock_server.uri()).unwrap();
    assert_eq!(
        bootstrap::verificar_sessao(&client).await,
        Sessao::Redirecionar("/index.html?session_expired=true".to_string())
    );
}

#[tokio::test]
async fn verificar_sessao_unreachable_redirects_with_marker() {
    let client = ContratoClient::new("http://127.0.0.1:9").unwrap();
    assert_eq!(
        bootstrap::verificar_sessao(&client).await,
        Sessao::Redirecionar("/index.html?session_expired=true".to_string())
    );
}

#[tokio::test]
async fn encerrar_sessao_clears_and_returns_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Logout realizado com sucesso"
        })))
        .mount(&mock_server)
        .await;

    let session = SessionHandle::in_memory();
    session.replace(Session::new(usuario(), None)).unwrap();

    let client = ContratoClient::builder()
        .base_url(mock_server.uri())
        .session(session.clone())
        .build()
        .unwrap();

    let target = bootstrap::encerrar_sessao(&client).await;
    assert_eq!(target, "/index.html");
    assert!(!session.is_authenticated());
}
