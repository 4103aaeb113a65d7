//! Session-check bootstrap helper
//!
//! For consumers that need an answer to "may this page render?" before doing
//! anything else. Any way the check can fail — transport error, non-OK
//! status, an explicit `authenticated: false` — collapses into the same
//! redirect outcome carrying the login document with the session-expired
//! marker.

use crate::client::ContratoClient;
use contrato_core::Usuario;
use tracing::warn;

/// Login document with the marker pages use to show "sua sessão expirou"
pub const LOGIN_EXPIRADO: &str = "/index.html?session_expired=true";

/// Login document for a plain navigation (after logout)
pub const LOGIN: &str = "/index.html";

/// Outcome of the pre-render session check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sessao {
    /// Session stands; render for this user
    Ativa(Usuario),
    /// Session is gone; navigate to the given target and render nothing
    Redirecionar(String),
}

/// Check the session before rendering a page
///
/// Delegates to the client's auth-check, so the local session refreshes or
/// clears as a side effect exactly as it would on any other call.
pub async fn verificar_sessao(client: &ContratoClient) -> Sessao {
    match client.check_auth().await {
        Ok(envelope) if envelope.authenticated => {
            // the check answered yes; prefer its user record, fall back to
            // the cached one
            if let Some(user) = envelope.user.or_else(|| client.session().user()) {
                Sessao::Ativa(user)
            } else {
                Sessao::Redirecionar(LOGIN_EXPIRADO.to_string())
            }
        }
        Ok(_) => Sessao::Redirecionar(LOGIN_EXPIRADO.to_string()),
        Err(err) => {
            warn!("verificação de sessão falhou: {err}");
            Sessao::Redirecionar(LOGIN_EXPIRADO.to_string())
        }
    }
}

/// Log out and return where to navigate next
///
/// The local session is cleared even when the server call fails; the
/// navigation target is the login document either way.
pub async fn encerrar_sessao(client: &ContratoClient) -> String {
    if let Err(err) = client.logout().await {
        warn!("logout no servidor falhou, sessão local já limpa: {err}");
    }
    LOGIN.to_string()
}
