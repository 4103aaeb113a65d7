//! Authentication API client methods
//!
//! These are the only methods with session side effects: login/register
//! persist the session on success, auth-check refreshes or clears it, and
//! logout clears it no matter what the server says — the local session is
//! the client's source of truth for "am I logged in".

use crate::client::ContratoClient;
use crate::error::ApiResult;
use crate::types::{Ack, AuthEnvelope, CheckEnvelope, LoginRequest, RegisterRequest};
use contrato_core::session::Session;

impl ContratoClient {
    /// Authenticate with email + password; persists the session on success
    pub async fn login(&self, email: &str, senha: &str) -> ApiResult<AuthEnvelope> {
        let req = self
            .request(reqwest::Method::POST, "/auth/login")
            .json(&LoginRequest {
                email: email.to_string(),
                senha: senha.to_string(),
            });
        let envelope: AuthEnvelope = self.execute(req).await?;
        self.persist_auth(&envelope)?;
        Ok(envelope)
    }

    /// Create an account; persists the session on success
    pub async fn register(
        &self,
        nome_completo: &str,
        email: &str,
        senha: &str,
    ) -> ApiResult<AuthEnvelope> {
        let req = self
            .request(reqwest::Method::POST, "/auth/register")
            .json(&RegisterRequest {
                nome_completo: nome_completo.to_string(),
                email: email.to_string(),
                senha: senha.to_string(),
            });
        let envelope: AuthEnvelope = self.execute(req).await?;
        self.persist_auth(&envelope)?;
        Ok(envelope)
    }

    /// End the session server-side; the local session is cleared even when
    /// the server answers failure or is unreachable
    pub async fn logout(&self) -> ApiResult<Ack> {
        let resposta = self
            .execute(self.request(reqwest::Method::POST, "/auth/logout"))
            .await;
        self.session().clear()?;
        resposta
    }

    /// Ask the server whether the session still stands, refreshing the local
    /// user record on yes and clearing the session on an explicit no
    pub async fn check_auth(&self) -> ApiResult<CheckEnvelope> {
        let envelope: CheckEnvelope = self
            .execute(self.request(reqwest::Method::GET, "/auth/check"))
            .await?;

        match (envelope.authenticated, &envelope.user) {
            (true, Some(user)) => self.session().refresh_user(user.clone())?,
            (true, None) => {}
            (false, _) => self.session().clear()?,
        }

        Ok(envelope)
    }

    fn persist_auth(&self, envelope: &AuthEnvelope) -> ApiResult<()> {
        if envelope.success {
            if let Some(user) = &envelope.user {
                self.session()
                    .replace(Session::new(user.clone(), envelope.token.clone()))?;
            }
        }
        Ok(())
    }
}
