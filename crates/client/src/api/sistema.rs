//! System utility client methods

use crate::client::{ContratoClient, parse_envelope};
use crate::error::{ApiError, ApiResult};
use crate::types::{Ack, HealthEnvelope, TesteEmailRequest};

impl ContratoClient {
    /// Ask the server to send a test email
    pub async fn testar_email(&self, email: &str) -> ApiResult<Ack> {
        let req = self
            .request(reqwest::Method::POST, "/email/test")
            .json(&TesteEmailRequest {
                email: email.to_string(),
            });
        self.execute(req).await
    }

    /// Probe server health
    ///
    /// Goes out on the credential-free transport: no cookies, no bearer
    /// header, and the session guard never sees the response.
    pub async fn verificar_sistema(&self) -> ApiResult<HealthEnvelope> {
        let response = self
            .bare_request(reqwest::Method::GET, "/system/health")
            .send()
            .await
            .map_err(ApiError::from)?;
        parse_envelope(response).await
    }
}
