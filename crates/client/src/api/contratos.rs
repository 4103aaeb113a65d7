//! Contract CRUD client methods

use crate::client::{ContratoClient, parse_envelope};
use crate::error::ApiResult;
use crate::types::{Ack, AtualizaContrato, ContratoEnvelope, ContratosEnvelope, NovoContrato};
use reqwest::StatusCode;

impl ContratoClient {
    /// List the user's contracts
    ///
    /// An HTTP 401 here short-circuits to the fixed
    /// `{success: false, authenticated: false}` envelope without a parse
    /// attempt; the session guard has already fired by the time we see it.
    pub async fn listar_contratos(&self) -> ApiResult<ContratosEnvelope> {
        let response = self
            .dispatch(self.request(reqwest::Method::GET, "/contratos"))
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(ContratosEnvelope::nao_autenticado());
        }

        parse_envelope(response).await
    }

    /// Fetch a single contract
    pub async fn obter_contrato(&self, id: i64) -> ApiResult<ContratoEnvelope> {
        self.execute(self.request(reqwest::Method::GET, &format!("/contratos/{id}")))
            .await
    }

    /// Create a contract
    pub async fn criar_contrato(&self, contrato: &NovoContrato) -> ApiResult<ContratoEnvelope> {
        let req = self
            .request(reqwest::Method::POST, "/contratos")
            .json(contrato);
        self.execute(req).await
    }

    /// Update the present fields of a contract
    pub async fn atualizar_contrato(
        &self,
        id: i64,
        mudancas: &AtualizaContrato,
    ) -> ApiResult<ContratoEnvelope> {
        let req = self
            .request(reqwest::Method::PUT, &format!("/contratos/{id}"))
            .json(mudancas);
        self.execute(req).await
    }

    /// Delete a contract and its notification history
    pub async fn excluir_contrato(&self, id: i64) -> ApiResult<Ack> {
        self.execute(self.request(reqwest::Method::DELETE, &format!("/contratos/{id}")))
            .await
    }
}
