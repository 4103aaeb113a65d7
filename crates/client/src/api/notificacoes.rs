//! Notification client methods

use crate::client::ContratoClient;
use crate::error::ApiResult;
use crate::types::{NotificacoesEnvelope, NotificarEnvelope, NotificarRequest};

impl ContratoClient {
    /// List notification history across the user's contracts
    pub async fn listar_notificacoes(&self) -> ApiResult<NotificacoesEnvelope> {
        self.execute(self.request(reqwest::Method::GET, "/notificacoes"))
            .await
    }

    /// Send a notification email for one contract
    pub async fn enviar_notificacao(
        &self,
        contrato_id: i64,
        dados: &NotificarRequest,
    ) -> ApiResult<NotificarEnvelope> {
        let req = self
            .request(
                reqwest::Method::POST,
                &format!("/contratos/{contrato_id}/notificar"),
            )
            .json(dados);
        self.execute(req).await
    }
}
