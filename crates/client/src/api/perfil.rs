//! Profile settings client methods

use crate::client::ContratoClient;
use crate::error::ApiResult;
use crate::types::{AtualizaPerfil, PerfilEnvelope};

impl ContratoClient {
    /// Fetch the logged-in user's profile
    pub async fn obter_perfil(&self) -> ApiResult<PerfilEnvelope> {
        self.execute(self.request(reqwest::Method::GET, "/configuracoes/perfil"))
            .await
    }

    /// Update the present fields of the profile
    pub async fn atualizar_perfil(&self, dados: &AtualizaPerfil) -> ApiResult<PerfilEnvelope> {
        let req = self
            .request(reqwest::Method::PUT, "/configuracoes/perfil")
            .json(dados);
        self.execute(req).await
    }
}
