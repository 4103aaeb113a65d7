//! Dashboard client methods

use crate::client::ContratoClient;
use crate::error::ApiResult;
use crate::types::StatsEnvelope;

impl ContratoClient {
    /// Fetch the dashboard aggregates
    pub async fn dashboard_stats(&self) -> ApiResult<StatsEnvelope> {
        self.execute(self.request(reqwest::Method::GET, "/dashboard/stats"))
            .await
    }
}
