//! Client-side request pipeline
//!
//! Every request flows `auth stage → send → guard stage` as an explicit,
//! composable chain instead of a patched global transport. Stages see the
//! request on the way out and the response on the way back; the innermost
//! step is the actual send.

pub mod auth;
pub mod session_guard;

use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use std::sync::Arc;

/// One stage of the pipeline
///
/// A stage may rewrite the request before delegating to `next` and may act on
/// the response afterwards, but it must hand the response back unchanged so
/// callers keep their own view of the status code.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, req: reqwest::Request, next: Next<'_>) -> ApiResult<reqwest::Response>;
}

/// The remainder of the pipeline after the current stage
pub struct Next<'a> {
    client: &'a reqwest::Client,
    stages: &'a [Arc<dyn Middleware>],
}

impl<'a> Next<'a> {
    pub(crate) fn new(client: &'a reqwest::Client, stages: &'a [Arc<dyn Middleware>]) -> Self {
        Self { client, stages }
    }

    /// Run the rest of the chain; with no stages left, this is the send
    pub async fn run(self, req: reqwest::Request) -> ApiResult<reqwest::Response> {
        match self.stages.split_first() {
            Some((stage, rest)) => {
                stage.handle(req, Next::new(self.client, rest)).await
            }
            None => self.client.execute(req).await.map_err(ApiError::from),
        }
    }
}
