//! Bearer-token stage
//!
//! Attaches `Authorization: Bearer <token>` when the session has a cached
//! token. Requests go out untouched otherwise; cookie-only sessions are
//! still valid.

use super::{Middleware, Next};
use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;
use contrato_core::SessionHandle;
use reqwest::header;

pub struct AuthStage {
    session: SessionHandle,
}

impl AuthStage {
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }
}

#[async_trait]
impl Middleware for AuthStage {
    async fn handle(
        &self,
        mut req: reqwest::Request,
        next: Next<'_>,
    ) -> ApiResult<reqwest::Response> {
        if let Some(token) = self.session.token() {
            let value = header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::Configuration("bearer token is not a valid header".into()))?;
            req.headers_mut().insert(header::AUTHORIZATION, value);
        }
        next.run(req).await
    }
}
