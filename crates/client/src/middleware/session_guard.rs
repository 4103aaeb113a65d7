//! Session-expiry stage
//!
//! Enforces the one cross-cutting invariant of the client: no response gets
//! silently treated as authenticated after the server revoked the session.
//! A 401 outside the auth endpoint group clears the stored session and fires
//! the registered expiry hook exactly once; the response itself continues to
//! the caller unchanged, so endpoint-level 401 handling (the contract
//! listing) still sees it.

use super::{Middleware, Next};
use crate::error::ApiResult;
use async_trait::async_trait;
use contrato_core::SessionHandle;
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{error, warn};

/// Where an expired session should send the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionExpired {
    /// Navigation target, the root/login document
    pub redirect: String,
}

/// Callback invoked when the guard observes a revoked session
pub type SessionExpiredHook = Arc<dyn Fn(SessionExpired) + Send + Sync>;

/// The root document; logging in lives there
pub const LOGIN_DOCUMENT: &str = "/";

/// Endpoints whose 401s mean "bad credentials", not "session revoked"
fn is_auth_endpoint(path: &str) -> bool {
    path.contains("/auth/")
}

pub struct SessionGuard {
    session: SessionHandle,
    hook: Option<SessionExpiredHook>,
}

impl SessionGuard {
    pub fn new(session: SessionHandle, hook: Option<SessionExpiredHook>) -> Self {
        Self { session, hook }
    }
}

#[async_trait]
impl Middleware for SessionGuard {
    async fn handle(&self, req: reqwest::Request, next: Next<'_>) -> ApiResult<reqwest::Response> {
        let path = req.url().path().to_string();
        let response = next.run(req).await?;

        if response.status() == StatusCode::UNAUTHORIZED && !is_auth_endpoint(&path) {
            warn!(%path, "sessão revogada pelo servidor, limpando estado local");
            if let Err(err) = self.session.clear() {
                error!("falha ao limpar sessão local: {err}");
            }
            if let Some(hook) = &self.hook {
                hook(SessionExpired {
                    redirect: LOGIN_DOCUMENT.to_string(),
                });
            }
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_endpoints_are_exempt() {
        assert!(is_auth_endpoint("/api/auth/login"));
        assert!(is_auth_endpoint("/auth/check"));
        assert!(!is_auth_endpoint("/api/contratos"));
        assert!(!is_auth_endpoint("/api/dashboard/stats"));
    }
}
