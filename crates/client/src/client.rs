//! CONTRATO+ API client
//!
//! Single point of contact with the backend: owns the transport, the session
//! cache and the request pipeline. Endpoint methods live in [`crate::api`].

use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthStage;
use crate::middleware::session_guard::{SessionExpiredHook, SessionGuard};
use crate::middleware::{Middleware, Next};
use contrato_core::SessionHandle;
use reqwest::{ClientBuilder, header};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("contrato-client/", env!("CARGO_PKG_VERSION"));

/// CONTRATO+ API client
///
/// Cheap to clone; clones share the transport, cookie jar and session.
#[derive(Clone)]
pub struct ContratoClient {
    /// Transport with cookie jar; everything except the health probe
    http: reqwest::Client,
    /// Credential-free transport for the health probe
    bare: reqwest::Client,
    base_url: String,
    session: SessionHandle,
    stages: Arc<[Arc<dyn Middleware>]>,
}

impl ContratoClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ContratoClientBuilder {
        ContratoClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session shared with this client's pipeline
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Create a request builder; auth headers are the pipeline's job
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
    }

    /// Request builder on the credential-free transport: no cookie jar and
    /// the pipeline (bearer header, session guard) never sees it
    pub(crate) fn bare_request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.bare
            .request(method, url)
            .header(header::ACCEPT, "application/json")
    }

    /// Send a request through the pipeline and return the raw response
    pub(crate) async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<reqwest::Response> {
        let req = request.build().map_err(ApiError::from)?;
        debug!(method = %req.method(), url = %req.url(), "enviando requisição");
        Next::new(&self.http, &self.stages).run(req).await
    }

    /// Execute a request and parse the typed envelope
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<T> {
        let response = self.dispatch(request).await?;
        parse_envelope(response).await
    }
}

/// Parse a success body as `T`, anything else into the status-classified error
pub(crate) async fn parse_envelope<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        response.json().await.map_err(ApiError::from)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ApiError::from_status(status, message))
    }
}

/// Builder for [`ContratoClient`]
#[derive(Default)]
pub struct ContratoClientBuilder {
    base_url: Option<String>,
    session: Option<SessionHandle>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    on_session_expired: Option<SessionExpiredHook>,
}

impl ContratoClientBuilder {
    /// Set the base URL (required)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Share an existing session; defaults to a fresh in-memory one
    pub fn session(mut self, session: SessionHandle) -> Self {
        self.session = Some(session);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Hook invoked when the guard observes a revoked session; receives the
    /// navigation target for the login document
    pub fn on_session_expired(mut self, hook: SessionExpiredHook) -> Self {
        self.on_session_expired = Some(hook);
        self
    }

    /// Build the client
    pub fn build(self) -> ApiResult<ContratoClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ApiError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let session = self.session.unwrap_or_else(SessionHandle::in_memory);
        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_string());

        let mut http = ClientBuilder::new()
            .user_agent(user_agent.clone())
            .cookie_store(true);
        let mut bare = ClientBuilder::new().user_agent(user_agent);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
            bare = bare.timeout(timeout);
        }

        let stages: Arc<[Arc<dyn Middleware>]> = Arc::from(vec![
            Arc::new(AuthStage::new(session.clone())) as Arc<dyn Middleware>,
            Arc::new(SessionGuard::new(session.clone(), self.on_session_expired)),
        ]);

        Ok(ContratoClient {
            http: http.build().map_err(ApiError::from)?,
            bare: bare.build().map_err(ApiError::from)?,
            base_url,
            session,
            stages,
        })
    }
}
