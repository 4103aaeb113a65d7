//! CONTRATO+ HTTP client
//!
//! Typed client for the CONTRATO+ REST backend: bearer/cookie authentication,
//! a request pipeline that enforces the session-expiry protocol, and the
//! session-check bootstrap helper consumers use before rendering anything.

pub mod api;
pub mod bootstrap;
pub mod client;
pub mod error;
pub mod feedback;
pub mod middleware;
pub mod types;

pub use client::{ContratoClient, ContratoClientBuilder};
pub use error::{ApiError, ApiResult};
pub use feedback::{LoadingIndicator, Notice, NoticeKind, NoticeSink, TracingSink, begin_loading};
pub use middleware::session_guard::{SessionExpired, SessionExpiredHook};
