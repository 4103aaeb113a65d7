//! CONTRATO+ core types and utilities
//!
//! Domain types shared by the client and its consumers, the session state
//! with its storage backends, and the pure helpers (deadlines, badges,
//! validation) every consumer surface needs.

pub mod badge;
pub mod error;
pub mod prazo;
pub mod session;
pub mod types;
pub mod validation;

pub use badge::{Badge, BadgeStyle};
pub use error::{CoreError, CoreResult};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionHandle, SessionStore};
pub use types::{Contrato, DashboardStats, Notificacao, Usuario};
