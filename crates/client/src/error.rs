//! Client error types

use thiserror::Error;

/// Fixed human-readable text for any transport-level failure; the UI never
/// distinguishes DNS failure from refusal from timeout.
pub const ERRO_CONEXAO: &str = "Erro de conexão com o servidor";

/// Result alias used by every client method
pub type ApiResult<T> = Result<T, ApiError>;

/// Client error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or request error
    #[error("{ERRO_CONEXAO}: {0}")]
    Connection(reqwest::Error),

    /// The server answered, but the body was not the JSON we expected
    #[error("Resposta inválida do servidor: {0}")]
    InvalidResponse(reqwest::Error),

    /// Authentication failed or session revoked (HTTP 401)
    #[error("Não autorizado: {0}")]
    Unauthorized(String),

    /// Resource not found
    #[error("Não encontrado: {0}")]
    NotFound(String),

    /// Any other non-success HTTP status
    #[error("Erro do servidor {status}: {message}")]
    Http { status: u16, message: String },

    /// Local session storage failed
    #[error("Falha na sessão local: {0}")]
    Session(#[from] contrato_core::CoreError),

    /// Invalid configuration
    #[error("Configuração inválida: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Self::Unauthorized(message),
            404 => Self::NotFound(message),
            _ => Self::Http {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether this failure means the server revoked the session
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::InvalidResponse(err)
        } else {
            Self::Connection(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_classifies() {
        assert!(matches!(
            ApiError::from_status(reqwest::StatusCode::UNAUTHORIZED, "x".into()),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from_status(reqwest::StatusCode::NOT_FOUND, "x".into()),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "x".into()),
            ApiError::Http { status: 500, .. }
        ));
    }

    #[test]
    fn unauthorized_is_auth_expired() {
        assert!(ApiError::Unauthorized("sessão encerrada".into()).is_auth_expired());
        assert!(!ApiError::Configuration("base_url".into()).is_auth_expired());
    }
}
