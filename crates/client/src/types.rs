//! Request and response envelope types
//!
//! Every backend response is an envelope: `success` plus whatever the
//! endpoint adds. Field names follow the wire format.

use contrato_core::{Contrato, DashboardStats, Notificacao, Usuario};
use serde::{Deserialize, Serialize};

// ========== requests ==========

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub nome_completo: String,
    pub email: String,
    pub senha: String,
}

/// Body for contract creation; `data_inicio`/`data_fim` are wire timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovoContrato {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub data_inicio: String,
    pub data_fim: String,
    /// Defaults to `ativo` server-side when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Partial update; only the present fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtualizaContrato {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_fim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificarRequest {
    pub emails: Vec<String>,
    /// `lembrete_diario`, `lembrete_semanal`, `lembrete_mensal` or free-form
    pub tipo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assunto: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensagem_customizada: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtualizaPerfil {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_completo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub senha: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TesteEmailRequest {
    pub email: String,
}

// ========== envelopes ==========

/// Bare acknowledgement, the minimum every endpoint answers with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Login/register response; `user` and `token` present on success
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Usuario>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// /auth/check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEnvelope {
    pub authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Usuario>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContratosEnvelope {
    pub success: bool,
    /// Only present on the 401 short-circuit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub contratos: Vec<Contrato>,
}

impl ContratosEnvelope {
    /// The fixed envelope the client synthesizes on HTTP 401, without
    /// touching the response body
    pub fn nao_autenticado() -> Self {
        Self {
            success: false,
            authenticated: Some(false),
            message: None,
            contratos: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContratoEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrato: Option<Contrato>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificacoesEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub notificacoes: Vec<Notificacao>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificarEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// How many addresses the notification went out to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enviados: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<DashboardStats>,
}

/// Profile record; a `Usuario` plus account metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perfil {
    pub id: i64,
    pub nome_completo: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criado_em: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerfilEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario: Option<Perfil>,
}

/// /system/health answer; tolerant of whichever fields the server sends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servidor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versao: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}
