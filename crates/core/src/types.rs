//! Domain types as the CONTRATO+ backend reports them
//!
//! Field names follow the wire format. Timestamps stay as the strings the
//! backend emits (a mix of ISO-8601 and `YYYY-MM-DD HH:MM:SS`); parsing is
//! the job of [`crate::prazo`].

use serde::{Deserialize, Serialize};

/// Logged-in principal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nome_completo: String,
    pub email: String,
}

/// The managed contract resource
///
/// `status` carries one of the five known values (`ativo`, `inativo`,
/// `pendente`, `concluido`, `vencido`) but is kept as a raw string so an
/// unknown status coming off the wire survives round trips and still renders
/// (see [`crate::badge::status_badge`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contrato {
    pub id: i64,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    pub data_inicio: String,
    pub data_fim: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criado_em: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atualizado_em: Option<String>,
    /// Server-computed; clients recompute locally via [`crate::prazo`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dias_restantes: Option<i64>,
}

/// Notification record joined with its contract name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notificacao {
    pub id: i64,
    pub contrato_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrato_nome: Option<String>,
    pub tipo: String,
    pub assunto: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<String>,
    pub email_destino: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_envio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criado_em: Option<String>,
}

/// Aggregates for the dashboard page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_contratos: i64,
    pub contratos_ativos: i64,
    pub contratos_vencendo_7dias: i64,
    pub contratos_vencidos: i64,
    #[serde(default)]
    pub contratos_recentes: Vec<Contrato>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atualizado_em: Option<String>,
}
