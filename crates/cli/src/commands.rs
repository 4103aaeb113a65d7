//! CLI subcommands
//!
//! Each command is one client call plus terminal rendering; the session
//! lives in the platform data dir, so consecutive invocations share it the
//! way pages shared browser storage.

use crate::config::CliConfig;
use crate::notices::{TerminalLoading, TerminalSink};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::Subcommand;
use contrato_client::types::{AtualizaContrato, AtualizaPerfil, NotificarRequest, NovoContrato};
use contrato_client::{
    ContratoClient, Notice, NoticeSink, SessionExpired, SessionExpiredHook, begin_loading,
    bootstrap,
};
use contrato_core::badge::{self, BadgeStyle};
use contrato_core::{Contrato, FileSessionStore, SessionHandle, prazo, validation};
use std::sync::Arc;

#[derive(Subcommand)]
pub enum Commands {
    /// Entrar com email e senha
    Login {
        email: String,
        #[arg(long)]
        senha: String,
    },
    /// Criar uma conta e entrar
    Registrar {
        nome_completo: String,
        email: String,
        #[arg(long)]
        senha: String,
    },
    /// Encerrar a sessão
    Logout,
    /// Mostrar o estado da sessão
    Status,
    /// Operações sobre contratos
    #[command(subcommand)]
    Contratos(ContratosCmd),
    /// Histórico e envio de notificações
    #[command(subcommand)]
    Notificacoes(NotificacoesCmd),
    /// Resumo do painel
    Dashboard,
    /// Perfil do usuário
    #[command(subcommand)]
    Perfil(PerfilCmd),
    /// Enviar um email de teste
    TestarEmail { email: String },
    /// Verificar a saúde do servidor (sem credenciais)
    Health,
}

#[derive(Subcommand)]
pub enum ContratosCmd {
    /// Listar os contratos do usuário
    Listar,
    /// Mostrar um contrato
    Obter { id: i64 },
    /// Criar um contrato
    Criar {
        nome: String,
        #[arg(long)]
        descricao: Option<String>,
        #[arg(long)]
        data_inicio: String,
        #[arg(long)]
        data_fim: String,
        #[arg(long)]
        status: Option<String>,
    },
    /// Atualizar os campos informados de um contrato
    Atualizar {
        id: i64,
        #[arg(long)]
        nome: Option<String>,
        #[arg(long)]
        descricao: Option<String>,
        #[arg(long)]
        data_inicio: Option<String>,
        #[arg(long)]
        data_fim: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Excluir um contrato e seu histórico de notificações
    Excluir { id: i64 },
}

#[derive(Subcommand)]
pub enum NotificacoesCmd {
    /// Listar o histórico de notificações
    Listar,
    /// Enviar uma notificação para um contrato
    Enviar {
        contrato_id: i64,
        /// Destinatários separados por vírgula
        #[arg(long, value_delimiter = ',')]
        emails: Vec<String>,
        /// lembrete_diario, lembrete_semanal ou lembrete_mensal
        #[arg(long)]
        tipo: String,
        #[arg(long)]
        assunto: Option<String>,
        #[arg(long)]
        mensagem: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PerfilCmd {
    /// Mostrar o perfil
    Ver,
    /// Atualizar os campos informados do perfil
    Atualizar {
        #[arg(long)]
        nome_completo: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        senha: Option<String>,
    },
}

impl Commands {
    pub async fn execute(self, config: CliConfig) -> Result<()> {
        let sink = Arc::new(TerminalSink);
        let client = build_client(&config, sink.clone())?;

        match self {
            Commands::Login { email, senha } => login(&client, &sink, &email, &senha).await,
            Commands::Registrar {
                nome_completo,
                email,
                senha,
            } => registrar(&client, &sink, &nome_completo, &email, &senha).await,
            Commands::Logout => {
                bootstrap::encerrar_sessao(&client).await;
                sink.notify(&Notice::sucesso("Logout realizado com sucesso!"));
                Ok(())
            }
            Commands::Status => status(&client).await,
            Commands::Contratos(cmd) => contratos(&client, &sink, cmd).await,
            Commands::Notificacoes(cmd) => notificacoes(&client, &sink, cmd).await,
            Commands::Dashboard => dashboard(&client).await,
            Commands::Perfil(cmd) => perfil(&client, &sink, cmd).await,
            Commands::TestarEmail { email } => testar_email(&client, &sink, &email).await,
            Commands::Health => health(&client).await,
        }
    }
}

fn build_client(config: &CliConfig, sink: Arc<TerminalSink>) -> Result<ContratoClient> {
    let store = match &config.data_dir {
        Some(dir) => FileSessionStore::new(dir.join("session.json")),
        None => FileSessionStore::at_default_path()
            .context("não foi possível determinar o diretório de dados")?,
    };
    let session = SessionHandle::new(store);

    let hook: SessionExpiredHook = Arc::new(move |expired: SessionExpired| {
        sink.notify(&Notice::aviso(format!(
            "Sua sessão expirou. Entre novamente em {}",
            expired.redirect
        )));
    });

    let client = ContratoClient::builder()
        .base_url(config.api_url.clone())
        .session(session)
        .on_session_expired(hook)
        .build()?;
    Ok(client)
}

async fn login(
    client: &ContratoClient,
    sink: &TerminalSink,
    email: &str,
    senha: &str,
) -> Result<()> {
    if !validation::validar_email(email) {
        bail!("email inválido: {email}");
    }
    if !validation::validar_senha(senha) {
        bail!("a senha precisa de pelo menos 6 caracteres");
    }

    let envelope = client.login(email, senha).await?;
    if envelope.success {
        let nome = envelope
            .user
            .map(|u| u.nome_completo)
            .unwrap_or_else(|| email.to_string());
        sink.notify(&Notice::sucesso(format!("Bem-vindo(a), {nome}!")));
    } else {
        sink.notify(&Notice::erro(
            envelope.message.unwrap_or_else(|| "Falha no login".into()),
        ));
    }
    Ok(())
}

async fn registrar(
    client: &ContratoClient,
    sink: &TerminalSink,
    nome_completo: &str,
    email: &str,
    senha: &str,
) -> Result<()> {
    if !validation::validar_email(email) {
        bail!("email inválido: {email}");
    }
    if !validation::validar_senha(senha) {
        bail!("a senha precisa de pelo menos 6 caracteres");
    }

    let envelope = client.register(nome_completo, email, senha).await?;
    if envelope.success {
        sink.notify(&Notice::sucesso("Conta criada, você já está logado."));
    } else {
        sink.notify(&Notice::erro(
            envelope
                .message
                .unwrap_or_else(|| "Falha no registro".into()),
        ));
    }
    Ok(())
}

async fn status(client: &ContratoClient) -> Result<()> {
    let envelope = client.check_auth().await?;
    if envelope.authenticated {
        match client.session().user() {
            Some(user) => println!("Autenticado como {} <{}>", user.nome_completo, user.email),
            None => println!("Autenticado"),
        }
    } else {
        println!("Não autenticado");
    }
    Ok(())
}

async fn contratos(client: &ContratoClient, sink: &TerminalSink, cmd: ContratosCmd) -> Result<()> {
    match cmd {
        ContratosCmd::Listar => {
            let loading = begin_loading(&TerminalLoading);
            let envelope = client.listar_contratos().await;
            drop(loading);
            let envelope = envelope?;
            if !envelope.success {
                // the expiry hook has already spoken when this is a 401
                if envelope.authenticated != Some(false) {
                    sink.notify(&Notice::erro(
                        envelope
                            .message
                            .unwrap_or_else(|| "Erro ao listar contratos".into()),
                    ));
                }
                return Ok(());
            }
            if envelope.contratos.is_empty() {
                println!("Nenhum contrato cadastrado.");
            }
            for contrato in &envelope.contratos {
                imprimir_contrato_linha(contrato);
            }
        }
        ContratosCmd::Obter { id } => {
            let envelope = client.obter_contrato(id).await?;
            match envelope.contrato {
                Some(contrato) => imprimir_contrato(&contrato),
                None => sink.notify(&Notice::erro(
                    envelope
                        .message
                        .unwrap_or_else(|| "Contrato não encontrado".into()),
                )),
            }
        }
        ContratosCmd::Criar {
            nome,
            descricao,
            data_inicio,
            data_fim,
            status,
        } => {
            let envelope = client
                .criar_contrato(&NovoContrato {
                    nome,
                    descricao,
                    data_inicio,
                    data_fim,
                    status,
                })
                .await?;
            notificar_resultado(sink, envelope.success, envelope.message, "Contrato criado");
        }
        ContratosCmd::Atualizar {
            id,
            nome,
            descricao,
            data_inicio,
            data_fim,
            status,
        } => {
            let envelope = client
                .atualizar_contrato(
                    id,
                    &AtualizaContrato {
                        nome,
                        descricao,
                        data_inicio,
                        data_fim,
                        status,
                    },
                )
                .await?;
            notificar_resultado(
                sink,
                envelope.success,
                envelope.message,
                "Contrato atualizado",
            );
        }
        ContratosCmd::Excluir { id } => {
            let envelope = client.excluir_contrato(id).await?;
            notificar_resultado(
                sink,
                envelope.success,
                envelope.message,
                "Contrato excluído",
            );
        }
    }
    Ok(())
}

async fn notificacoes(
    client: &ContratoClient,
    sink: &TerminalSink,
    cmd: NotificacoesCmd,
) -> Result<()> {
    match cmd {
        NotificacoesCmd::Listar => {
            let envelope = client.listar_notificacoes().await?;
            if envelope.notificacoes.is_empty() {
                println!("Nenhuma notificação enviada.");
            }
            for n in &envelope.notificacoes {
                println!(
                    "#{} [{}] {} -> {} ({})",
                    n.id,
                    n.status,
                    n.assunto,
                    n.email_destino,
                    n.contrato_nome.as_deref().unwrap_or("-"),
                );
            }
        }
        NotificacoesCmd::Enviar {
            contrato_id,
            emails,
            tipo,
            assunto,
            mensagem,
        } => {
            if emails.is_empty() {
                bail!("informe pelo menos um destinatário");
            }
            for email in &emails {
                if !validation::validar_email(email) {
                    bail!("email inválido: {email}");
                }
            }
            let envelope = client
                .enviar_notificacao(
                    contrato_id,
                    &NotificarRequest {
                        emails,
                        tipo,
                        assunto,
                        mensagem_customizada: mensagem,
                    },
                )
                .await?;
            notificar_resultado(
                sink,
                envelope.success,
                envelope.message,
                "Notificação enviada",
            );
        }
    }
    Ok(())
}

async fn dashboard(client: &ContratoClient) -> Result<()> {
    let loading = begin_loading(&TerminalLoading);
    let envelope = client.dashboard_stats().await;
    drop(loading);
    let envelope = envelope?;
    let Some(stats) = envelope.stats else {
        println!("Sem estatísticas disponíveis.");
        return Ok(());
    };

    println!("Contratos:        {}", stats.total_contratos);
    println!("Ativos:           {}", stats.contratos_ativos);
    println!("Vencendo em 7d:   {}", stats.contratos_vencendo_7dias);
    println!("Vencidos:         {}", stats.contratos_vencidos);
    if !stats.contratos_recentes.is_empty() {
        println!("Recentes:");
        for contrato in &stats.contratos_recentes {
            imprimir_contrato_linha(contrato);
        }
    }
    Ok(())
}

async fn perfil(client: &ContratoClient, sink: &TerminalSink, cmd: PerfilCmd) -> Result<()> {
    match cmd {
        PerfilCmd::Ver => {
            let envelope = client.obter_perfil().await?;
            match envelope.usuario {
                Some(perfil) => {
                    println!("{} <{}>", perfil.nome_completo, perfil.email);
                    if let Some(criado_em) = &perfil.criado_em {
                        println!("Conta criada em {}", prazo::formatar_data_simples(criado_em));
                    }
                }
                None => sink.notify(&Notice::erro(
                    envelope
                        .message
                        .unwrap_or_else(|| "Perfil indisponível".into()),
                )),
            }
        }
        PerfilCmd::Atualizar {
            nome_completo,
            email,
            senha,
        } => {
            if let Some(email) = &email {
                if !validation::validar_email(email) {
                    bail!("email inválido: {email}");
                }
            }
            if let Some(senha) = &senha {
                if !validation::validar_senha(senha) {
                    bail!("a senha precisa de pelo menos 6 caracteres");
                }
            }
            let envelope = client
                .atualizar_perfil(&AtualizaPerfil {
                    nome_completo,
                    email,
                    senha,
                })
                .await?;
            notificar_resultado(
                sink,
                envelope.success,
                envelope.message,
                "Perfil atualizado",
            );
        }
    }
    Ok(())
}

async fn testar_email(client: &ContratoClient, sink: &TerminalSink, email: &str) -> Result<()> {
    if !validation::validar_email(email) {
        bail!("email inválido: {email}");
    }
    let envelope = client.testar_email(email).await?;
    notificar_resultado(
        sink,
        envelope.success,
        envelope.message,
        "Email de teste enviado",
    );
    Ok(())
}

async fn health(client: &ContratoClient) -> Result<()> {
    match client.verificar_sistema().await {
        Ok(envelope) => {
            let servidor = envelope.servidor.as_deref().unwrap_or("servidor");
            let versao = envelope.versao.as_deref().unwrap_or("?");
            println!("{servidor} v{versao}: disponível");
        }
        Err(err) => println!("Servidor indisponível ({err})"),
    }
    Ok(())
}

fn notificar_resultado(
    sink: &TerminalSink,
    success: bool,
    message: Option<String>,
    default_ok: &str,
) {
    if success {
        sink.notify(&Notice::sucesso(
            message.unwrap_or_else(|| default_ok.to_string()),
        ));
    } else {
        sink.notify(&Notice::erro(
            message.unwrap_or_else(|| "Erro na operação".to_string()),
        ));
    }
}

fn imprimir_contrato_linha(contrato: &Contrato) {
    let status = badge::status_badge(&contrato.status);
    let dias = contrato
        .dias_restantes
        .or_else(|| prazo::dias_restantes_para(&contrato.data_fim, Utc::now()));
    let prazo_txt = match dias {
        Some(dias) => {
            let prioridade = badge::prioridade_badge(dias);
            format!("{dias} dia(s) [{}]", prioridade.label)
        }
        None => "sem prazo".to_string(),
    };
    println!(
        "#{:<4} {:<30} {} vence {} ({prazo_txt})",
        contrato.id,
        contrato.nome,
        pintar(&status.style, &status.label),
        prazo::formatar_data_simples(&contrato.data_fim),
    );
}

fn imprimir_contrato(contrato: &Contrato) {
    let status = badge::status_badge(&contrato.status);
    println!("Contrato #{}: {}", contrato.id, contrato.nome);
    if let Some(descricao) = &contrato.descricao {
        if !descricao.is_empty() {
            println!("  {descricao}");
        }
    }
    println!("  Status: {}", pintar(&status.style, &status.label));
    println!(
        "  Vigência: {} a {}",
        prazo::formatar_data_simples(&contrato.data_inicio),
        prazo::formatar_data_simples(&contrato.data_fim),
    );
    if let Some(dias) = contrato
        .dias_restantes
        .or_else(|| prazo::dias_restantes_para(&contrato.data_fim, Utc::now()))
    {
        let prioridade = badge::prioridade_badge(dias);
        println!("  Prazo: {dias} dia(s) [{}]", prioridade.label);
    }
}

fn pintar(style: &BadgeStyle, label: &str) -> String {
    let color = match style {
        BadgeStyle::Green => "\x1b[32m",
        BadgeStyle::Gray => "\x1b[90m",
        BadgeStyle::Yellow => "\x1b[33m",
        BadgeStyle::Blue => "\x1b[34m",
        BadgeStyle::Red => "\x1b[31m",
    };
    format!("{color}{label}\x1b[0m")
}
