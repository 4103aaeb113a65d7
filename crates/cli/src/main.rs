//! CONTRATO+ command-line client

mod commands;
mod config;
mod logging;
mod notices;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Commands;
use tracing::{Level, error};

#[derive(Parser)]
#[command(name = "contrato")]
#[command(about = "Cliente de linha de comando do CONTRATO+")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Backend base URL (overrides config file and CONTRATO_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory for session state and config
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.into())?;

    let config = config::load(cli.api_url, cli.data_dir)?;

    if let Err(e) = cli.command.execute(config).await {
        error!("comando falhou: {e}");
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
