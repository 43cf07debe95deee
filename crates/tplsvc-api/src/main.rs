//! # tplsvc — Binary Entry Point
//!
//! Loads the template registry from `--base-dir` and serves it over HTTP.
//! A registry that fails to load stops the process before the port is bound.

use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tplsvc_api::state::{AppConfig, AppState, DEFAULT_PORT};
use tplsvc_registry::Registry;

/// Handlebars template service.
///
/// Serves JSON schemas from `<base-dir>/schemas` and renders templates from
/// `<base-dir>/templates`.
#[derive(Parser, Debug)]
#[command(name = "tplsvc", version, about)]
struct Cli {
    /// Directory containing `schemas/` and `templates/`.
    #[arg(long = "base-dir", alias = "baseDir", default_value = ".")]
    base_dir: PathBuf,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let base_dir = std::fs::canonicalize(&cli.base_dir)
        .with_context(|| format!("base directory {} not found", cli.base_dir.display()))?;
    tracing::info!("Basedir {}", base_dir.display());

    let registry = Registry::load(&base_dir).map_err(|e| {
        tracing::error!("{e}");
        e
    })?;

    let addr = AppConfig {
        host: cli.host,
        port: cli.port,
    }
    .listen_addr();
    let app = tplsvc_api::app(AppState::new(registry));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
