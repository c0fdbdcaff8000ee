//! HTTP server for the Severance Engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use severance_engine::api::{AppState, create_router};
use severance_engine::config::{ConfigLoader, EngineConfig};

#[derive(Parser)]
#[command(name = "severance-server")]
#[command(about = "Serves the liquidación calculator over HTTP.")]
struct CommandLine {
    /// YAML file overriding the earliest eligible date or minimum wage
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CommandLine::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match &args.config {
        Some(path) => ConfigLoader::load(path)?.into_config(),
        None => EngineConfig::default(),
    };
    info!(
        earliest_eligible_date = %config.earliest_eligible_date,
        minimum_wage = %config.minimum_wage,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!(address = %args.bind, "Severance engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
