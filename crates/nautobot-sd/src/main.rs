//! nautobot-sd daemon
//!
//! Builds Prometheus scrape targets from Nautobot once at startup and serves
//! them to Prometheus HTTP service discovery.

use std::path::Path;

use color_eyre::Result;
use eyre::WrapErr;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use nautobot_sd::{AppState, Config, LogFormat, server};
use nautobot_sd_client::GraphqlClient;
use nautobot_sd_core::{ENV_FILE, NautobotCredentials, build_snapshot, load_queries};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (config, config_path) = Config::load_default()?;
    init_tracing(&config);

    match &config_path {
        Some(path) => info!(path = %path.display(), "loaded config file"),
        None => warn!("no config file found, using defaults"),
    }

    let credentials = NautobotCredentials::from_env_file(Path::new(ENV_FILE))?;
    let documents = load_queries(&config.queries.dir, &config.queries.suffix)?;

    let client = GraphqlClient::new(&credentials.url, credentials.token)
        .wrap_err("invalid NAUTOBOT_URL")?;
    let snapshot = build_snapshot(&client, &documents, config.queries.job_label).await?;

    let listener = TcpListener::bind(&config.daemon.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.daemon.bind))?;
    let addr = listener.local_addr()?;
    info!(
        %addr,
        targets = snapshot.target_count(),
        built_at = %snapshot.built_at(),
        "serving targets"
    );

    server::serve(listener, AppState::new(snapshot)).await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.daemon.log_level));

    match config.daemon.log_format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}
