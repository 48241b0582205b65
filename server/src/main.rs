//! Server entrypoint for vox-widget
//!
//! This is the main binary that wires together all layers: settings are
//! loaded and overridden by flags, the file-backed stores are constructed,
//! and the router is served.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vox_application::ListLimits;
use vox_infrastructure::{CsvSubmissionStore, SettingsLoader, TieredConfigStore};
use vox_presentation::{AppState, router};

/// CLI arguments for vox-widget
#[derive(Parser, Debug)]
#[command(name = "vox-widget")]
#[command(
    author,
    version,
    about = "Speaking-practice widget service - editable JSON config and CSV submission telemetry"
)]
struct Cli {
    /// Path to a settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip loading settings files and environment (defaults + flags only)
    #[arg(long)]
    no_config: bool,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the writable config/log directory
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Override the repository-default config directory
    #[arg(long, value_name = "DIR")]
    src_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut settings = if cli.no_config {
        SettingsLoader::load_defaults()
    } else {
        SettingsLoader::load(cli.config.as_ref()).map_err(|e| *e)?
    };

    // PaaS-style PORT variable wins over settings files; flags win over both.
    if let Ok(port) = std::env::var("PORT")
        && let Ok(port) = port.parse()
    {
        settings.server.port = port;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }
    if let Some(dir) = cli.data_dir {
        settings.storage.data_dir = dir;
    }
    if let Some(dir) = cli.src_dir {
        settings.storage.src_dir = dir;
    }

    info!(
        data_dir = %settings.storage.data_dir.display(),
        src_dir = %settings.storage.src_dir.display(),
        admin_gated = settings.admin.write_key.is_some(),
        "starting vox-widget"
    );

    // === Dependency Injection ===
    let config_store = Arc::new(TieredConfigStore::new(
        &settings.storage.data_dir,
        &settings.storage.src_dir,
    ));
    let submission_store = Arc::new(CsvSubmissionStore::new(&settings.storage.data_dir));
    let state = AppState::new(
        config_store,
        submission_store,
        ListLimits::default(),
        settings.admin.write_key.clone(),
    );

    let addr: SocketAddr = settings.bind_addr().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("vox-widget listening on http://{addr}");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
