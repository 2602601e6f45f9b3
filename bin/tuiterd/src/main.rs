//! `tuiterd` — the tuiter server binary.
//!
//! Usage:
//!   tuiterd --data-dir <dir> [--listen <addr>] [--jwt-secret <secret>]
//!
//! The JWT secret can also come from the TUITER_JWT_SECRET environment
//! variable.

mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use social::SocialModule;
use social::service::SocialConfig;
use tuiter_core::{Module, ServiceConfig};

/// Tuiter server.
#[derive(Parser, Debug)]
#[command(name = "tuiterd", about = "Tuiter server")]
struct Cli {
    /// Directory holding all persistent data.
    #[arg(long = "data-dir", required = true)]
    data_dir: PathBuf,

    /// Path to the redb database file (defaults to {data-dir}/data.redb).
    #[arg(long = "db")]
    db_path: Option<PathBuf>,

    /// Listen address.
    #[arg(long = "listen", default_value = "0.0.0.0:4000")]
    listen: String,

    /// JWT signing secret.
    #[arg(long = "jwt-secret", env = "TUITER_JWT_SECRET")]
    jwt_secret: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = ServiceConfig {
        data_dir: Some(cli.data_dir.clone()),
        db_path: cli.db_path.clone(),
        listen: cli.listen.clone(),
    };

    // Initialize storage.
    std::fs::create_dir_all(&cli.data_dir)?;
    let kv: Arc<dyn tuiter_kv::KVStore> = Arc::new(
        tuiter_kv::RedbStore::open(&config.resolve_db_path())
            .map_err(|e| anyhow::anyhow!("failed to open KV store: {}", e))?,
    );

    let mut social_config = SocialConfig::default();
    if let Some(secret) = cli.jwt_secret {
        social_config.jwt_secret = secret;
    }

    let social_module = SocialModule::new(kv, social_config);
    info!("Social module initialized");

    // Build router.
    let app = routes::build_router(vec![
        (social_module.name().to_string(), social_module.routes()),
    ]);

    // Start server.
    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("Tuiter server listening on {}", config.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
