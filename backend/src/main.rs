//! Users API entry-point: loads settings, prepares storage, and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tokio::task;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server, spawn_shutdown_watcher};
use users_api::inbound::http::health::HealthState;
use users_api::outbound::persistence::{DbPool, run_pending_migrations};
use users_api::settings::AppSettings;

/// Apply migrations on a blocking thread, then build the pool.
async fn prepare_database(settings: &AppSettings) -> std::io::Result<Option<DbPool>> {
    let Some(pool_config) = settings.pool_config() else {
        return Ok(None);
    };

    let url = pool_config.database_url().to_owned();
    let applied = task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations complete");

    let pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;
    Ok(Some(pool))
}

/// Turn loaded settings into a server configuration, preparing storage.
async fn server_config(settings: &AppSettings) -> std::io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr());
    Ok(match prepare_database(settings).await? {
        Some(pool) => config.with_db_pool(pool),
        None => config,
    })
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("invalid settings: {err}")))?;
    let bind_addr = settings.bind_addr();
    let config = server_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    spawn_shutdown_watcher(health_state, server.handle());
    info!(%bind_addr, "users API listening");
    server.await
}
