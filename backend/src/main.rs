//! Backend entry-point: loads settings, prepares storage, and serves the API.

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use social_backend::inbound::http::health::HealthState;
use social_backend::outbound::persistence::{DbPool, run_pending_migrations};
#[cfg(feature = "metrics")]
use social_backend::server::build_metrics;
use social_backend::server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|e| eyre!("failed to load settings: {e}"))?;
    let bind_addr = settings
        .bind_addr()
        .wrap_err("SOCIAL_BIND_ADDR is not a socket address")?;
    let mut config = ServerConfig::new(bind_addr);

    match settings.pool_config() {
        Some(pool_config) => {
            let url = pool_config.database_url().to_owned();
            let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
                .await
                .wrap_err("migration task panicked")?
                .wrap_err("failed to apply migrations")?;
            info!(applied, "database migrations applied");
            let pool = DbPool::new(pool_config)
                .await
                .wrap_err("failed to build database pool")?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; state is held in memory"),
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(build_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await?;
    Ok(())
}
