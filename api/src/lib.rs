//! HTTP front end: routes, payload extraction, error mapping and startup.

mod config;
mod error;
mod handler;
mod payload;
mod router;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use payload::Payload;
pub use router::build_router;

use migration::{Migrator, MigratorTrait};
use mission_control_service::{
    sea_orm::{Database, DatabaseConnection},
    serializer::Plan,
};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
pub struct AppState {
    pub conn: DatabaseConnection,
}

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    Plan::verify_defaults()?;

    let conn = Database::connect(config.database_url.as_str()).await?;
    Migrator::up(&conn, None).await?;

    let addr = config.bind_addr()?;
    let app = build_router(AppState { conn });
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        error!("{err:#}");
    }
}
