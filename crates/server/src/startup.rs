use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServicesConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect the pool and bring the schema up to date. With
/// `reset_on_start` every table is dropped and recreated first.
pub async fn prepare_database(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(cfg)).await?;
    if cfg.reset_on_start {
        warn!("database.reset_on_start is set, dropping all tables");
        migration::Migrator::fresh(&db).await.map_err(StartupError::Migration)?;
    } else {
        migration::Migrator::up(&db, None).await.map_err(StartupError::Migration)?;
    }
    info!("schema ready");
    Ok(db)
}

/// Router over an already migrated database.
pub fn build_app(db: DatabaseConnection, services: &ServicesConfig) -> Router {
    routes::build_router(ServerState::new(db), build_cors(), services)
}

fn bind_addr(cfg: &configs::ServerConfig) -> Result<SocketAddr, StartupError> {
    let raw = format!("{}:{}", cfg.host, cfg.port);
    raw.parse().map_err(|e| StartupError::InvalidConfig(format!("bind address {raw}: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Public entry: migrate, build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = prepare_database(&cfg.database).await?;
    let app = build_app(db, &cfg.services);

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    info!(%addr, services = ?cfg.services, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_rejects_garbage_host() {
        let cfg = configs::ServerConfig { host: "not a host".into(), port: 8080, worker_threads: None };
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
        let cfg = configs::ServerConfig { host: "127.0.0.1".into(), port: 8080, worker_threads: None };
        assert_eq!(bind_addr(&cfg).unwrap().port(), 8080);
    }
}
