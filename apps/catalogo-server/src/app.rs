//! Server wiring shared by the `serve`, `migrate` and `seed` commands

use crate::config::{AppConfig, DatabaseConfig};
use anyhow::{Context, Result};
use axum::{routing::get, Router};
use productos::ProductosModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub async fn connect(cfg: &DatabaseConfig) -> Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .with_context(|| format!("failed to connect to database '{}'", cfg.url))?;
    tracing::info!(url = %cfg.url, "Database connected");
    Ok(Arc::new(db))
}

/// Apply migrations when enabled and hand the connection to the module
pub async fn prepare(
    cfg: &AppConfig,
    db: Arc<DatabaseConnection>,
    module: &ProductosModule,
) -> Result<()> {
    if cfg.database.run_migrations {
        module.migrate(&db).await?;
    }
    module.init(db)
}

/// `/health`, the module's pages and API, and request tracing
///
/// The module must be initialized first.
pub fn build_router(module: &ProductosModule) -> Result<Router> {
    let router = Router::new().route("/health", get(health));
    let router = module
        .register_rest(router)?
        .layer(TraceLayer::new_for_http());
    Ok(router)
}

pub async fn migrate(db: &DatabaseConnection, module: &ProductosModule) -> Result<()> {
    module.migrate(db).await
}

/// Fill an empty catalog with demo rows, returning how many were inserted
pub async fn seed(
    cfg: &AppConfig,
    db: Arc<DatabaseConnection>,
    module: &ProductosModule,
) -> Result<usize> {
    prepare(cfg, db, module).await?;
    module.seed().await
}

pub async fn serve(
    cfg: &AppConfig,
    db: Arc<DatabaseConnection>,
    module: &ProductosModule,
) -> Result<()> {
    prepare(cfg, db, module).await?;
    let router = build_router(module)?;

    let addr = format!("{}:{}", cfg.server.bind_addr, cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "Catalogo server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Catalogo server stopped");
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
