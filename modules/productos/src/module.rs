//! Module declaration and lifecycle: migrate, init, register routes

use crate::api::web::Templates;
use crate::config::Config;
use crate::contract::ProductosApi;
use crate::domain::Service;
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Productos module
pub struct ProductosModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for ProductosModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ProductosModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
        }
    }

    /// Run pending migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Productos migrations completed");
        Ok(())
    }

    /// Build the repository and domain service on top of `db`
    pub fn init(&self, db: Arc<DatabaseConnection>) -> Result<()> {
        let repo = Arc::new(crate::infra::storage::repositories::SeaOrmProductosRepository::new(db));
        let config = self.config.read().clone();

        let service = Arc::new(Service::new(repo, config));
        *self.service.write() = Some(service);

        tracing::info!("Productos module initialized");
        Ok(())
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn ProductosApi>> {
        let service = self.service()?;
        Ok(Arc::new(crate::api::native::NativeClient::new(service)))
    }

    /// Register HTML pages and the management API
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;
        let templates = Arc::new(Templates::new()?);

        tracing::info!("Registering productos routes");
        let router = crate::api::web::register_pages(router, service.clone(), templates)?;
        crate::api::rest::routes::register_routes(router, service)
    }

    /// Insert the demo catalog when the table is empty
    pub async fn seed(&self) -> Result<usize> {
        let inserted = self.service()?.seed_demo_catalog().await?;
        tracing::info!(inserted, "Productos seed completed");
        Ok(inserted)
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}
