//! Domain service - runs the catalog queries and guards writes

use crate::config::Config;
use crate::contract::{CatalogError, ConsultasProductos, NewProducto, Producto, ResumenProductos};
use super::repository::ProductosRepository;
use super::seed::demo_catalog;
use super::validation::validate_producto;
use std::sync::Arc;

/// Domain service for the product catalog
pub struct Service {
    repo: Arc<dyn ProductosRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn ProductosRepository>, config: Config) -> Self {
        Self { repo, config }
    }

    // ===== Page queries =====

    /// Counts and filtered lists for the product list page
    pub async fn resumen(&self) -> Result<ResumenProductos, CatalogError> {
        let productos = self.repo.list_all().await.map_err(internal)?;
        let total_productos = self.repo.count().await.map_err(internal)?;
        let productos_disponibles = self
            .repo
            .count_by_disponible(true)
            .await
            .map_err(internal)?;
        let productos_no_disponibles = total_productos.saturating_sub(productos_disponibles);

        let productos_caros = self
            .repo
            .find_precio_gt(self.config.expensive_threshold)
            .await
            .map_err(internal)?;

        // Upper-case names are only consulted when no lower-case match exists.
        let lower = self
            .repo
            .find_nombre_starts_with("a")
            .await
            .map_err(internal)?;
        let productos_start_a = if lower.is_empty() {
            self.repo
                .find_nombre_starts_with("A")
                .await
                .map_err(internal)?
        } else {
            lower
        };

        Ok(ResumenProductos {
            productos,
            total_productos,
            productos_disponibles,
            productos_no_disponibles,
            productos_caros,
            productos_start_a,
        })
    }

    /// Run every query technique of the showcase page
    pub async fn consultas(&self) -> Result<ConsultasProductos, CatalogError> {
        let valor_limite_sql = self.config.raw_limit;
        let valor_limite_raw = self.config.raw_param_limit;

        Ok(ConsultasProductos {
            todos_los_productos: self.repo.list_all().await.map_err(internal)?,
            productos_precio_gt_50: self
                .repo
                .find_precio_gt(self.config.expensive_threshold)
                .await
                .map_err(internal)?,
            productos_nombre_a: self
                .repo
                .find_nombre_starts_with("A")
                .await
                .map_err(internal)?,
            productos_disponibles_orm: self
                .repo
                .find_by_disponible(true)
                .await
                .map_err(internal)?,
            productos_raw_lt_100: self
                .repo
                .raw_precio_lt(valor_limite_sql)
                .await
                .map_err(internal)?,
            valor_limite_sql,
            productos_defer: self.repo.list_deferred().await.map_err(internal)?,
            productos_anotados: self
                .repo
                .list_annotated(self.config.tax_factor)
                .await
                .map_err(internal)?,
            productos_raw_params: self
                .repo
                .raw_precio_lt_param(valor_limite_raw)
                .await
                .map_err(internal)?,
            valor_limite_raw,
            cursor_data: self.repo.fetch_nombre_precio().await.map_err(internal)?,
        })
    }

    // ===== Management =====

    /// List every product
    pub async fn list_productos(&self) -> Result<Vec<Producto>, CatalogError> {
        self.repo.list_all().await.map_err(internal)
    }

    /// Get one product
    pub async fn get_producto(&self, id: i32) -> Result<Producto, CatalogError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(CatalogError::NotFound { id })
    }

    /// Validate and insert a product
    pub async fn create_producto(&self, producto: NewProducto) -> Result<Producto, CatalogError> {
        let producto = validate_producto(producto)?;
        let created = self.repo.insert(&producto).await.map_err(internal)?;
        tracing::info!(id = created.id, nombre = %created.nombre, "producto created");
        Ok(created)
    }

    /// Validate and replace the fields of a product
    pub async fn update_producto(
        &self,
        id: i32,
        producto: NewProducto,
    ) -> Result<Producto, CatalogError> {
        let producto = validate_producto(producto)?;
        let updated = self
            .repo
            .update(id, &producto)
            .await
            .map_err(internal)?
            .ok_or(CatalogError::NotFound { id })?;
        tracing::info!(id, "producto updated");
        Ok(updated)
    }

    /// Delete a product
    pub async fn delete_producto(&self, id: i32) -> Result<(), CatalogError> {
        let deleted = self.repo.delete(id).await.map_err(internal)?;
        if !deleted {
            return Err(CatalogError::NotFound { id });
        }
        tracing::info!(id, "producto deleted");
        Ok(())
    }

    /// Insert the demo catalog if there are no products yet
    ///
    /// Returns how many products were inserted.
    pub async fn seed_demo_catalog(&self) -> Result<usize, CatalogError> {
        if self.repo.count().await.map_err(internal)? > 0 {
            tracing::info!("catalog not empty, skipping seed");
            return Ok(0);
        }

        let catalog = demo_catalog();
        let total = catalog.len();
        for producto in catalog {
            self.create_producto(producto).await?;
        }
        Ok(total)
    }
}

/// Storage failures are logged here and surface as `Internal`
fn internal(err: anyhow::Error) -> CatalogError {
    tracing::error!("catalog storage error: {:#}", err);
    CatalogError::Internal
}
