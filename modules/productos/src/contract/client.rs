//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to read and manage
//! the catalog without going through HTTP.

use super::{
    error::CatalogError,
    model::{ConsultasProductos, NewProducto, Producto, ResumenProductos},
};
use async_trait::async_trait;

/// Catalog API for inter-module communication
#[async_trait]
pub trait ProductosApi: Send + Sync {
    // ===== Page queries =====

    /// Counts and filtered lists for the product list page
    async fn resumen(&self) -> Result<ResumenProductos, CatalogError>;

    /// Run every query technique of the showcase page
    async fn consultas(&self) -> Result<ConsultasProductos, CatalogError>;

    // ===== Management =====

    /// List every product
    async fn list_productos(&self) -> Result<Vec<Producto>, CatalogError>;

    /// Get one product
    async fn get_producto(&self, id: i32) -> Result<Producto, CatalogError>;

    /// Create a product
    async fn create_producto(&self, producto: NewProducto) -> Result<Producto, CatalogError>;

    /// Replace the fields of a product
    async fn update_producto(
        &self,
        id: i32,
        producto: NewProducto,
    ) -> Result<Producto, CatalogError>;

    /// Delete a product
    async fn delete_producto(&self, id: i32) -> Result<(), CatalogError>;
}
