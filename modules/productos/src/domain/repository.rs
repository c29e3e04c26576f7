//! Repository trait for catalog data access
//!
//! Each method maps to one query technique; implementations are in
//! infra/storage/repositories.rs

use crate::contract::{NewProducto, Producto, ProductoAnotado, ProductoDiferido};
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Repository for the `productos_producto` table
#[async_trait]
pub trait ProductosRepository: Send + Sync {
    /// All products, id order
    async fn list_all(&self) -> Result<Vec<Producto>>;

    /// Find a product by primary key
    async fn find_by_id(&self, id: i32) -> Result<Option<Producto>>;

    /// Insert a product and return it with its new id
    async fn insert(&self, producto: &NewProducto) -> Result<Producto>;

    /// Replace a product's fields, `None` if the id does not exist
    async fn update(&self, id: i32, producto: &NewProducto) -> Result<Option<Producto>>;

    /// Delete a product, `false` if the id does not exist
    async fn delete(&self, id: i32) -> Result<bool>;

    /// Count all products
    async fn count(&self) -> Result<u64>;

    /// Count products with the given availability
    async fn count_by_disponible(&self, disponible: bool) -> Result<u64>;

    /// ORM filter `precio > limit`
    async fn find_precio_gt(&self, limit: Decimal) -> Result<Vec<Producto>>;

    /// ORM filter `nombre LIKE 'prefix%'`
    async fn find_nombre_starts_with(&self, prefix: &str) -> Result<Vec<Producto>>;

    /// ORM filter on availability
    async fn find_by_disponible(&self, disponible: bool) -> Result<Vec<Producto>>;

    /// Literal SQL `precio < limit` with the limit written into the statement
    async fn raw_precio_lt(&self, limit: Decimal) -> Result<Vec<Producto>>;

    /// Literal SQL `precio < ?` with the limit bound as a parameter
    async fn raw_precio_lt_param(&self, limit: Decimal) -> Result<Vec<Producto>>;

    /// All products without loading `precio`
    async fn list_deferred(&self) -> Result<Vec<ProductoDiferido>>;

    /// All products plus `precio * factor` computed in SQL
    async fn list_annotated(&self, factor: Decimal) -> Result<Vec<ProductoAnotado>>;

    /// `(nombre, precio)` rows read positionally from a raw statement
    async fn fetch_nombre_precio(&self) -> Result<Vec<(String, Decimal)>>;
}
