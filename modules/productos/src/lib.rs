//! Productos Module
//!
//! Product catalog for the Catalogo server: HTML pages listing products,
//! a page showcasing different ways of querying the `productos_producto`
//! table, and a small JSON API to manage the rows.

// Public exports
pub mod contract;
pub use contract::{
    client::ProductosApi, error::CatalogError, ConsultasProductos, NewProducto, Producto,
    ProductoAnotado, ProductoDiferido, ResumenProductos,
};

pub mod module;
pub use module::ProductosModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
