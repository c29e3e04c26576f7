//! Contract layer - public API for inter-module communication
//!
//! Transport-agnostic models and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::ProductosApi;
pub use error::CatalogError;
pub use model::{
    ConsultasProductos, NewProducto, Producto, ProductoAnotado, ProductoDiferido,
    ResumenProductos,
};
