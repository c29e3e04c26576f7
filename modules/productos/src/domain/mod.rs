//! Domain layer - catalog queries and management rules

pub mod repository;
pub mod seed;
pub mod service;
pub mod validation;

pub use repository::ProductosRepository;
pub use service::Service;
