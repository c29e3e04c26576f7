//! Server-rendered HTML pages

pub mod context;
pub mod error;
pub mod pages;
pub mod templates;

pub use pages::register_pages;
pub use templates::Templates;
