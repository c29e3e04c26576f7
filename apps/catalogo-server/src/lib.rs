//! Catalogo server: configuration, logging and HTTP wiring around the
//! `productos` module

pub mod app;
pub mod config;
pub mod logging;
