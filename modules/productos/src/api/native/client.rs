//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    CatalogError, ConsultasProductos, NewProducto, Producto, ProductosApi, ResumenProductos,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ProductosApi for NativeClient {
    async fn resumen(&self) -> Result<ResumenProductos, CatalogError> {
        self.service.resumen().await
    }

    async fn consultas(&self) -> Result<ConsultasProductos, CatalogError> {
        self.service.consultas().await
    }

    async fn list_productos(&self) -> Result<Vec<Producto>, CatalogError> {
        self.service.list_productos().await
    }

    async fn get_producto(&self, id: i32) -> Result<Producto, CatalogError> {
        self.service.get_producto(id).await
    }

    async fn create_producto(&self, producto: NewProducto) -> Result<Producto, CatalogError> {
        self.service.create_producto(producto).await
    }

    async fn update_producto(
        &self,
        id: i32,
        producto: NewProducto,
    ) -> Result<Producto, CatalogError> {
        self.service.update_producto(id, producto).await
    }

    async fn delete_producto(&self, id: i32) -> Result<(), CatalogError> {
        self.service.delete_producto(id).await
    }
}
