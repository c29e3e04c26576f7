//! Conversions between REST DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::Producto> for ProductoDto {
    fn from(producto: contract::Producto) -> Self {
        Self {
            id: producto.id,
            nombre: producto.nombre,
            precio: producto.precio,
            disponible: producto.disponible,
        }
    }
}

impl From<UpsertProductoRequest> for contract::NewProducto {
    fn from(req: UpsertProductoRequest) -> Self {
        Self {
            nombre: req.nombre,
            precio: req.precio,
            disponible: req.disponible,
        }
    }
}
