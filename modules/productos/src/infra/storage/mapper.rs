//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::{NewProducto, Producto, ProductoAnotado, ProductoDiferido};
use crate::domain::validation::to_precio_scale;
use super::entity;

impl From<entity::Model> for Producto {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            nombre: entity.nombre,
            precio: to_precio_scale(entity.precio),
            disponible: entity.disponible,
        }
    }
}

impl From<&NewProducto> for entity::ActiveModel {
    fn from(model: &NewProducto) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            nombre: Set(model.nombre.clone()),
            precio: Set(model.precio),
            disponible: Set(model.disponible),
        }
    }
}

impl From<entity::DeferredRow> for ProductoDiferido {
    fn from(row: entity::DeferredRow) -> Self {
        Self {
            id: row.id,
            nombre: row.nombre,
            disponible: row.disponible,
        }
    }
}

impl From<entity::AnnotatedRow> for ProductoAnotado {
    fn from(row: entity::AnnotatedRow) -> Self {
        // SQLite computes the product in floating point.
        Self {
            id: row.id,
            nombre: row.nombre,
            precio: to_precio_scale(row.precio),
            disponible: row.disponible,
            precio_con_iva: to_precio_scale(row.precio_con_iva),
        }
    }
}
