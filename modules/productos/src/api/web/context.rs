//! Template contexts
//!
//! Key names are the variables the templates read.

use crate::api::rest::dto::ProductoDto;
use crate::contract::{ConsultasProductos, ProductoAnotado, ProductoDiferido, ResumenProductos};
use rust_decimal::Decimal;
use serde::Serialize;

/// Context of the product list page
#[derive(Debug, Serialize)]
pub struct ResumenContext {
    pub productos: Vec<ProductoDto>,
    pub total_productos: u64,
    pub productos_disponibles: u64,
    pub productos_no_disponibles: u64,
    pub productos_caros: Vec<ProductoDto>,
    pub productos_start_a: Vec<ProductoDto>,
}

/// Product without price
#[derive(Debug, Serialize)]
pub struct ProductoDiferidoView {
    pub id: i32,
    pub nombre: String,
    pub disponible: bool,
}

/// Product with its computed price including tax
#[derive(Debug, Serialize)]
pub struct ProductoAnotadoView {
    pub id: i32,
    pub nombre: String,
    pub precio: Decimal,
    pub disponible: bool,
    pub precio_con_iva: Decimal,
}

/// Context of the query showcase page
#[derive(Debug, Serialize)]
pub struct ConsultasContext {
    pub todos_los_productos: Vec<ProductoDto>,
    pub productos_precio_gt_50: Vec<ProductoDto>,
    #[serde(rename = "productos_nombre_A")]
    pub productos_nombre_a: Vec<ProductoDto>,
    pub productos_disponibles_orm: Vec<ProductoDto>,
    pub productos_raw_lt_100: Vec<ProductoDto>,
    pub valor_limite_sql: Decimal,
    pub productos_defer: Vec<ProductoDiferidoView>,
    pub productos_anotados: Vec<ProductoAnotadoView>,
    pub productos_raw_params: Vec<ProductoDto>,
    pub valor_limite_raw: Decimal,
    pub cursor_data: Vec<(String, Decimal)>,
}

fn dtos(productos: Vec<crate::contract::Producto>) -> Vec<ProductoDto> {
    productos.into_iter().map(Into::into).collect()
}

impl From<ResumenProductos> for ResumenContext {
    fn from(resumen: ResumenProductos) -> Self {
        Self {
            productos: dtos(resumen.productos),
            total_productos: resumen.total_productos,
            productos_disponibles: resumen.productos_disponibles,
            productos_no_disponibles: resumen.productos_no_disponibles,
            productos_caros: dtos(resumen.productos_caros),
            productos_start_a: dtos(resumen.productos_start_a),
        }
    }
}

impl From<ProductoDiferido> for ProductoDiferidoView {
    fn from(p: ProductoDiferido) -> Self {
        Self {
            id: p.id,
            nombre: p.nombre,
            disponible: p.disponible,
        }
    }
}

impl From<ProductoAnotado> for ProductoAnotadoView {
    fn from(p: ProductoAnotado) -> Self {
        Self {
            id: p.id,
            nombre: p.nombre,
            precio: p.precio,
            disponible: p.disponible,
            precio_con_iva: p.precio_con_iva,
        }
    }
}

impl From<ConsultasProductos> for ConsultasContext {
    fn from(c: ConsultasProductos) -> Self {
        Self {
            todos_los_productos: dtos(c.todos_los_productos),
            productos_precio_gt_50: dtos(c.productos_precio_gt_50),
            productos_nombre_a: dtos(c.productos_nombre_a),
            productos_disponibles_orm: dtos(c.productos_disponibles_orm),
            productos_raw_lt_100: dtos(c.productos_raw_lt_100),
            valor_limite_sql: c.valor_limite_sql,
            productos_defer: c.productos_defer.into_iter().map(Into::into).collect(),
            productos_anotados: c.productos_anotados.into_iter().map(Into::into).collect(),
            productos_raw_params: dtos(c.productos_raw_params),
            valor_limite_raw: c.valor_limite_raw,
            cursor_data: c.cursor_data,
        }
    }
}
