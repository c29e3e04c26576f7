//! REST DTOs with serde derives for HTTP API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product response DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductoDto {
    /// Product identifier
    pub id: i32,

    /// Product name
    #[schema(example = "Arroz integral")]
    pub nombre: String,

    /// Unit price, serialized as a decimal string
    #[schema(example = "19.99")]
    pub precio: Decimal,

    /// Availability flag
    pub disponible: bool,
}

/// Create or replace request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertProductoRequest {
    #[schema(example = "Arroz integral")]
    pub nombre: String,

    /// Accepts a JSON number or a decimal string
    #[schema(example = "19.99")]
    pub precio: Decimal,

    /// Defaults to `true`
    #[serde(default = "default_disponible")]
    pub disponible: bool,
}

fn default_disponible() -> bool {
    true
}

/// Product list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductosListResponse {
    pub items: Vec<ProductoDto>,
    pub total: usize,
}
