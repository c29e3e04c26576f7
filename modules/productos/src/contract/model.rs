//! Contract models for the catalog
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - the REST and page layers own their wire shapes.

use rust_decimal::Decimal;

/// A row of `productos_producto`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Producto {
    /// Primary key
    pub id: i32,
    /// Product name
    pub nombre: String,
    /// Unit price
    pub precio: Decimal,
    /// Whether the product can currently be ordered
    pub disponible: bool,
}

/// Fields needed to create or replace a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProducto {
    pub nombre: String,
    pub precio: Decimal,
    pub disponible: bool,
}

/// Product loaded with the `precio` column deferred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductoDiferido {
    pub id: i32,
    pub nombre: String,
    pub disponible: bool,
}

/// Product with a price-including-tax column computed by the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductoAnotado {
    pub id: i32,
    pub nombre: String,
    pub precio: Decimal,
    pub disponible: bool,
    /// `precio * tax_factor`, rounded to cents
    pub precio_con_iva: Decimal,
}

/// Summary shown by the product list page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumenProductos {
    /// Every product, id order
    pub productos: Vec<Producto>,
    pub total_productos: u64,
    pub productos_disponibles: u64,
    /// Always `total_productos - productos_disponibles`
    pub productos_no_disponibles: u64,
    /// Products above the expensive threshold
    pub productos_caros: Vec<Producto>,
    /// Names starting with `a`, or with `A` when there are none
    pub productos_start_a: Vec<Producto>,
}

/// Results of the query showcase page, one field per technique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultasProductos {
    pub todos_los_productos: Vec<Producto>,
    pub productos_precio_gt_50: Vec<Producto>,
    pub productos_nombre_a: Vec<Producto>,
    pub productos_disponibles_orm: Vec<Producto>,
    /// Literal SQL, `valor_limite_sql` inlined in the statement text
    pub productos_raw_lt_100: Vec<Producto>,
    pub valor_limite_sql: Decimal,
    pub productos_defer: Vec<ProductoDiferido>,
    pub productos_anotados: Vec<ProductoAnotado>,
    /// Literal SQL with `valor_limite_raw` bound as a parameter
    pub productos_raw_params: Vec<Producto>,
    pub valor_limite_raw: Decimal,
    /// `(nombre, precio)` read by column position
    pub cursor_data: Vec<(String, Decimal)>,
}
