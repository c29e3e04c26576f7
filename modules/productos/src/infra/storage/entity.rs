//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;
use sea_orm::FromQueryResult;

/// `productos_producto` table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "productos_producto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub nombre: String,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub precio: Decimal,

    pub disponible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Row shape of the query that defers `precio`
#[derive(Clone, Debug, FromQueryResult)]
pub struct DeferredRow {
    pub id: i32,
    pub nombre: String,
    pub disponible: bool,
}

/// Row shape of the query that annotates `precio_con_iva`
#[derive(Clone, Debug, FromQueryResult)]
pub struct AnnotatedRow {
    pub id: i32,
    pub nombre: String,
    pub precio: Decimal,
    pub disponible: bool,
    pub precio_con_iva: Decimal,
}
