//! SeaORM repository implementation

use crate::contract::{NewProducto, Producto, ProductoAnotado, ProductoDiferido};
use crate::domain::repository::ProductosRepository;
use crate::domain::validation::to_precio_scale;
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::{
    prelude::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbBackend, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Statement,
};
use std::sync::Arc;

use super::entity;

/// Columns selected by the raw queries, in entity order
const PRODUCTO_COLUMNS: &str = "id, nombre, precio, disponible";

const TABLE: &str = "productos_producto";

pub struct SeaOrmProductosRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProductosRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn backend(&self) -> DbBackend {
        self.db.get_database_backend()
    }
}

/// Positional placeholder syntax of the backend
fn placeholder(backend: DbBackend, index: usize) -> String {
    match backend {
        DbBackend::Postgres => format!("${}", index),
        _ => "?".to_string(),
    }
}

fn into_productos(models: Vec<entity::Model>) -> Vec<Producto> {
    models.into_iter().map(Producto::from).collect()
}

#[async_trait]
impl ProductosRepository for SeaOrmProductosRepository {
    async fn list_all(&self) -> Result<Vec<Producto>> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(into_productos(results))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Producto>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(Producto::from))
    }

    async fn insert(&self, producto: &NewProducto) -> Result<Producto> {
        let active: entity::ActiveModel = producto.into();
        let result = active.insert(&*self.db).await?;

        Ok(result.into())
    }

    async fn update(&self, id: i32, producto: &NewProducto) -> Result<Option<Producto>> {
        use sea_orm::ActiveValue::Set;

        let mut active: entity::ActiveModel = producto.into();
        active.id = Set(id);

        // A single UPDATE; a row deleted concurrently surfaces here, not as a stale read.
        match active.update(&*self.db).await {
            Ok(result) => Ok(Some(result.into())),
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&*self.db).await?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64> {
        let count = entity::Entity::find().count(&*self.db).await?;

        Ok(count)
    }

    async fn count_by_disponible(&self, disponible: bool) -> Result<u64> {
        let count = entity::Entity::find()
            .filter(entity::Column::Disponible.eq(disponible))
            .count(&*self.db)
            .await?;

        Ok(count)
    }

    async fn find_precio_gt(&self, limit: Decimal) -> Result<Vec<Producto>> {
        let results = entity::Entity::find()
            .filter(entity::Column::Precio.gt(limit))
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(into_productos(results))
    }

    async fn find_nombre_starts_with(&self, prefix: &str) -> Result<Vec<Producto>> {
        let results = entity::Entity::find()
            .filter(entity::Column::Nombre.starts_with(prefix))
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(into_productos(results))
    }

    async fn find_by_disponible(&self, disponible: bool) -> Result<Vec<Producto>> {
        let results = entity::Entity::find()
            .filter(entity::Column::Disponible.eq(disponible))
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(into_productos(results))
    }

    async fn raw_precio_lt(&self, limit: Decimal) -> Result<Vec<Producto>> {
        // Decimal's Display is a plain numeric literal, safe to inline.
        let sql = format!(
            "SELECT {} FROM {} WHERE precio < {} ORDER BY id",
            PRODUCTO_COLUMNS, TABLE, limit
        );
        let results = entity::Entity::find()
            .from_raw_sql(Statement::from_string(self.backend(), sql))
            .all(&*self.db)
            .await?;

        Ok(into_productos(results))
    }

    async fn raw_precio_lt_param(&self, limit: Decimal) -> Result<Vec<Producto>> {
        let backend = self.backend();
        let sql = format!(
            "SELECT {} FROM {} WHERE precio < {} ORDER BY id",
            PRODUCTO_COLUMNS,
            TABLE,
            placeholder(backend, 1)
        );
        let results = entity::Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(backend, sql, [limit.into()]))
            .all(&*self.db)
            .await?;

        Ok(into_productos(results))
    }

    async fn list_deferred(&self) -> Result<Vec<ProductoDiferido>> {
        let results = entity::Entity::find()
            .select_only()
            .column(entity::Column::Id)
            .column(entity::Column::Nombre)
            .column(entity::Column::Disponible)
            .order_by_asc(entity::Column::Id)
            .into_model::<entity::DeferredRow>()
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(ProductoDiferido::from).collect())
    }

    async fn list_annotated(&self, factor: Decimal) -> Result<Vec<ProductoAnotado>> {
        let results = entity::Entity::find()
            .column_as(Expr::col(entity::Column::Precio).mul(factor), "precio_con_iva")
            .order_by_asc(entity::Column::Id)
            .into_model::<entity::AnnotatedRow>()
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(ProductoAnotado::from).collect())
    }

    async fn fetch_nombre_precio(&self) -> Result<Vec<(String, Decimal)>> {
        let sql = format!("SELECT nombre, precio FROM {} ORDER BY id", TABLE);
        let rows = self
            .db
            .query_all(Statement::from_string(self.backend(), sql))
            .await?;

        let mut data = Vec::with_capacity(rows.len());
        for row in rows {
            let nombre: String = row.try_get_by_index(0)?;
            let precio: Decimal = row.try_get_by_index(1)?;
            data.push((nombre, to_precio_scale(precio)));
        }

        Ok(data)
    }
}
