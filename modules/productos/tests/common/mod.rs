//! Common test utilities: mock repository, in-memory database, sample rows
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use productos::contract::{NewProducto, Producto, ProductoAnotado, ProductoDiferido};
use productos::domain::repository::ProductosRepository;
use productos::infra::storage::migrations::Migrator;
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Sample rows used across the suites
pub fn sample_catalog() -> Vec<NewProducto> {
    [
        ("arroz", Decimal::new(1000, 2), true),
        ("Aceite", Decimal::new(4950, 2), true),
        ("Auriculares", Decimal::new(6025, 2), false),
        ("cafetera", Decimal::new(15075, 2), true),
        ("Mochila", Decimal::new(9950, 2), false),
    ]
    .into_iter()
    .map(|(nombre, precio, disponible)| nuevo(nombre, precio, disponible))
    .collect()
}

pub fn nuevo(nombre: &str, precio: Decimal, disponible: bool) -> NewProducto {
    NewProducto {
        nombre: nombre.to_string(),
        precio,
        disponible,
    }
}

/// Fresh migrated in-memory SQLite database
///
/// A single pooled connection keeps every query on the same memory database.
pub async fn sqlite_memory() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("migrate");
    Arc::new(db)
}

/// In-memory repository with case-sensitive prefix matching
#[derive(Clone, Default)]
pub struct MockProductosRepo {
    data: Arc<RwLock<Vec<Producto>>>,
    fail: Arc<AtomicBool>,
}

impl MockProductosRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(productos: Vec<NewProducto>) -> Self {
        let repo = Self::new();
        {
            let mut data = repo.data.write();
            for (i, p) in productos.into_iter().enumerate() {
                data.push(Producto {
                    id: i as i32 + 1,
                    nombre: p.nombre,
                    precio: p.precio,
                    disponible: p.disponible,
                });
            }
        }
        repo
    }

    /// Make every following call fail
    pub fn fail_from_now(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("storage offline");
        }
        Ok(())
    }

    fn filtered(&self, pred: impl Fn(&Producto) -> bool) -> anyhow::Result<Vec<Producto>> {
        self.check()?;
        Ok(self.data.read().iter().filter(|p| pred(p)).cloned().collect())
    }
}

#[async_trait]
impl ProductosRepository for MockProductosRepo {
    async fn list_all(&self) -> anyhow::Result<Vec<Producto>> {
        self.filtered(|_| true)
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Producto>> {
        Ok(self.filtered(|p| p.id == id)?.into_iter().next())
    }

    async fn insert(&self, producto: &NewProducto) -> anyhow::Result<Producto> {
        self.check()?;
        let mut data = self.data.write();
        let id = data.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let created = Producto {
            id,
            nombre: producto.nombre.clone(),
            precio: producto.precio,
            disponible: producto.disponible,
        };
        data.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, producto: &NewProducto) -> anyhow::Result<Option<Producto>> {
        self.check()?;
        let mut data = self.data.write();
        Ok(data.iter_mut().find(|p| p.id == id).map(|p| {
            p.nombre = producto.nombre.clone();
            p.precio = producto.precio;
            p.disponible = producto.disponible;
            p.clone()
        }))
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        self.check()?;
        let mut data = self.data.write();
        let before = data.len();
        data.retain(|p| p.id != id);
        Ok(data.len() != before)
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.filtered(|_| true)?.len() as u64)
    }

    async fn count_by_disponible(&self, disponible: bool) -> anyhow::Result<u64> {
        Ok(self.filtered(|p| p.disponible == disponible)?.len() as u64)
    }

    async fn find_precio_gt(&self, limit: Decimal) -> anyhow::Result<Vec<Producto>> {
        self.filtered(|p| p.precio > limit)
    }

    async fn find_nombre_starts_with(&self, prefix: &str) -> anyhow::Result<Vec<Producto>> {
        self.filtered(|p| p.nombre.starts_with(prefix))
    }

    async fn find_by_disponible(&self, disponible: bool) -> anyhow::Result<Vec<Producto>> {
        self.filtered(|p| p.disponible == disponible)
    }

    async fn raw_precio_lt(&self, limit: Decimal) -> anyhow::Result<Vec<Producto>> {
        self.filtered(|p| p.precio < limit)
    }

    async fn raw_precio_lt_param(&self, limit: Decimal) -> anyhow::Result<Vec<Producto>> {
        self.filtered(|p| p.precio < limit)
    }

    async fn list_deferred(&self) -> anyhow::Result<Vec<ProductoDiferido>> {
        Ok(self
            .filtered(|_| true)?
            .into_iter()
            .map(|p| ProductoDiferido {
                id: p.id,
                nombre: p.nombre,
                disponible: p.disponible,
            })
            .collect())
    }

    async fn list_annotated(&self, factor: Decimal) -> anyhow::Result<Vec<ProductoAnotado>> {
        Ok(self
            .filtered(|_| true)?
            .into_iter()
            .map(|p| ProductoAnotado {
                id: p.id,
                precio_con_iva: (p.precio * factor).round_dp(2),
                nombre: p.nombre,
                precio: p.precio,
                disponible: p.disponible,
            })
            .collect())
    }

    async fn fetch_nombre_precio(&self) -> anyhow::Result<Vec<(String, Decimal)>> {
        Ok(self
            .filtered(|_| true)?
            .into_iter()
            .map(|p| (p.nombre, p.precio))
            .collect())
    }
}
