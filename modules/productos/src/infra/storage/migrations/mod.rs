//! Database migrations for the productos module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_productos_producto::Migration)]
    }
}

mod m20250101_000001_create_productos_producto {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ProductosProducto::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProductosProducto::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ProductosProducto::Nombre)
                                .string_len(200)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProductosProducto::Precio)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ProductosProducto::Disponible)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_productos_producto_nombre")
                        .table(ProductosProducto::Table)
                        .col(ProductosProducto::Nombre)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ProductosProducto::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ProductosProducto {
        Table,
        Id,
        Nombre,
        Precio,
        Disponible,
    }
}
