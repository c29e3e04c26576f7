//! Demo catalog used by the `seed` command

use crate::contract::NewProducto;
use rust_decimal::Decimal;

/// A small catalog that gives every page something to show
pub fn demo_catalog() -> Vec<NewProducto> {
    [
        ("arroz", Decimal::new(250, 2), true),
        ("aceite de oliva", Decimal::new(1295, 2), true),
        ("Azúcar moreno", Decimal::new(320, 2), false),
        ("Auriculares", Decimal::new(5990, 2), true),
        ("cafetera", Decimal::new(8900, 2), true),
        ("lámpara de pie", Decimal::new(12450, 2), false),
        ("Mochila", Decimal::new(3500, 2), true),
    ]
    .into_iter()
    .map(|(nombre, precio, disponible)| NewProducto {
        nombre: nombre.to_string(),
        precio,
        disponible,
    })
    .collect()
}
