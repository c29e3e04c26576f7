//! Input validation for product writes

use crate::contract::{CatalogError, NewProducto};
use rust_decimal::{Decimal, RoundingStrategy};

/// Longest accepted product name, in characters
pub const MAX_NOMBRE_LEN: usize = 200;

/// Digits kept after the decimal point for prices
pub const PRECIO_SCALE: u32 = 2;

/// Validate and normalize a product before it is written
///
/// The name is trimmed; the price keeps its value but must fit the
/// `decimal(10,2)` column.
pub fn validate_producto(producto: NewProducto) -> Result<NewProducto, CatalogError> {
    let nombre = producto.nombre.trim();
    if nombre.is_empty() {
        return Err(CatalogError::Validation {
            message: "nombre cannot be empty".to_string(),
        });
    }
    if nombre.chars().count() > MAX_NOMBRE_LEN {
        return Err(CatalogError::Validation {
            message: format!("nombre cannot be longer than {} characters", MAX_NOMBRE_LEN),
        });
    }

    validate_precio(producto.precio)?;

    Ok(NewProducto {
        nombre: nombre.to_string(),
        precio: to_precio_scale(producto.precio),
        disponible: producto.disponible,
    })
}

/// Give a price exactly `PRECIO_SCALE` decimals, as the column declares
///
/// SQLite hands prices back as floats, so `35.00` would otherwise read as `35`.
pub fn to_precio_scale(precio: Decimal) -> Decimal {
    let mut precio = round_precio(precio);
    precio.rescale(PRECIO_SCALE);
    precio
}

/// Round to cents with halves away from zero (0.605 -> 0.61)
///
/// Float noise from SQLite arithmetic is cut at six decimals first so a
/// computed 0.60499999... still counts as a half.
fn round_precio(precio: Decimal) -> Decimal {
    precio
        .round_dp_with_strategy(6, RoundingStrategy::MidpointNearestEven)
        .round_dp_with_strategy(PRECIO_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Validate a price: non-negative, at most two decimals, fits `decimal(10,2)`
pub fn validate_precio(precio: Decimal) -> Result<(), CatalogError> {
    if precio.is_sign_negative() && !precio.is_zero() {
        return Err(CatalogError::Validation {
            message: format!("precio '{}' cannot be negative", precio),
        });
    }
    if precio.normalize().scale() > PRECIO_SCALE {
        return Err(CatalogError::Validation {
            message: format!(
                "precio '{}' cannot have more than {} decimal places",
                precio, PRECIO_SCALE
            ),
        });
    }
    if precio >= Decimal::from(100_000_000) {
        return Err(CatalogError::Validation {
            message: format!("precio '{}' is too large", precio),
        });
    }
    Ok(())
}
