//! Contract error types for the catalog
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! Problem Details and the page layer to an error page.

use thiserror::Error;

/// Catalog domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Product not found
    #[error("producto not found: {id}")]
    NotFound {
        /// Product identifier
        id: i32,
    },
    /// Rejected input
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },
    /// Storage or rendering failure, details are logged
    #[error("Internal error")]
    Internal,
}
