//! Page error rendering

use crate::contract::CatalogError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("template rendering failed: {0}")]
    Render(#[from] minijinja::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("page error: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<!doctype html><title>Error</title><h1>500 Internal Server Error</h1>"),
        )
            .into_response()
    }
}
