//! Route registration for the management API

use crate::domain::Service;
use super::{dto::*, error::Problem, handlers, openapi::ApiDoc};
use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Register all REST routes on `router`
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let api = Router::new()
        .route(
            "/api/productos",
            get(list_productos_handler).post(create_producto_handler),
        )
        .route(
            "/api/productos/{id}",
            get(get_producto_handler)
                .put(update_producto_handler)
                .delete(delete_producto_handler),
        )
        .route("/api/openapi.json", get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router.merge(api))
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_productos_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<ProductosListResponse>, Problem> {
    handlers::list_productos(service).await
}

async fn get_producto_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<Json<ProductoDto>, Problem> {
    handlers::get_producto(service, path).await
}

async fn create_producto_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Json<UpsertProductoRequest>,
) -> Result<(StatusCode, HeaderMap, Json<ProductoDto>), Problem> {
    handlers::create_producto(service, json).await
}

async fn update_producto_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
    json: Json<UpsertProductoRequest>,
) -> Result<Json<ProductoDto>, Problem> {
    handlers::update_producto(service, path, json).await
}

async fn delete_producto_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Path<i32>,
) -> Result<StatusCode, Problem> {
    handlers::delete_producto(service, path).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
