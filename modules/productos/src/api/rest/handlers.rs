//! HTTP request handlers - thin layer that delegates to domain service

use crate::domain::Service;
use super::{dto::*, error::{map_domain_error, Problem}};
use axum::{
    extract::Path,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;

/// List every product
#[utoipa::path(
    get,
    path = "/api/productos",
    tag = "productos",
    responses(
        (status = 200, description = "All products, id order", body = ProductosListResponse),
        (status = 500, description = "Storage failure", body = Problem),
    )
)]
pub async fn list_productos(service: Arc<Service>) -> Result<Json<ProductosListResponse>, Problem> {
    let productos = service.list_productos().await.map_err(map_domain_error)?;

    let items: Vec<ProductoDto> = productos.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(ProductosListResponse { items, total }))
}

/// Get a specific product
#[utoipa::path(
    get,
    path = "/api/productos/{id}",
    tag = "productos",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 200, body = ProductoDto),
        (status = 404, body = Problem),
    )
)]
pub async fn get_producto(
    service: Arc<Service>,
    Path(id): Path<i32>,
) -> Result<Json<ProductoDto>, Problem> {
    let producto = service.get_producto(id).await.map_err(map_domain_error)?;

    Ok(Json(producto.into()))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "/api/productos",
    tag = "productos",
    request_body = UpsertProductoRequest,
    responses(
        (status = 201, body = ProductoDto),
        (status = 400, body = Problem),
    )
)]
pub async fn create_producto(
    service: Arc<Service>,
    Json(req): Json<UpsertProductoRequest>,
) -> Result<(StatusCode, HeaderMap, Json<ProductoDto>), Problem> {
    let producto = service
        .create_producto(req.into())
        .await
        .map_err(map_domain_error)?;

    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/productos/{}", producto.id)) {
        headers.insert(header::LOCATION, location);
    }

    Ok((StatusCode::CREATED, headers, Json(producto.into())))
}

/// Replace the fields of an existing product
#[utoipa::path(
    put,
    path = "/api/productos/{id}",
    tag = "productos",
    params(("id" = i32, Path, description = "Product identifier")),
    request_body = UpsertProductoRequest,
    responses(
        (status = 200, body = ProductoDto),
        (status = 400, body = Problem),
        (status = 404, body = Problem),
    )
)]
pub async fn update_producto(
    service: Arc<Service>,
    Path(id): Path<i32>,
    Json(req): Json<UpsertProductoRequest>,
) -> Result<Json<ProductoDto>, Problem> {
    let producto = service
        .update_producto(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(Json(producto.into()))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/productos/{id}",
    tag = "productos",
    params(("id" = i32, Path, description = "Product identifier")),
    responses(
        (status = 204),
        (status = 404, body = Problem),
    )
)]
pub async fn delete_producto(
    service: Arc<Service>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service.delete_producto(id).await.map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
