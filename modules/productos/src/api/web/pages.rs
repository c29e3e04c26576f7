//! Page handlers and route registration

use super::{
    context::{ConsultasContext, ResumenContext},
    error::PageError,
    templates::{self, Templates},
};
use crate::domain::Service;
use axum::{response::Html, routing::get, Extension, Router};
use minijinja::context;
use std::sync::Arc;

/// Register the HTML page routes on `router`
pub fn register_pages(
    router: Router,
    service: Arc<Service>,
    templates: Arc<Templates>,
) -> anyhow::Result<Router> {
    let pages = Router::new()
        .route("/", get(index))
        .route("/productos/index/", get(index))
        .route("/productos/productos/", get(productos_view))
        .route("/productos/lista/", get(lista_productos))
        .route("/productos/consultas/", get(consultas))
        .layer(Extension(service))
        .layer(Extension(templates));

    Ok(router.merge(pages))
}

/// Landing page
pub async fn index(
    Extension(templates): Extension<Arc<Templates>>,
) -> Result<Html<String>, PageError> {
    Ok(Html(templates.render(templates::INDEX, context! {})?))
}

/// Products page without data
pub async fn productos_view(
    Extension(templates): Extension<Arc<Templates>>,
) -> Result<Html<String>, PageError> {
    Ok(Html(templates.render(templates::PRODUCTOS, context! {})?))
}

/// Products page with counts and filtered lists
pub async fn lista_productos(
    Extension(service): Extension<Arc<Service>>,
    Extension(templates): Extension<Arc<Templates>>,
) -> Result<Html<String>, PageError> {
    let ctx: ResumenContext = service.resumen().await?.into();
    Ok(Html(templates.render(templates::PRODUCTOS, ctx)?))
}

/// Products page showing one result per query technique
pub async fn consultas(
    Extension(service): Extension<Arc<Service>>,
    Extension(templates): Extension<Arc<Templates>>,
) -> Result<Html<String>, PageError> {
    let ctx: ConsultasContext = service.consultas().await?.into();
    Ok(Html(templates.render(templates::PRODUCTOS, ctx)?))
}
