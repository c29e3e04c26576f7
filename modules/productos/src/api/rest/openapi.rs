//! OpenAPI document for the management API

use super::{dto::*, error::Problem, handlers};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Catalogo API", description = "Product catalog management"),
    paths(
        handlers::list_productos,
        handlers::get_producto,
        handlers::create_producto,
        handlers::update_producto,
        handlers::delete_producto,
    ),
    components(schemas(ProductoDto, UpsertProductoRequest, ProductosListResponse, Problem)),
    tags((name = "productos", description = "Catalog rows"))
)]
pub struct ApiDoc;
