//! HTTP tests driving the full router: pages and management API

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use productos::ProductosModule;
use tower::ServiceExt;

mod common;
use common::sqlite_memory;

async fn app(seed: bool) -> Router {
    let db = sqlite_memory().await;
    let module = ProductosModule::default();
    module.init(db).unwrap();
    if seed {
        module.seed().await.unwrap();
    }
    module.register_rest(Router::new()).unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String, Option<String>) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap(), location)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body, _) = send(app, req).await;
    (status, body)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn index_routes_render_index() {
    let app = app(false).await;

    for uri in ["/", "/productos/index/"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(body.contains("<h1>Catálogo de productos</h1>"), "{}", uri);
    }
}

#[tokio::test]
async fn productos_view_renders_without_data() {
    let app = app(true).await;
    let (status, body) = get(&app, "/productos/productos/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Productos</h1>"));
    assert!(!body.contains("Total de productos"));
    assert!(!body.contains("Cursor"));
}

#[tokio::test]
async fn lista_productos_shows_counts() {
    let app = app(true).await;
    let (status, body) = get(&app, "/productos/lista/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Total de productos: 7"));
    assert!(body.contains("Disponibles: 5"));
    assert!(body.contains("No disponibles: 2"));
    assert!(body.contains("cafetera"));
}

#[tokio::test]
async fn consultas_shows_every_technique() {
    let app = app(true).await;
    let (status, body) = get(&app, "/productos/consultas/").await;

    assert_eq!(status, StatusCode::OK);
    for heading in [
        "Todos los productos",
        "SQL directo: precio menor que 100",
        "Sin cargar el precio",
        "Precio con IVA",
        "SQL con parámetros: precio menor que 75",
        "Cursor",
    ] {
        assert!(body.contains(heading), "missing {}", heading);
    }
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = app(false).await;
    let (status, _) = get(&app, "/admin/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_crud_lifecycle() {
    let app = app(false).await;

    let (status, body, location) = send(
        &app,
        json_request(
            "POST",
            "/api/productos",
            serde_json::json!({"nombre": "Té verde", "precio": "4.50"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("/api/productos/1"));
    let created: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(created["nombre"], "Té verde");
    assert_eq!(created["disponible"], true);

    let (status, body) = get(&app, "/api/productos/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Té verde"));

    let (status, body, _) = send(
        &app,
        json_request(
            "PUT",
            "/api/productos/1",
            serde_json::json!({"nombre": "Té rojo", "precio": "5", "disponible": false}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(updated["nombre"], "Té rojo");
    assert_eq!(updated["disponible"], false);

    let (status, body) = get(&app, "/api/productos").await;
    assert_eq!(status, StatusCode::OK);
    let list: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(list["total"], 1);

    let req = Request::builder()
        .method("DELETE")
        .uri("/api/productos/1")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, "/api/productos/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let problem: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(problem["status"], 404);
    assert_eq!(problem["instance"], "/api/productos/1");
}

#[tokio::test]
async fn api_rejects_invalid_product() {
    let app = app(false).await;

    let (status, body, _) = send(
        &app,
        json_request(
            "POST",
            "/api/productos",
            serde_json::json!({"nombre": "", "precio": "1.00"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let problem: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(problem["title"], "Validation Error");
}

#[tokio::test]
async fn api_keeps_price_cents() {
    let app = app(false).await;

    let (status, body, _) = send(
        &app,
        json_request(
            "POST",
            "/api/productos",
            serde_json::json!({"nombre": "Mochila", "precio": "35.00"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(created["precio"], "35.00");

    let (_, body) = get(&app, "/api/productos/1").await;
    let fetched: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(fetched["precio"], "35.00");
}

#[tokio::test]
async fn configured_raw_limit_reaches_the_page() {
    let db = sqlite_memory().await;
    let module = ProductosModule::new(productos::Config {
        raw_limit: rust_decimal::Decimal::from(120),
        ..productos::Config::default()
    });
    module.init(db).unwrap();
    let app = module.register_rest(Router::new()).unwrap();

    let (status, body) = get(&app, "/productos/consultas/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("SQL directo: precio menor que 120"));
    assert!(!body.contains("SQL directo: precio menor que 100"));
}

#[tokio::test]
async fn openapi_document_lists_paths() {
    let app = app(false).await;
    let (status, body) = get(&app, "/api/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(doc["paths"]["/api/productos"].is_object());
    assert!(doc["paths"]["/api/productos/{id}"].is_object());
}
