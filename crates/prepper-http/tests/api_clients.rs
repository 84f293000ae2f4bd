//! Drives the HTTP adapters against a local stand-in for the product API.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use prepper_auth::api::AuthApi;
use prepper_auth::domain::credentials::Credentials;
use prepper_catalog::api::CatalogApi;
use prepper_core::error::DomainError;
use prepper_core::money::Price;
use prepper_core::product_id::ProductId;
use prepper_http::{HttpAuthApi, HttpCatalogApi};
use serde_json::{Value, json};

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

async fn list_products(Path(category): Path<String>) -> Json<Value> {
    if category != "vand-og-vandrensning" {
        return Json(json!([]));
    }
    Json(json!([
        {"id": 1, "name": "Vandfilter", "slug": "vandfilter", "price": 1500, "stock": 12,
         "teaser": "<p>Rent vand</p>", "imageUrl": "/images/vandfilter.jpg"},
        {"id": 2, "name": "Vanddunk", "slug": "vanddunk", "price": 99.95, "stock": null,
         "imageUrl": "/images/vanddunk.jpg"}
    ]))
}

async fn get_product(
    Path((category, slug)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    if category == "vand-og-vandrensning" && slug == "vandfilter" {
        return Ok(Json(json!({
            "id": 1, "name": "Vandfilter", "slug": "vandfilter", "price": "1500.00",
            "stock": 12, "description": "<p>Langt</p>", "imageUrl": "/images/vandfilter.jpg",
            "category": {"title": "Vand og vandrensning", "slug": "vand-og-vandrensning"},
            "brand": {"title": "Katadyn"}
        })));
    }
    if slug == "udgaaet" {
        return Ok(Json(Value::Null));
    }
    Err(StatusCode::NOT_FOUND)
}

async fn list_categories() -> Json<Value> {
    Json(json!([
        {"slug": "vand-og-vandrensning", "title": "Vand og vandrensning"},
        {"slug": "mad", "title": "Mad"}
    ]))
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["username"] == "sgt" && body["password"] == "secret" {
        (StatusCode::OK, Json(json!({"token": "token-123"})))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Forkert brugernavn eller adgangskode"})),
        )
    }
}

fn product_api() -> Router {
    Router::new()
        .route("/api/products/{category}", get(list_products))
        .route("/api/products/{category}/{slug}", get(get_product))
        .route("/api/categories", get(list_categories))
        .route("/api/login", post(login))
}

fn broken_api() -> Router {
    Router::new()
        .route("/api/products/{category}", get(|| async { "not json" }))
        .route("/api/products/{category}/{slug}", get(|| async { "" }))
        .route("/api/categories", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/api/login", post(|| async { StatusCode::BAD_GATEWAY }))
}

#[tokio::test]
async fn test_list_products_decodes_records() {
    // Arrange
    let catalog = HttpCatalogApi::new(&spawn(product_api()).await).unwrap();

    // Act
    let products = catalog.list_products("vand-og-vandrensning").await.unwrap();

    // Assert
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::from(1));
    assert_eq!(products[0].price, Price::from_kroner(1500).unwrap());
    assert_eq!(products[1].price, Price::from_minor_units(9995).unwrap());
    assert_eq!(products[1].stock, 0);
}

#[tokio::test]
async fn test_get_product_and_not_found() {
    let catalog = HttpCatalogApi::new(&spawn(product_api()).await).unwrap();

    let product = catalog
        .get_product("vand-og-vandrensning", "vandfilter")
        .await
        .unwrap();
    let missing = catalog.get_product("vand-og-vandrensning", "ukendt").await;

    assert_eq!(product.brand.unwrap().title(), "Katadyn");
    assert!(matches!(missing, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_null_or_empty_product_body_is_not_found() {
    // Arrange
    let catalog = HttpCatalogApi::new(&spawn(product_api()).await).unwrap();
    let blank = HttpCatalogApi::new(&spawn(broken_api()).await).unwrap();

    // Act
    let null = catalog.get_product("vand-og-vandrensning", "udgaaet").await;
    let empty = blank.get_product("vand", "vandfilter").await;

    // Assert
    assert!(matches!(null, Err(DomainError::NotFound(_))));
    assert!(matches!(empty, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_list_categories() {
    let catalog = HttpCatalogApi::new(&spawn(product_api()).await).unwrap();

    let categories = catalog.list_categories().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].slug, "mad");
}

#[tokio::test]
async fn test_bad_payloads_and_server_errors_are_network_errors() {
    let catalog = HttpCatalogApi::new(&spawn(broken_api()).await).unwrap();

    assert!(matches!(
        catalog.list_products("vand").await,
        Err(DomainError::Network(_))
    ));
    assert!(matches!(
        catalog.list_categories().await,
        Err(DomainError::Network(_))
    ));
}

#[tokio::test]
async fn test_unreachable_api_is_a_network_error() {
    let catalog = HttpCatalogApi::new("http://127.0.0.1:1/api").unwrap();

    assert!(matches!(
        catalog.list_categories().await,
        Err(DomainError::Network(_))
    ));
}

#[tokio::test]
async fn test_login_returns_token_or_rejection() {
    let auth = HttpAuthApi::new(&spawn(product_api()).await).unwrap();

    let accepted = auth.login(&Credentials::new("sgt", "secret")).await.unwrap();
    let rejected = auth.login(&Credentials::new("sgt", "wrong")).await.unwrap();

    assert_eq!(accepted.token(), Some("token-123"));
    assert_eq!(rejected.token(), None);
    assert_eq!(
        rejected.message.as_deref(),
        Some("Forkert brugernavn eller adgangskode")
    );
}

#[tokio::test]
async fn test_login_server_error_is_a_network_error() {
    let auth = HttpAuthApi::new(&spawn(broken_api()).await).unwrap();

    let result = auth.login(&Credentials::new("sgt", "secret")).await;

    assert!(matches!(result, Err(DomainError::Network(_))));
}
