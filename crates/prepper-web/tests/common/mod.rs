//! Shared test helpers for storefront integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use prepper_core::storage::KeyValueStore;
use prepper_storage::MemoryStore;
use prepper_test_support::{FixedClock, StubAuthApi, StubCatalogApi, category, product};
use tower::ServiceExt;

use prepper_web::config::AppConfig;
use prepper_web::state::{AppState, Services};

/// Category the home page features in tests.
pub const FEATURED: &str = "vand-og-vandrensning";

/// A catalog with two categories and four water products.
pub fn catalog() -> StubCatalogApi {
    StubCatalogApi::new()
        .with_categories(vec![
            category(FEATURED, "Vand og vandrensning"),
            category("mad", "Mad"),
        ])
        .with_products(
            FEATURED,
            vec![
                product(1, "Vandfilter", "vandfilter", 1500, 12),
                product(2, "Vanddunk 20 L", "vanddunk", 200, 3),
                product(3, "Rensetabletter", "rensetabletter", 50, 0),
                product(4, "Feltflaske", "feltflaske", 120, 40),
            ],
        )
}

/// The app under test together with handles to its stubs.
pub struct TestApp {
    /// Router with the same layers as `main.rs`.
    pub router: Router,
    /// Shared state, for inspecting the cart and session.
    pub state: AppState,
    /// Catalog stub, for inspecting requests.
    pub catalog: Arc<StubCatalogApi>,
    /// Auth stub, for inspecting submitted usernames.
    pub auth: Arc<StubAuthApi>,
}

/// Builds the app on the default test catalog and an accepting login.
pub fn build_test_app() -> TestApp {
    build_test_app_with(catalog(), StubAuthApi::accepting("token-123"))
}

/// Builds the app on the given stubs, with in-memory storage.
pub fn build_test_app_with(catalog: StubCatalogApi, auth: StubAuthApi) -> TestApp {
    build_test_app_on(catalog, auth, Arc::new(MemoryStore::new()))
}

/// Builds the app with `cart_storage` as the durable store.
pub fn build_test_app_on(
    catalog: StubCatalogApi,
    auth: StubAuthApi,
    cart_storage: Arc<dyn KeyValueStore>,
) -> TestApp {
    let catalog = Arc::new(catalog);
    let auth = Arc::new(auth);
    let config = AppConfig {
        default_category: FEATURED.to_owned(),
        asset_url: "http://assets.test".to_owned(),
        ..AppConfig::default()
    };
    let services = Services {
        catalog: catalog.clone(),
        auth: auth.clone(),
        cart_storage,
        session_storage: Arc::new(MemoryStore::new()),
        clock: Arc::new(FixedClock::default()),
    };
    let state = AppState::new(config, services).unwrap();

    TestApp {
        router: prepper_web::app(state.clone()),
        state,
        catalog,
        auth,
    }
}

/// A response reduced to what the tests look at.
#[derive(Debug)]
pub struct TestResponse {
    /// Status code.
    pub status: StatusCode,
    /// `Location` header, if any.
    pub location: Option<String>,
    /// Body as text.
    pub body: String,
}

async fn send(app: &TestApp, request: Request<Body>) -> TestResponse {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_owned());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        location,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Send a GET request and return the response.
pub async fn get(app: &TestApp, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a POST request with a form body and return the response.
pub async fn post_form(app: &TestApp, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Extracts the value of the first hidden `key` field.
pub fn confirmation_key(html: &str) -> String {
    let marker = "name=\"key\" value=\"";
    let start = html.find(marker).unwrap() + marker.len();
    let end = start + html[start..].find('"').unwrap();
    html[start..end].to_owned()
}
