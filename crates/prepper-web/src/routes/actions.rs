//! Form actions posted by the views.
//!
//! Each handler decodes its form, runs the cart or login flow and answers
//! with `303 See Other` so a reload does not repeat the action.

use axum::extract::State;
use axum::response::Response;
use axum::routing::post;
use axum::{Form, Router};
use serde::Deserialize;

use crate::controllers::{cart, login};
use crate::page::Page;
use crate::routes::pages::respond;
use crate::state::AppState;

/// Body of `/actions/cart/add`.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    /// Category slug.
    pub category: String,
    /// Product slug.
    pub slug: String,
    /// Units to add.
    #[serde(default = "one")]
    pub quantity: u32,
}

const fn one() -> u32 {
    1
}

/// Body of `/actions/cart/quantity`.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    /// Line id as rendered.
    pub id: String,
    /// New quantity; zero or less removes the line.
    pub quantity: i64,
}

/// Body of `/actions/cart/remove`.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    /// Line id as rendered.
    pub id: String,
}

/// Body of `/actions/confirm`.
#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    /// Dialog key.
    pub key: String,
    /// `confirm`, `cancel` or `escape`.
    #[serde(default)]
    pub decision: String,
}

/// Body of `/actions/login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// User name.
    #[serde(default)]
    pub username: String,
    /// Password.
    #[serde(default)]
    pub password: String,
}

/// POST /actions/cart/add
async fn add(State(state): State<AppState>, Form(form): Form<AddForm>) -> Response {
    let page = cart::add_to_cart(&state, &form.category, &form.slug, form.quantity).await;
    respond(&state, page).await
}

/// POST /actions/cart/quantity
async fn quantity(State(state): State<AppState>, Form(form): Form<QuantityForm>) -> Response {
    respond(&state, cart::update_quantity(&state, &form.id, form.quantity)).await
}

/// POST /actions/cart/remove
async fn remove(State(state): State<AppState>, Form(form): Form<RemoveForm>) -> Response {
    respond(&state, cart::request_removal(&state, &form.id)).await
}

/// POST /actions/cart/clear
async fn clear(State(state): State<AppState>) -> Response {
    respond(&state, cart::request_clear(&state)).await
}

/// POST /actions/confirm
async fn confirm(State(state): State<AppState>, Form(form): Form<ConfirmForm>) -> Response {
    let page = cart::answer_confirmation(&state, &form.key, &form.decision).await;
    respond(&state, page).await
}

/// POST /actions/checkout
async fn checkout(State(state): State<AppState>) -> Response {
    respond(&state, cart::checkout(&state)).await
}

/// POST /actions/login
async fn submit_login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let page: Page = login::submit_login(&state, &form.username, &form.password).await;
    respond(&state, page).await
}

/// Returns the action router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/actions/cart/add", post(add))
        .route("/actions/cart/quantity", post(quantity))
        .route("/actions/cart/remove", post(remove))
        .route("/actions/cart/clear", post(clear))
        .route("/actions/confirm", post(confirm))
        .route("/actions/checkout", post(checkout))
        .route("/actions/login", post(submit_login))
}
