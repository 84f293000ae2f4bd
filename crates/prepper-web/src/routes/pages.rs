//! Page rendering.
//!
//! Every `GET` that is not an action or the health check is a page: the
//! request path and query form the fragment the route table dispatches on.

use axum::Router as HttpRouter;
use axum::extract::State;
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use prepper_routing::{Matched, Router, RouterError};

use crate::controllers::cart::cart_page;
use crate::controllers::home::home;
use crate::controllers::layout;
use crate::controllers::login::login_page;
use crate::controllers::logout::logout;
use crate::controllers::not_found::not_found;
use crate::controllers::product_detail::product_detail;
use crate::controllers::products::products;
use crate::error::PageError;
use crate::page::{Page, PageKind};
use crate::state::AppState;

/// The storefront's fragment routes.
///
/// # Errors
///
/// Returns a `RouterError` if the table is inconsistent.
pub fn route_table() -> Result<Router<PageKind>, RouterError> {
    Router::builder()
        .route("/", PageKind::Storefront)
        .route("/cart", PageKind::Cart)
        .route("/login", PageKind::Login)
        .route("/logout", PageKind::Logout)
        .product_detail(PageKind::ProductDetail)
        .route("*", PageKind::NotFound)
        .build()
}

/// Serves every path no other route claims.
pub fn router() -> HttpRouter<AppState> {
    HttpRouter::new().fallback(page)
}

async fn page(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    let fragment = uri.path_and_query().map_or("/", PathAndQuery::as_str);
    let page = run(&state, fragment).await;
    respond(&state, page).await
}

/// Dispatches `fragment` and runs the selected controller. Controller
/// failures become error pages.
pub async fn run(state: &AppState, fragment: &str) -> Page {
    let dispatch = state.pages.dispatch(fragment);
    let result = match (dispatch.handler, &dispatch.matched) {
        (PageKind::Storefront, _) => match dispatch.state.non_empty_query("category") {
            Some(category) => products(state, category).await,
            None => Ok(home(state).await),
        },
        (PageKind::ProductDetail, Matched::ProductDetail(product)) => {
            product_detail(state, product).await
        }
        (PageKind::Cart, _) => Ok(cart_page(state)),
        (PageKind::Login, _) => Ok(login_page(state)),
        (PageKind::Logout, _) => Ok(logout(state)),
        (PageKind::ProductDetail | PageKind::NotFound, _) => Ok(not_found(&dispatch.state)),
    };
    result.unwrap_or_else(PageError::into_page)
}

/// Turns a controller result into a response.
pub async fn respond(state: &AppState, page: Page) -> Response {
    match page {
        Page::Redirect(to) => see_other(&to),
        Page::Content(content) => {
            let (status, html) = layout::render(state, content).await;
            (status, Html(html)).into_response()
        }
    }
}

/// `303 See Other` to `to`, or to `/` if `to` is not a valid header value.
pub fn see_other(to: &str) -> Response {
    let location = HeaderValue::try_from(to).unwrap_or_else(|_| {
        tracing::warn!(to, "invalid redirect target");
        HeaderValue::from_static("/")
    });
    (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_builds() {
        let table = route_table().unwrap();

        assert_eq!(*table.dispatch("/").handler, PageKind::Storefront);
        assert_eq!(*table.dispatch("/?category=vand").handler, PageKind::Storefront);
        assert_eq!(*table.dispatch("/cart").handler, PageKind::Cart);
        assert_eq!(*table.dispatch("/product/vand/filter").handler, PageKind::ProductDetail);
        assert_eq!(*table.dispatch("/nope").handler, PageKind::NotFound);
    }

    #[test]
    fn test_see_other_falls_back_to_root() {
        let ok = see_other("/cart");
        let bad = see_other("/bad\nvalue");

        assert_eq!(ok.status(), StatusCode::SEE_OTHER);
        assert_eq!(ok.headers()[header::LOCATION], "/cart");
        assert_eq!(bad.headers()[header::LOCATION], "/");
    }
}
