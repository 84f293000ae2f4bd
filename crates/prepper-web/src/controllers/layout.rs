//! Wraps page content in the site layout.

use axum::http::StatusCode;
use prepper_catalog::application::display::nav_items;
use prepper_views::cart::mini_cart_view;
use prepper_views::document;
use prepper_views::layout::Layout;
use prepper_views::modal::delete_confirm_modal;

use crate::page::PageContent;
use crate::state::AppState;

/// Renders `content` inside header, navigation, main and footer.
///
/// The navigation bar is fetched here; if the category call fails the bar
/// is left empty and the page still renders.
pub async fn render(state: &AppState, content: PageContent) -> (StatusCode, String) {
    let PageContent {
        title,
        status,
        body,
        active_category,
    } = content;

    let categories = state
        .catalog
        .list_categories()
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "category navigation unavailable");
            Vec::new()
        });

    let (summary, mini_cart) = {
        let cart = state.cart();
        let summary = cart.summary();
        (summary, mini_cart_view(cart.items(), &summary))
    };

    let layout = Layout {
        title: title.clone(),
        content: body,
        nav: nav_items(&categories, active_category.as_deref()),
        logged_in: state.tokens.is_logged_in(),
        cart: summary,
        mini_cart,
        notices: state.session.take_notices(),
        modal: state
            .session
            .current_confirmation()
            .map(|(key, item_name)| delete_confirm_modal(&key, &item_name)),
    };

    let html = document(&title, &layout.into_node(), &state.config.stylesheet_url());
    (status, html)
}
