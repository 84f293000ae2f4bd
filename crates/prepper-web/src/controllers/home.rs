//! Home page.

use prepper_catalog::application::display::product_cards;
use prepper_views::product::{WELCOME_TITLE, home_view};

use crate::page::Page;
use crate::state::AppState;

/// Products shown in the featured section.
pub const FEATURED_COUNT: usize = 3;

/// Welcome box plus the first products of the featured category. A failed
/// fetch replaces the featured section with a message.
pub async fn home(state: &AppState) -> Page {
    let category = &state.config.default_category;
    let featured = match state.catalog.list_products(category).await {
        Ok(products) => Some(product_cards(&products, category, Some(FEATURED_COUNT))),
        Err(e) => {
            tracing::warn!(error = %e, category = %category, "featured products unavailable");
            None
        }
    };

    Page::content(
        WELCOME_TITLE,
        home_view(
            &title_from_slug(category),
            featured.as_deref(),
            &state.config.asset_url,
        ),
    )
}

/// `vand-og-vandrensning` -> `Vand og vandrensning`.
fn title_from_slug(slug: &str) -> String {
    let words = slug.replace('-', " ");
    let mut chars = words.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
