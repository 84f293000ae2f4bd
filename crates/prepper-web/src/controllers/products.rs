//! Product listing for one category.

use prepper_catalog::application::display::product_cards;
use prepper_views::product::product_list_view;

use crate::error::PageError;
use crate::page::Page;
use crate::state::AppState;

/// Lists every product in `category`.
///
/// # Errors
///
/// Returns a `PageError` if the product API cannot be reached.
pub async fn products(state: &AppState, category: &str) -> Result<Page, PageError> {
    let products = state
        .catalog
        .list_products(category)
        .await
        .map_err(|e| PageError::from(e).when_unreachable("Kunne ikke indlæse produkter"))?;

    let cards = product_cards(&products, category, None);
    Ok(
        Page::content("Produkter", product_list_view(&cards, &state.config.asset_url))
            .with_active_category(category),
    )
}
