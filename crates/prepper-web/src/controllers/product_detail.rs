//! Product detail page.

use prepper_catalog::application::display;
use prepper_routing::ProductRef;
use prepper_views::product::product_detail_view;

use crate::error::PageError;
use crate::page::Page;
use crate::state::AppState;

/// Shows one product with its add-to-cart form.
///
/// # Errors
///
/// Returns a `PageError` if the product does not exist or the product API
/// cannot be reached.
pub async fn product_detail(state: &AppState, product: &ProductRef) -> Result<Page, PageError> {
    let record = state
        .catalog
        .get_product(&product.category, &product.slug)
        .await
        .map_err(|e| {
            PageError::from(e)
                .when_not_found("Produkt ikke fundet", "Produktet blev ikke fundet")
                .when_unreachable("Der opstod en fejl ved indlæsning af produktet")
        })?;

    let detail = display::product_detail(&record, &product.category);
    let in_cart = state.cart().item_quantity(&detail.id);

    Ok(Page::content(
        detail.name.clone(),
        product_detail_view(&detail, in_cart, &state.config.asset_url),
    )
    .with_active_category(&product.category))
}
