//! Cart page and cart actions.

use prepper_cart::application::cart_store::CartStore;
use prepper_cart::domain::aggregates::MAX_QUANTITY;
use prepper_cart::domain::product::CartProduct;
use prepper_catalog::application::display::detail_fragment;
use prepper_catalog::domain::product::Product;
use prepper_core::product_id::ProductId;
use prepper_views::cart::cart_view;
use prepper_views::layout::Notice;
use prepper_views::modal::confirmation;
use prepper_views::{CartActions, Decision};
use uuid::Uuid;

use crate::page::Page;
use crate::session::OpenConfirmation;
use crate::state::AppState;

const CART_PATH: &str = "/cart";

/// Shown in the dialog when the whole cart is about to be emptied.
pub const WHOLE_CART: &str = "hele kurven";

/// The cart page.
pub fn cart_page(state: &AppState) -> Page {
    let cart = state.cart();
    Page::content(
        "Indkøbskurv",
        cart_view(
            cart.items(),
            &cart.summary(),
            &CartActions,
            &state.config.asset_url,
        ),
    )
}

/// The fields of `product` the cart keeps, filed under `category`.
#[must_use]
pub fn cart_product(product: &Product, category: &str) -> CartProduct {
    CartProduct {
        id: Some(product.id.clone()),
        name: Some(product.name.clone()),
        price: Some(product.price),
        image_url: product.image_url.clone(),
        slug: product.slug.clone(),
        category: category.to_owned(),
    }
}

/// Fetches the product and adds `quantity` of it, then returns to its page.
pub async fn add_to_cart(state: &AppState, category: &str, slug: &str, quantity: u32) -> Page {
    if !is_path_segment(category) || !is_path_segment(slug) {
        tracing::warn!(category, slug, "rejected add-to-cart for malformed product");
        state
            .session
            .push_notice(Notice::error("Kunne ikke tilføje produktet til kurven"));
        return Page::redirect("/");
    }
    let back = detail_fragment(category, slug);

    let product = match state.catalog.get_product(category, slug).await {
        Ok(product) => product,
        Err(e) => {
            tracing::warn!(error = %e, category, slug, "product unavailable for add-to-cart");
            state
                .session
                .push_notice(Notice::error("Kunne ikke tilføje produktet til kurven"));
            return Page::redirect(back);
        }
    };

    let added = state
        .cart()
        .add_item(&cart_product(&product, category), quantity)
        .map(|_| ());
    match added {
        Ok(()) => state.session.push_notice(Notice::success(format!(
            "\"{}\" blev tilføjet til kurven",
            product.name
        ))),
        Err(e) => {
            tracing::warn!(error = %e, slug, "add-to-cart rejected");
            state
                .session
                .push_notice(Notice::error("Kunne ikke tilføje produktet til kurven"));
        }
    }
    Page::redirect(back)
}

/// Sets the quantity of the line whose id renders as `raw_id`.
///
/// Quantities above [`MAX_QUANTITY`] are refused before the cart is
/// touched.
pub fn update_quantity(state: &AppState, raw_id: &str, quantity: i64) -> Page {
    if quantity > i64::from(MAX_QUANTITY) {
        tracing::warn!(id = raw_id, quantity, "quantity above line maximum");
        state.session.push_notice(Notice::error(format!(
            "Antallet kan højst være {MAX_QUANTITY}"
        )));
        return Page::redirect(CART_PATH);
    }

    let updated = {
        let mut cart = state.cart();
        match resolve_id(&cart, raw_id) {
            Some(id) => cart.update_quantity(&id, quantity),
            None => Ok(false),
        }
    };
    match updated {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!(id = raw_id, quantity, "quantity update for unknown line");
            state
                .session
                .push_notice(Notice::error("Kunne ikke opdatere antal. Prøv igen."));
        }
        Err(e) => {
            tracing::warn!(error = %e, id = raw_id, quantity, "quantity update rejected");
            state
                .session
                .push_notice(Notice::error("Kunne ikke opdatere antal. Prøv igen."));
        }
    }
    Page::redirect(CART_PATH)
}

/// Opens a dialog asking whether to remove the line for `raw_id`. The line
/// is removed only if the dialog is confirmed.
pub fn request_removal(state: &AppState, raw_id: &str) -> Page {
    let line = {
        let cart = state.cart();
        resolve_id(&cart, raw_id).and_then(|id| cart.item(&id).map(|item| (id, item.name.clone())))
    };
    let Some((id, name)) = line else {
        tracing::warn!(id = raw_id, "removal requested for unknown line");
        state
            .session
            .push_notice(Notice::error("Produktet findes ikke i kurven"));
        return Page::redirect(CART_PATH);
    };

    let item_name = if name.is_empty() {
        "Produktet".to_owned()
    } else {
        name.clone()
    };
    let (confirmer, pending) = confirmation();
    let task_state = state.clone();
    let task = tokio::spawn(async move {
        if !pending.confirmed().await {
            tracing::debug!(id = %id, "removal cancelled");
            return;
        }
        let removed = task_state.cart().remove_item(&id);
        if removed {
            task_state
                .session
                .push_notice(Notice::success(format!("\"{name}\" blev fjernet fra kurven")));
        }
    });

    open(state, item_name, confirmer, task);
    Page::redirect(CART_PATH)
}

/// Opens a dialog asking whether to empty the cart.
pub fn request_clear(state: &AppState) -> Page {
    let (confirmer, pending) = confirmation();
    let task_state = state.clone();
    let task = tokio::spawn(async move {
        if !pending.confirmed().await {
            tracing::debug!("clear cancelled");
            return;
        }
        task_state.cart().clear();
        task_state
            .session
            .push_notice(Notice::success("Kurven blev tømt"));
    });

    open(state, WHOLE_CART.to_owned(), confirmer, task);
    Page::redirect(CART_PATH)
}

fn open(
    state: &AppState,
    item_name: String,
    confirmer: prepper_views::modal::Confirmer,
    task: tokio::task::JoinHandle<()>,
) {
    let key = Uuid::new_v4().to_string();
    tracing::debug!(key = %key, item = %item_name, "confirmation opened");
    state.session.open_confirmation(OpenConfirmation {
        key,
        item_name,
        confirmer,
        task,
    });
}

/// Answers the dialog identified by `key`. Anything but `confirm` cancels.
/// Returns once the guarded operation has run.
pub async fn answer_confirmation(state: &AppState, key: &str, decision: &str) -> Page {
    let decision = decision.parse::<Decision>().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unknown dialog decision, cancelling");
        Decision::Cancel
    });
    let Some(open) = state.session.take_confirmation(key) else {
        tracing::debug!(key, "no open confirmation for key");
        return Page::redirect(CART_PATH);
    };

    open.confirmer.resolve(decision);
    if let Err(e) = open.task.await {
        tracing::error!(error = %e, "confirmed operation failed");
    }
    Page::redirect(CART_PATH)
}

/// Checkout is not available yet.
pub fn checkout(state: &AppState) -> Page {
    state
        .session
        .push_notice(Notice::info("Checkout funktionalitet kommer snart!"));
    Page::redirect(CART_PATH)
}

/// Finds the line whose id renders as `raw`. Form posts lose the
/// distinction between `42` and `"42"`, so the cart's own id is used.
fn resolve_id(cart: &CartStore, raw: &str) -> Option<ProductId> {
    cart.items()
        .iter()
        .find(|item| item.id.to_string() == raw)
        .map(|item| item.id.clone())
}

fn is_path_segment(value: &str) -> bool {
    !matches!(value, "" | "." | "..")
        && value
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments_are_restricted() {
        assert!(is_path_segment("vand-og-vandrensning"));
        assert!(is_path_segment("tent_2.0"));
        assert!(is_path_segment("øllebrød"));
        assert!(!is_path_segment(""));
        assert!(!is_path_segment(".."));
        assert!(!is_path_segment("a/b"));
        assert!(!is_path_segment("a b"));
        assert!(!is_path_segment("a?x=1"));
    }
}
