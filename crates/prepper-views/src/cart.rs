//! Cart page, cart lines, summary box and mini cart.

use prepper_cart::domain::aggregates::{CartItem, CartSummary};

use crate::action::{Action, CartItemHandlers};
use crate::node::{Node, action_button, div, heading, image, link, paragraph};

/// Lines shown in the mini cart before "+N flere varer".
pub const MINI_CART_LINES: usize = 3;

/// `1 vare`, `2 varer`.
#[must_use]
pub fn item_count_text(total_items: u32) -> String {
    if total_items == 1 {
        "1 vare".to_owned()
    } else {
        format!("{total_items} varer")
    }
}

/// The full cart page.
#[must_use]
pub fn cart_view(
    items: &[CartItem],
    summary: &CartSummary,
    handlers: &dyn CartItemHandlers,
    asset_url: &str,
) -> Node {
    let header = div("mb-8")
        .child(heading(1, "Din Indkøbskurv", "text-3xl font-bold text-gray-800 mb-2"))
        .child(paragraph(
            "text-gray-600",
            format!("{} i kurven", item_count_text(summary.total_items)),
        ));

    if summary.is_empty {
        return Node::Fragment(vec![header.into(), empty_cart_view()]);
    }

    let lines = div("space-y-4").children(
        items
            .iter()
            .map(|item| cart_item_view(item, handlers, asset_url)),
    );
    let content = div("grid gap-6 lg:grid-cols-3")
        .child(div("lg:col-span-2").child(lines))
        .child(div("lg:col-span-1").child(cart_summary_view(summary)));

    Node::Fragment(vec![header.into(), content.into()])
}

/// One cart line with quantity controls and a remove button.
#[must_use]
pub fn cart_item_view(item: &CartItem, handlers: &dyn CartItemHandlers, asset_url: &str) -> Node {
    let quantity = i64::from(item.quantity);
    let step_class = "w-8 h-8 bg-gray-200 hover:bg-gray-300 text-gray-700 rounded-md font-bold";

    let controls = div("flex items-center gap-2 mb-2")
        .child(paragraph("text-sm text-gray-600 mr-2", "Antal:"))
        .child(action_button(
            handlers.on_update_quantity(&item.id, quantity - 1),
            "-",
            step_class,
        ))
        .child(paragraph(
            "w-12 text-center font-semibold text-gray-800",
            item.quantity.to_string(),
        ))
        .child(action_button(
            handlers.on_update_quantity(&item.id, quantity + 1),
            "+",
            step_class,
        ));

    let info = div("flex-1 min-w-0")
        .child(heading(3, item.name.clone(), "text-lg font-semibold text-gray-800 mb-1"))
        .child(paragraph(
            "text-gray-600 text-sm mb-2",
            format!("Pris: {}", item.price.format_dkk()),
        ))
        .child(controls);

    let actions = div("text-right flex-shrink-0")
        .child(paragraph("text-lg font-bold text-gray-800 mb-2", item.subtotal.format_dkk()))
        .child(action_button(
            handlers.on_remove(&item.id),
            "Fjern",
            "text-red-600 hover:text-red-800 text-sm underline",
        ));

    div("bg-white border border-gray-200 rounded-lg p-4 shadow-sm")
        .attr("data-cart-item", item.id.to_string())
        .child(
            div("flex gap-4")
                .child(div("flex-shrink-0").child(image(
                    format!("{asset_url}{}", item.image_url),
                    item.name.clone(),
                    "w-20 h-20 object-cover rounded-md",
                )))
                .child(info)
                .child(actions),
        )
        .into()
}

/// Totals, checkout and continue-shopping.
#[must_use]
pub fn cart_summary_view(summary: &CartSummary) -> Node {
    let details = div("space-y-3 mb-6")
        .child(
            div("flex justify-between text-gray-600")
                .child(paragraph("", "Antal varer:"))
                .child(paragraph("", summary.total_items.to_string())),
        )
        .child(
            div("flex justify-between text-lg font-bold text-gray-800 border-t border-gray-300 pt-3")
                .child(paragraph("", "Total:"))
                .child(paragraph("", summary.total_price.format_dkk())),
        );

    div("bg-gray-50 border border-gray-200 rounded-lg p-6 sticky top-4")
        .child(heading(
            2,
            "Oversigt",
            "text-xl font-bold text-gray-800 mb-4 border-b border-gray-300 pb-2",
        ))
        .child(details)
        .child(action_button(
            Action::Checkout,
            "Gå til betaling",
            "w-full bg-green-600 hover:bg-green-700 text-white py-3 px-6 rounded-md font-semibold transition-colors",
        ))
        .child(div("text-center mt-4").child(action_button(
            Action::ClearCart,
            "Tøm kurven",
            "text-red-600 hover:text-red-800 text-sm underline",
        )))
        .child(div("text-center mt-4").child(link(
            "/",
            "← Fortsæt med at handle",
            "text-blue-600 hover:text-blue-800 underline",
        )))
        .into()
}

/// Shown instead of the lines when the cart is empty.
#[must_use]
pub fn empty_cart_view() -> Node {
    div("text-center py-12")
        .child(div("text-6xl text-gray-300 mb-4").text("🛒"))
        .child(heading(
            2,
            "Din indkøbskurv er tom",
            "text-2xl font-semibold text-gray-700 mb-4",
        ))
        .child(paragraph(
            "text-gray-600 mb-8",
            "Tilføj nogle produkter til din kurv for at komme i gang",
        ))
        .child(link(
            "/",
            "Start med at handle",
            "bg-sky-600 hover:bg-sky-700 text-white py-3 px-6 rounded-md font-semibold transition-colors",
        ))
        .into()
}

/// Compact cart for the header dropdown.
#[must_use]
pub fn mini_cart_view(items: &[CartItem], summary: &CartSummary) -> Node {
    let header = div("flex justify-between items-center mb-3 border-b border-gray-200 pb-2")
        .child(heading(3, "Indkøbskurv", "text-lg font-semibold text-gray-800"))
        .child(paragraph("text-sm text-gray-600", item_count_text(summary.total_items)));

    let container = div("bg-white border border-gray-200 rounded-lg shadow-lg p-4 w-80").child(header);
    if summary.is_empty {
        return container
            .child(paragraph("text-gray-600 text-center py-4", "Din kurv er tom"))
            .into();
    }

    let mut lines = div("space-y-2 mb-4 max-h-48 overflow-y-auto").children(
        items.iter().take(MINI_CART_LINES).map(|item| {
            div("flex gap-2 items-center text-sm")
                .child(paragraph("flex-1 text-gray-800 font-medium truncate", item.name.clone()))
                .child(paragraph("text-gray-600", format!("{}x", item.quantity)))
                .child(paragraph("text-gray-800 font-semibold", item.subtotal.format_dkk()))
        }),
    );
    if items.len() > MINI_CART_LINES {
        lines = lines.child(paragraph(
            "text-xs text-gray-500 text-center",
            format!("+{} flere varer", items.len() - MINI_CART_LINES),
        ));
    }

    let footer = div("border-t border-gray-200 pt-3")
        .child(
            div("flex justify-between items-center mb-3")
                .child(paragraph("font-semibold text-gray-800", "Total:"))
                .child(paragraph("font-bold text-gray-800", summary.total_price.format_dkk())),
        )
        .child(link(
            "/cart",
            "Se kurv",
            "block text-center w-full bg-sky-600 hover:bg-sky-700 text-white py-2 px-4 rounded-md text-sm font-semibold transition-colors",
        ));

    container.child(lines).child(footer).into()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use prepper_core::money::Price;
    use prepper_core::product_id::ProductId;

    use super::*;
    use crate::action::CartActions;

    fn item(id: u64, quantity: u32) -> CartItem {
        let price = Price::from_kroner(500).unwrap();
        CartItem {
            id: ProductId::from(id),
            name: format!("Vare {id}"),
            price,
            quantity,
            image_url: format!("/images/{id}.jpg"),
            slug: format!("vare-{id}"),
            category: "vand".to_owned(),
            subtotal: price.checked_times(quantity).unwrap(),
            added_at: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        }
    }

    fn summary_of(items: &[CartItem]) -> CartSummary {
        CartSummary {
            total_items: items.iter().map(|i| i.quantity).sum(),
            total_price: items.iter().map(|i| i.subtotal).sum(),
            item_count: items.len(),
            is_empty: items.is_empty(),
        }
    }

    #[test]
    fn test_item_count_is_pluralized() {
        assert_eq!(item_count_text(0), "0 varer");
        assert_eq!(item_count_text(1), "1 vare");
        assert_eq!(item_count_text(2), "2 varer");
    }

    #[test]
    fn test_cart_line_wires_handlers() {
        // Arrange
        let line = item(7, 2);

        // Act
        let node = cart_item_view(&line, &CartActions, "");

        // Assert
        assert_eq!(
            node.actions(),
            vec![
                &Action::UpdateQuantity {
                    id: ProductId::from(7),
                    quantity: 1,
                },
                &Action::UpdateQuantity {
                    id: ProductId::from(7),
                    quantity: 3,
                },
                &Action::RemoveItem {
                    id: ProductId::from(7),
                },
            ]
        );
        let text = node.text_content();
        assert!(text.contains("Pris: 500,00 kr."));
        assert!(text.contains("1.000,00 kr."));
    }

    #[test]
    fn test_empty_cart_shows_empty_state_without_actions() {
        let node = cart_view(&[], &summary_of(&[]), &CartActions, "");

        let text = node.text_content();
        assert!(text.contains("0 varer i kurven"));
        assert!(text.contains("Din indkøbskurv er tom"));
        assert!(node.actions().is_empty());
    }

    #[test]
    fn test_cart_view_lists_lines_and_summary() {
        let items = vec![item(1, 1), item(2, 2)];

        let node = cart_view(&items, &summary_of(&items), &CartActions, "");

        let text = node.text_content();
        assert!(text.contains("3 varer i kurven"));
        assert!(text.contains("1.500,00 kr."));
        let actions = node.actions();
        assert!(actions.contains(&&Action::Checkout));
        assert!(actions.contains(&&Action::ClearCart));
    }

    #[test]
    fn test_mini_cart_shows_first_three_lines_and_remainder() {
        let items: Vec<_> = (1..=5).map(|id| item(id, 1)).collect();

        let text = mini_cart_view(&items, &summary_of(&items)).text_content();

        assert!(text.contains("Vare 3"));
        assert!(!text.contains("Vare 4"));
        assert!(text.contains("+2 flere varer"));
        assert!(text.contains("5 varer"));
        assert!(text.contains("2.500,00 kr."));
    }

    #[test]
    fn test_mini_cart_for_empty_cart() {
        let text = mini_cart_view(&[], &summary_of(&[])).text_content();
        assert!(text.contains("Din kurv er tom"));
    }
}
