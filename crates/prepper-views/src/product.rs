//! Product listing, product detail and the home page.

use prepper_cart::domain::aggregates::MAX_QUANTITY;
use prepper_catalog::application::display::{ProductCard, ProductDetail};

use crate::action::Action;
use crate::node::{Node, div, el, form, heading, image, link, paragraph, raw, submit};

/// Welcome heading on the home page.
pub const WELCOME_TITLE: &str = "Velkommen til Sgt. Prepper";

/// A clickable card per product.
#[must_use]
pub fn product_list_view(cards: &[ProductCard], asset_url: &str) -> Node {
    if cards.is_empty() {
        return paragraph("text-gray-600", "Der er ingen produkter i denne kategori").into();
    }
    Node::Fragment(
        cards
            .iter()
            .map(|card| product_card_view(card, asset_url))
            .collect(),
    )
}

fn product_card_view(card: &ProductCard, asset_url: &str) -> Node {
    let info = div("flex-1 px-4")
        .child(heading(
            2,
            card.name.clone(),
            "text-lg font-semibold text-blue-600 hover:text-blue-800",
        ))
        .child(div("text-gray-600 mt-2").child(raw(card.teaser.clone())));

    let cost = div("text-right")
        .child(paragraph("text-xl font-bold text-gray-800", card.formatted_price.clone()))
        .child(stock_badge(&card.stock_text, card.stock_class, "text-sm"));

    link(
        card.link.clone(),
        "",
        "block border hover:shadow-lg transition-shadow cursor-pointer",
    )
    .child(
        div("flex justify-between p-4")
            .child(image(
                format!("{asset_url}{}", card.image_url),
                card.name.clone(),
                "max-w-[200px]",
            ))
            .child(info)
            .child(cost),
    )
    .into()
}

fn stock_badge(stock_text: &str, stock_class: &str, size: &str) -> Node {
    div(&format!(
        "{stock_class} {size} font-bold border px-2 py-1 rounded-md bg-gray-50"
    ))
    .text(format!("📦 {stock_text}"))
    .into()
}

/// The detail page, with an add-to-cart form while the product is in stock.
#[must_use]
pub fn product_detail_view(detail: &ProductDetail, in_cart: u32, asset_url: &str) -> Node {
    let mut meta = div("mb-4");
    if !detail.brand_title.is_empty() {
        meta = meta.child(
            paragraph("text-sm text-gray-600", "")
                .child(el("strong").text("Mærke: "))
                .text(detail.brand_title.clone()),
        );
    }
    if !detail.category_title.is_empty() {
        meta = meta.child(
            paragraph("text-sm text-gray-600", "")
                .child(el("strong").text("Kategori: "))
                .text(detail.category_title.clone()),
        );
    }

    let stock = div("mt-3 p-3 border rounded-lg bg-gray-50")
        .child(paragraph("text-sm font-medium text-gray-700 mb-1", "Lagerstatus:"))
        .child(stock_badge(&detail.stock_text, detail.stock_class, "text-lg"));

    let mut info = div("md:w-1/2 p-6")
        .child(heading(1, detail.name.clone(), "text-3xl font-bold text-gray-800 mb-4"))
        .child(meta)
        .child(
            div("mb-6")
                .child(heading(2, detail.formatted_price.clone(), "text-2xl font-bold text-blue-600"))
                .child(stock),
        );
    if let Some(teaser) = &detail.teaser {
        info = info.child(div("text-lg text-gray-700 mb-4 italic").child(raw(teaser.clone())));
    }
    info = info.child(add_to_cart_view(detail, in_cart));

    let mut container = div("max-w-4xl mx-auto bg-white shadow-lg rounded-lg overflow-hidden")
        .child(
            div("md:flex")
                .child(div("md:w-1/2 p-6").child(image(
                    format!("{asset_url}{}", detail.image_url),
                    detail.name.clone(),
                    "w-full h-auto rounded-lg shadow-md",
                )))
                .child(info),
        );
    if let Some(description) = &detail.description {
        container = container.child(
            div("p-6 border-t border-gray-200")
                .child(heading(2, "Beskrivelse", "text-xl font-semibold text-gray-800 mb-4"))
                .child(div("prose max-w-none text-gray-700").child(raw(description.clone()))),
        );
    }
    container
        .child(div("p-6 border-t border-gray-200").child(link(
            format!("/?category={}", detail.category),
            "← Tilbage til produktliste",
            "inline-block bg-gray-500 text-white px-4 py-2 rounded hover:bg-gray-600 transition-colors",
        )))
        .into()
}

fn add_to_cart_view(detail: &ProductDetail, in_cart: u32) -> Node {
    let mut section = div("mb-4");
    let room = MAX_QUANTITY.saturating_sub(in_cart);
    if detail.in_stock && room > 0 {
        section = section.child(
            form(
                Action::AddToCart {
                    category: detail.category.clone(),
                    slug: detail.slug.clone(),
                },
                "flex items-center gap-2",
            )
            .child(el("label").attr("for", "quantity").class("text-sm text-gray-600").text("Antal:"))
            .child(
                el("input")
                    .attr("id", "quantity")
                    .attr("name", "quantity")
                    .attr("type", "number")
                    .attr("min", "1")
                    .attr("max", room.to_string())
                    .attr("value", "1")
                    .class("w-20 px-2 py-1 border border-gray-300 rounded-md"),
            )
            .child(submit(
                "Læg i kurv",
                "bg-green-600 hover:bg-green-700 text-white py-2 px-4 rounded-md font-semibold",
            )),
        );
    }
    if in_cart > 0 {
        section = section.child(paragraph(
            "text-sm text-gray-600 mt-2",
            format!("Du har {in_cart} stk. i kurven"),
        ));
    }
    section.into()
}

/// The home page: a welcome box and the featured products.
///
/// `featured` is `None` when the featured products could not be loaded.
#[must_use]
pub fn home_view(featured_title: &str, featured: Option<&[ProductCard]>, asset_url: &str) -> Node {
    let welcome = div("text-center py-8 bg-slate-100 rounded-lg")
        .child(heading(2, WELCOME_TITLE, "text-3xl font-bold text-gray-800 mb-4"))
        .child(paragraph(
            "text-lg text-gray-600",
            "Din pålidelige partner til overlevelsesudstyr og beredskab",
        ));

    let section: Node = match featured {
        Some([]) => Node::empty(),
        Some(cards) => div("")
            .child(heading(
                2,
                format!("Udvalgte Produkter - {featured_title}"),
                "text-2xl font-bold text-gray-800 mb-6",
            ))
            .child(product_list_view(cards, asset_url))
            .into(),
        None => paragraph("text-red-600", "Kunne ikke indlæse produkter").into(),
    };

    div("space-y-8").child(welcome).child(section).into()
}

#[cfg(test)]
mod tests {
    use prepper_catalog::domain::stock::StockLevel;
    use prepper_core::money::Price;
    use prepper_core::product_id::ProductId;

    use super::*;
    use crate::render::render;

    fn card(slug: &str) -> ProductCard {
        ProductCard {
            id: ProductId::from(1),
            name: "Vandfilter".to_owned(),
            link: format!("/product/vand/{slug}"),
            image_url: "/images/filter.jpg".to_owned(),
            teaser: "<p>Rent vand</p>".to_owned(),
            formatted_price: "1.500,00 kr.".to_owned(),
            stock_text: "3 på lager".to_owned(),
            stock_class: StockLevel::Low(3).css_class(),
        }
    }

    fn detail(in_stock: bool) -> ProductDetail {
        ProductDetail {
            id: ProductId::from(1),
            name: "Vandfilter".to_owned(),
            slug: "filter".to_owned(),
            category: "vand".to_owned(),
            price: Price::from_kroner(1500).unwrap(),
            formatted_price: "1.500,00 kr.".to_owned(),
            image_url: "/images/filter.jpg".to_owned(),
            teaser: None,
            description: Some("<p>Langt</p>".to_owned()),
            stock_text: "12 stk. på lager".to_owned(),
            stock_class: "text-green-600",
            in_stock,
            category_title: "Vand".to_owned(),
            brand_title: String::new(),
        }
    }

    #[test]
    fn test_product_card_links_to_detail_and_prefixes_asset_host() {
        let html = render(&product_list_view(&[card("filter")], "http://assets"));

        assert!(html.contains("href=\"/product/vand/filter\""));
        assert!(html.contains("src=\"http://assets/images/filter.jpg\""));
        assert!(html.contains("<p>Rent vand</p>"));
        assert!(html.contains("📦 3 på lager"));
        assert!(html.contains("text-orange-500"));
    }

    #[test]
    fn test_empty_listing_shows_message() {
        let text = product_list_view(&[], "").text_content();
        assert_eq!(text, "Der er ingen produkter i denne kategori");
    }

    #[test]
    fn test_detail_offers_add_to_cart_when_in_stock() {
        let node = product_detail_view(&detail(true), 0, "");

        assert_eq!(
            node.actions(),
            vec![&Action::AddToCart {
                category: "vand".to_owned(),
                slug: "filter".to_owned(),
            }]
        );
        let text = node.text_content();
        assert!(text.contains("Kategori: Vand"));
        assert!(!text.contains("Mærke"));
        assert!(text.contains("Beskrivelse"));
    }

    #[test]
    fn test_sold_out_detail_has_no_add_to_cart() {
        let node = product_detail_view(&detail(false), 2, "");

        assert!(node.actions().is_empty());
        assert!(node.text_content().contains("Du har 2 stk. i kurven"));
    }

    #[test]
    fn test_quantity_input_is_capped_by_room_left_on_the_line() {
        let partly = render(&product_detail_view(&detail(true), 990, ""));
        let full = product_detail_view(&detail(true), MAX_QUANTITY, "");

        assert!(partly.contains("max=\"9\""));
        assert!(full.actions().is_empty());
    }

    #[test]
    fn test_home_shows_featured_section_or_error() {
        let with_products = home_view("Vand", Some(&[card("a")]), "").text_content();
        let failed = home_view("Vand", None, "").text_content();
        let empty = home_view("Vand", Some(&[]), "").text_content();

        assert!(with_products.contains(WELCOME_TITLE));
        assert!(with_products.contains("Udvalgte Produkter - Vand"));
        assert!(failed.contains("Kunne ikke indlæse produkter"));
        assert!(!empty.contains("Udvalgte Produkter"));
    }
}
