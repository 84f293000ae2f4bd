//! View-ready catalog records.
//!
//! Controllers map raw API records through these functions before handing
//! them to view builders, so views never compute prices or stock tiers.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use prepper_core::money::Price;
use prepper_core::product_id::ProductId;

use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::domain::stock::StockLevel;

/// A product on a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Fragment of the detail page.
    pub link: String,
    /// Image path relative to the asset host.
    pub image_url: String,
    /// Trusted HTML teaser from the API.
    pub teaser: String,
    /// `1.500,00 kr.`
    pub formatted_price: String,
    /// Stock badge text.
    pub stock_text: String,
    /// Stock badge CSS class.
    pub stock_class: &'static str,
}

/// A product on its detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Product slug.
    pub slug: String,
    /// Category slug the product was opened under.
    pub category: String,
    /// Unit price.
    pub price: Price,
    /// `1.500,00 kr.`
    pub formatted_price: String,
    /// Image path relative to the asset host.
    pub image_url: String,
    /// Trusted HTML teaser from the API.
    pub teaser: Option<String>,
    /// Trusted HTML description from the API.
    pub description: Option<String>,
    /// Stock badge text.
    pub stock_text: String,
    /// Stock badge CSS class.
    pub stock_class: &'static str,
    /// `true` when the product can be added to the cart.
    pub in_stock: bool,
    /// Category title, empty if unknown.
    pub category_title: String,
    /// Brand title, empty if unknown.
    pub brand_title: String,
}

/// A category link in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Category slug.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Fragment of the category listing.
    pub url: String,
    /// `true` for the category being shown.
    pub active: bool,
}

/// Bytes escaped inside one path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The fragment of a product's detail page, with both slugs
/// percent-encoded.
#[must_use]
pub fn detail_fragment(category: &str, slug: &str) -> String {
    format!(
        "/product/{}/{}",
        utf8_percent_encode(category, SEGMENT),
        utf8_percent_encode(slug, SEGMENT)
    )
}

/// Maps products listed under `category` into cards, keeping at most
/// `limit` of them.
#[must_use]
pub fn product_cards(products: &[Product], category: &str, limit: Option<usize>) -> Vec<ProductCard> {
    products
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|product| {
            let stock = StockLevel::from_units(product.stock);
            ProductCard {
                id: product.id.clone(),
                name: product.name.clone(),
                link: detail_fragment(category, &product.slug),
                image_url: product.image_url.clone(),
                teaser: product.teaser.clone().unwrap_or_default(),
                formatted_price: product.price.format_dkk(),
                stock_text: stock.listing_text(),
                stock_class: stock.css_class(),
            }
        })
        .collect()
}

/// Maps a product opened under `category` into its detail record.
#[must_use]
pub fn product_detail(product: &Product, category: &str) -> ProductDetail {
    let stock = StockLevel::from_units(product.stock);
    ProductDetail {
        id: product.id.clone(),
        name: product.name.clone(),
        slug: product.slug.clone(),
        category: category.to_owned(),
        price: product.price,
        formatted_price: product.price.format_dkk(),
        image_url: product.image_url.clone(),
        teaser: product.teaser.clone().filter(|t| !t.is_empty()),
        description: product.description.clone().filter(|d| !d.is_empty()),
        stock_text: stock.detail_text(),
        stock_class: stock.css_class(),
        in_stock: stock != StockLevel::SoldOut,
        category_title: product
            .category
            .as_ref()
            .map(|c| c.title().to_owned())
            .unwrap_or_default(),
        brand_title: product
            .brand
            .as_ref()
            .map(|b| b.title().to_owned())
            .unwrap_or_default(),
    }
}

/// Maps categories into navigation links, marking `active` as current.
#[must_use]
pub fn nav_items(categories: &[Category], active: Option<&str>) -> Vec<NavItem> {
    categories
        .iter()
        .map(|category| NavItem {
            slug: category.slug.clone(),
            title: category.title.clone(),
            url: category.listing_fragment(),
            active: active == Some(category.slug.as_str()),
        })
        .collect()
}
