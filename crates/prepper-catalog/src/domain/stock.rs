//! Stock tiers.

/// How much of a product is in stock, as shown to shoppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// More than ten units.
    Plenty(u32),
    /// One to ten units.
    Low(u32),
    /// Nothing in stock.
    SoldOut,
}

/// Stock count above which a product is shown as plentiful.
pub const PLENTY_THRESHOLD: u32 = 10;

const RESTOCK_TEXT: &str = "Forventes på lager indenfor få uger";

impl StockLevel {
    /// Classifies a unit count.
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        match units {
            0 => Self::SoldOut,
            n if n > PLENTY_THRESHOLD => Self::Plenty(n),
            n => Self::Low(n),
        }
    }

    /// CSS class for the stock badge.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Plenty(_) => "text-green-600",
            Self::Low(_) => "text-orange-500",
            Self::SoldOut => "text-red-600",
        }
    }

    /// Badge text on product cards: `12 på lager`.
    #[must_use]
    pub fn listing_text(self) -> String {
        match self {
            Self::Plenty(n) | Self::Low(n) => format!("{n} på lager"),
            Self::SoldOut => RESTOCK_TEXT.to_owned(),
        }
    }

    /// Badge text on the detail page: `12 stk. på lager`.
    #[must_use]
    pub fn detail_text(self) -> String {
        match self {
            Self::Plenty(n) | Self::Low(n) => format!("{n} stk. på lager"),
            Self::SoldOut => RESTOCK_TEXT.to_owned(),
        }
    }
}
