//! Typed actions bound to interactive elements.

use std::fmt;
use std::str::FromStr;

use prepper_core::product_id::ProductId;
use thiserror::Error;

/// Something the user can trigger from a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add the product to the cart; the quantity comes from the form input.
    AddToCart {
        /// Category slug.
        category: String,
        /// Product slug.
        slug: String,
    },
    /// Set a cart line's quantity; zero or less removes it.
    UpdateQuantity {
        /// Cart line.
        id: ProductId,
        /// New quantity.
        quantity: i64,
    },
    /// Ask to remove a cart line.
    RemoveItem {
        /// Cart line.
        id: ProductId,
    },
    /// Ask to empty the cart.
    ClearCart,
    /// Answer an open confirmation; the decision comes from the button.
    Confirm {
        /// The confirmation being answered.
        key: String,
    },
    /// Start checkout.
    Checkout,
    /// Submit the login form.
    Login,
}

impl Action {
    /// The POST endpoint that handles the action.
    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::AddToCart { .. } => "/actions/cart/add",
            Self::UpdateQuantity { .. } => "/actions/cart/quantity",
            Self::RemoveItem { .. } => "/actions/cart/remove",
            Self::ClearCart => "/actions/cart/clear",
            Self::Confirm { .. } => "/actions/confirm",
            Self::Checkout => "/actions/checkout",
            Self::Login => "/actions/login",
        }
    }

    /// Form fields the action carries.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::AddToCart { category, slug } => {
                vec![("category", category.clone()), ("slug", slug.clone())]
            }
            Self::UpdateQuantity { id, quantity } => {
                vec![("id", id.to_string()), ("quantity", quantity.to_string())]
            }
            Self::RemoveItem { id } => vec![("id", id.to_string())],
            Self::Confirm { key } => vec![("key", key.clone())],
            Self::ClearCart | Self::Checkout | Self::Login => Vec::new(),
        }
    }
}

/// Produces the actions a cart line offers.
///
/// Accepts an update-quantity handler and a remove handler; the cart views
/// call these instead of holding callbacks.
pub trait CartItemHandlers {
    /// Action for changing `id` to `quantity`.
    fn on_update_quantity(&self, id: &ProductId, quantity: i64) -> Action;

    /// Action for removing `id`.
    fn on_remove(&self, id: &ProductId) -> Action;
}

/// The storefront's cart handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartActions;

impl CartItemHandlers for CartActions {
    fn on_update_quantity(&self, id: &ProductId, quantity: i64) -> Action {
        Action::UpdateQuantity {
            id: id.clone(),
            quantity,
        }
    }

    fn on_remove(&self, id: &ProductId) -> Action {
        Action::RemoveItem { id: id.clone() }
    }
}

/// How a confirmation was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The confirm button or Enter.
    Confirm,
    /// The cancel button or an overlay click.
    Cancel,
    /// The Escape key.
    Escape,
}

impl Decision {
    /// Form value of the decision.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
            Self::Escape => "escape",
        }
    }

    /// Only `Confirm` lets the guarded operation run.
    #[must_use]
    pub fn is_confirmed(self) -> bool {
        self == Self::Confirm
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decision value that is none of `confirm`, `cancel`, `escape`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown decision: {0}")]
pub struct UnknownDecision(pub String);

impl FromStr for Decision {
    type Err = UnknownDecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirm" => Ok(Self::Confirm),
            "cancel" => Ok(Self::Cancel),
            "escape" => Ok(Self::Escape),
            other => Err(UnknownDecision(other.to_owned())),
        }
    }
}
