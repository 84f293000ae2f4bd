//! Page chrome: header, navigation bar, main area, footer and notices.

use prepper_cart::domain::aggregates::CartSummary;
use prepper_catalog::application::display::NavItem;

use crate::node::{Node, div, el, heading, link, paragraph};

/// Severity of a one-shot notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Something worked.
    Success,
    /// Something failed.
    Error,
    /// Neutral information.
    Info,
}

/// A message shown once at the top of the next page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// User-facing text.
    pub message: String,
}

impl Notice {
    /// A success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// An informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

/// Everything the layout wraps around a page's content.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Page title, also the `main` heading.
    pub title: String,
    /// The page's own content.
    pub content: Node,
    /// Category links; empty when the category fetch failed.
    pub nav: Vec<NavItem>,
    /// Whether a session token is stored.
    pub logged_in: bool,
    /// Cart totals for the badge.
    pub cart: CartSummary,
    /// Mini cart shown under the cart link.
    pub mini_cart: Node,
    /// One-shot notices.
    pub notices: Vec<Notice>,
    /// An open confirmation dialog.
    pub modal: Option<Node>,
}

impl Layout {
    /// Assembles header, notices, navigation, main, footer and modal.
    #[must_use]
    pub fn into_node(self) -> Node {
        let mut nodes = vec![
            header_view(self.logged_in, &self.cart, self.mini_cart),
            notices_view(&self.notices),
            nav_bar_view(&self.nav),
            main_view(&self.title, self.content),
            footer_view(),
        ];
        nodes.extend(self.modal);
        Node::Fragment(nodes)
    }
}

/// Site header with the login or logout link and the cart badge.
#[must_use]
pub fn header_view(logged_in: bool, cart: &CartSummary, mini_cart: Node) -> Node {
    let account = if logged_in {
        link("/logout", "Log ud", ACCOUNT_LINK_CLASS)
    } else {
        link("/login", "Login", ACCOUNT_LINK_CLASS)
    };

    let badge = el("span")
        .class("ml-1 bg-red-600 text-white text-xs rounded-full px-2 py-0.5")
        .attr("data-cart-badge", "")
        .attr_if(cart.total_items == 0, "hidden", "")
        .text(cart.total_items.to_string());

    let cart_menu = el("details")
        .class("relative")
        .child(
            el("summary")
                .class("cursor-pointer list-none px-4 py-2")
                .child(link("/cart", "Kurv", "font-medium"))
                .child(badge),
        )
        .child(div("absolute right-0 mt-2 z-40 text-gray-800").child(mini_cart));

    el("header")
        .class("bg-slate-700 p-4 text-white flex justify-between items-center")
        .child(
            el("h1")
                .class("text-2xl font-bold")
                .child(link("/", "Sgt. Prepper", "")),
        )
        .child(
            el("nav")
                .class("flex items-center gap-4")
                .child(cart_menu)
                .child(account),
        )
        .into()
}

const ACCOUNT_LINK_CLASS: &str =
    "bg-sky-600 hover:bg-sky-500 px-4 py-2 rounded-lg font-medium transition-colors duration-200";

/// Category navigation bar.
#[must_use]
pub fn nav_bar_view(items: &[NavItem]) -> Node {
    let entries = items.iter().map(|item| {
        let class = if item.active {
            "block p-4 text-white bg-sky-600 border-b-2 border-white font-semibold"
        } else {
            "block p-4 text-white hover:bg-sky-800 transition-colors"
        };
        el("li").child(
            link(item.url.clone(), item.title.clone(), class)
                .attr_if(item.active, "aria-current", "page"),
        )
    });

    el("nav")
        .class("bg-sky-950")
        .child(el("ul").class("flex").children(entries))
        .into()
}

/// The main area: title heading followed by content.
#[must_use]
pub fn main_view(title: &str, content: Node) -> Node {
    el("main")
        .class("p-4 min-h-60")
        .child(heading(1, title, "text-2xl font-bold mb-4"))
        .child(content)
        .into()
}

/// Site footer.
#[must_use]
pub fn footer_view() -> Node {
    el("footer")
        .class("h-[170px] p-4 bg-center bg-no-repeat")
        .into()
}

/// One-shot notices. Renders nothing when there are none.
#[must_use]
pub fn notices_view(notices: &[Notice]) -> Node {
    if notices.is_empty() {
        return Node::empty();
    }
    div("fixed top-4 right-4 z-50 space-y-2")
        .children(notices.iter().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "p-4 rounded-md shadow-lg bg-green-500 text-white",
                NoticeKind::Error => "p-4 rounded-md shadow-lg bg-red-500 text-white",
                NoticeKind::Info => "p-4 rounded-md shadow-lg bg-blue-500 text-white",
            };
            paragraph(class, notice.message.clone()).attr("role", "status")
        }))
        .into()
}

/// Content of an error page.
#[must_use]
pub fn error_view(message: &str) -> Node {
    div("text-center py-12")
        .child(paragraph("text-red-600 text-lg mb-6", message))
        .child(link(
            "/",
            "← Tilbage til forsiden",
            "inline-block bg-gray-500 text-white px-4 py-2 rounded hover:bg-gray-600",
        ))
        .into()
}
