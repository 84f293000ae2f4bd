//! Controller results.

use axum::http::StatusCode;
use prepper_views::Node;
use prepper_views::layout::error_view;

/// Page handlers registered in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// `/`: home, or a product listing with `?category=`.
    Storefront,
    /// `/product/{category}/{slug}`.
    ProductDetail,
    /// `/cart`.
    Cart,
    /// `/login`.
    Login,
    /// `/logout`.
    Logout,
    /// Anything else.
    NotFound,
}

/// Content for the layout to wrap.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Document and `main` title.
    pub title: String,
    /// Response status.
    pub status: StatusCode,
    /// Page body.
    pub body: Node,
    /// Category highlighted in the navigation bar.
    pub active_category: Option<String>,
}

/// What a controller produced.
#[derive(Debug, Clone)]
pub enum Page {
    /// Render `PageContent` inside the layout.
    Content(PageContent),
    /// Send the browser elsewhere.
    Redirect(String),
}

impl Page {
    /// A `200 OK` page.
    #[must_use]
    pub fn content(title: impl Into<String>, body: Node) -> Self {
        Self::Content(PageContent {
            title: title.into(),
            status: StatusCode::OK,
            body,
            active_category: None,
        })
    }

    /// An error page showing `message`.
    #[must_use]
    pub fn error(status: StatusCode, title: &str, message: &str) -> Self {
        Self::Content(PageContent {
            title: title.to_owned(),
            status,
            body: error_view(message),
            active_category: None,
        })
    }

    /// A redirect to `to`.
    #[must_use]
    pub fn redirect(to: impl Into<String>) -> Self {
        Self::Redirect(to.into())
    }

    /// Highlights `category` in the navigation bar.
    #[must_use]
    pub fn with_active_category(mut self, category: &str) -> Self {
        if let Self::Content(content) = &mut self {
            content.active_category = Some(category.to_owned());
        }
        self
    }
}
