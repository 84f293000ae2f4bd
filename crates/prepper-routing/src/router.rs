//! Route table and dispatch.

use thiserror::Error;

use crate::fragment::RouteState;

/// Path segment that starts a product-detail route.
const PRODUCT_PREFIX: &str = "product";

/// Pattern that registers the catch-all route.
const CATCH_ALL: &str = "*";

/// Route table configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// No catch-all route was registered.
    #[error("router has no fallback route")]
    MissingFallback,

    /// A pattern is neither an absolute path nor a wildcard.
    #[error("invalid route pattern: {0}")]
    InvalidPattern(String),

    /// The same pattern was registered twice.
    #[error("duplicate route pattern: {0}")]
    DuplicateRoute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pattern {
    Exact(String),
    /// `/foo/*`: everything below `/foo/`.
    Prefix(String),
}

impl Pattern {
    fn parse(raw: &str) -> Result<Self, RouterError> {
        let invalid = || RouterError::InvalidPattern(raw.to_owned());
        if !raw.starts_with('/') {
            return Err(invalid());
        }
        match raw.strip_suffix("/*") {
            Some(prefix) if !prefix.contains('*') => Ok(Self::Prefix(format!("{prefix}/"))),
            Some(_) => Err(invalid()),
            None if raw.contains('*') => Err(invalid()),
            None => Ok(Self::Exact(raw.to_owned())),
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(exact) => path == exact,
            Self::Prefix(prefix) => path.starts_with(prefix.as_str()),
        }
    }
}

/// Category and slug taken from `/product/{category}/{slug}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRef {
    /// Category slug.
    pub category: String,
    /// Product slug.
    pub slug: String,
}

/// How a fragment was matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matched {
    /// A registered pattern.
    Route,
    /// The product-detail shape.
    ProductDetail(ProductRef),
    /// Nothing matched.
    Fallback,
}

/// Result of dispatching one fragment.
#[derive(Debug)]
pub struct Dispatch<'a, H> {
    /// The selected handler.
    pub handler: &'a H,
    /// Parsed route state for the handler.
    pub state: RouteState,
    /// How the handler was selected.
    pub matched: Matched,
}

/// Collects routes before the table is frozen.
#[derive(Debug)]
pub struct RouterBuilder<H> {
    routes: Vec<(Pattern, H)>,
    product_detail: Option<H>,
    fallback: Option<H>,
    errors: Vec<RouterError>,
}

impl<H> Default for RouterBuilder<H> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            product_detail: None,
            fallback: None,
            errors: Vec::new(),
        }
    }
}

impl<H> RouterBuilder<H> {
    /// Registers `handler` for `pattern`: an exact path (`/cart`), a prefix
    /// wildcard (`/help/*`), or `*` for the catch-all route.
    #[must_use]
    pub fn route(mut self, pattern: &str, handler: H) -> Self {
        if pattern == CATCH_ALL {
            if self.fallback.replace(handler).is_some() {
                self.errors
                    .push(RouterError::DuplicateRoute(CATCH_ALL.to_owned()));
            }
            return self;
        }
        match Pattern::parse(pattern) {
            Ok(parsed) if self.routes.iter().any(|(p, _)| *p == parsed) => {
                self.errors
                    .push(RouterError::DuplicateRoute(pattern.to_owned()));
            }
            Ok(parsed) => self.routes.push((parsed, handler)),
            Err(e) => self.errors.push(e),
        }
        self
    }

    /// Registers the handler for `/product/{category}/{slug}`. It takes
    /// precedence over every registered pattern.
    #[must_use]
    pub fn product_detail(mut self, handler: H) -> Self {
        self.product_detail = Some(handler);
        self
    }

    /// Freezes the table.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error, or
    /// `RouterError::MissingFallback` if no `*` route was registered.
    pub fn build(self) -> Result<Router<H>, RouterError> {
        if let Some(e) = self.errors.into_iter().next() {
            return Err(e);
        }
        // Exact patterns win over wildcards regardless of registration order.
        let (mut routes, wildcards): (Vec<_>, Vec<_>) = self
            .routes
            .into_iter()
            .partition(|(p, _)| matches!(p, Pattern::Exact(_)));
        routes.extend(wildcards);

        Ok(Router {
            routes,
            product_detail: self.product_detail,
            fallback: self.fallback.ok_or(RouterError::MissingFallback)?,
        })
    }
}

/// Immutable route table.
#[derive(Debug)]
pub struct Router<H> {
    routes: Vec<(Pattern, H)>,
    product_detail: Option<H>,
    fallback: H,
}

impl<H> Router<H> {
    /// Starts a new table.
    #[must_use]
    pub fn builder() -> RouterBuilder<H> {
        RouterBuilder::default()
    }

    /// Selects the handler for `fragment`.
    ///
    /// Product-detail fragments go to the product-detail handler; otherwise
    /// the path (without query) is looked up, falling back to the catch-all.
    pub fn dispatch(&self, fragment: &str) -> Dispatch<'_, H> {
        let state = RouteState::parse(fragment);

        if let (Some(handler), Some(product)) = (&self.product_detail, product_ref(&state)) {
            tracing::debug!(path = state.path(), "dispatching product detail");
            return Dispatch {
                handler,
                state,
                matched: Matched::ProductDetail(product),
            };
        }

        if let Some((_, handler)) = self.routes.iter().find(|(p, _)| p.matches(state.path())) {
            tracing::debug!(path = state.path(), "dispatching route");
            return Dispatch {
                handler,
                state,
                matched: Matched::Route,
            };
        }

        tracing::debug!(path = state.path(), "no route matched, using fallback");
        Dispatch {
            handler: &self.fallback,
            state,
            matched: Matched::Fallback,
        }
    }
}

fn product_ref(state: &RouteState) -> Option<ProductRef> {
    let segments: Vec<_> = state.segments().collect();
    match segments.as_slice() {
        [prefix, category, slug] if *prefix == PRODUCT_PREFIX => Some(ProductRef {
            category: category.to_string(),
            slug: slug.to_string(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storefront() -> Router<&'static str> {
        Router::builder()
            .route("/", "products")
            .route("/login", "login")
            .route("/cart", "cart")
            .route("/help/*", "help")
            .product_detail("product-detail")
            .route("*", "not-found")
            .build()
            .unwrap()
    }

    #[test]
    fn test_product_fragment_dispatches_to_detail_with_params() {
        // Arrange
        let router = storefront();

        // Act
        let dispatch = router.dispatch("#/product/camping/tent-1");

        // Assert
        assert_eq!(*dispatch.handler, "product-detail");
        assert_eq!(
            dispatch.matched,
            Matched::ProductDetail(ProductRef {
                category: "camping".to_owned(),
                slug: "tent-1".to_owned(),
            })
        );
    }

    #[test]
    fn test_encoded_product_fragment_yields_decoded_params() {
        let router = storefront();

        let dispatch = router.dispatch("/product/mad/%C3%B8llebr%C3%B8d");

        assert_eq!(
            dispatch.matched,
            Matched::ProductDetail(ProductRef {
                category: "mad".to_owned(),
                slug: "øllebrød".to_owned(),
            })
        );
    }

    #[test]
    fn test_product_detail_wins_over_static_map() {
        let router: Router<&str> = Router::builder()
            .route("/product/camping/tent-1", "static")
            .product_detail("product-detail")
            .route("*", "not-found")
            .build()
            .unwrap();

        assert_eq!(*router.dispatch("/product/camping/tent-1").handler, "product-detail");
    }

    #[test]
    fn test_incomplete_product_fragment_is_not_a_detail_route() {
        let router = storefront();

        assert_eq!(*router.dispatch("#/product/camping").handler, "not-found");
        assert_eq!(*router.dispatch("#/product/a/b/c").handler, "not-found");
    }

    #[test]
    fn test_unknown_fragment_dispatches_to_fallback() {
        let router = storefront();
        let dispatch = router.dispatch("#/unknown");

        assert_eq!(*dispatch.handler, "not-found");
        assert_eq!(dispatch.matched, Matched::Fallback);
        assert_eq!(dispatch.state.path(), "/unknown");
    }

    #[test]
    fn test_empty_fragment_behaves_as_root() {
        let router = storefront();

        assert_eq!(*router.dispatch("").handler, "products");
        assert_eq!(*router.dispatch("#").handler, "products");
        assert_eq!(*router.dispatch("#/").handler, "products");
    }

    #[test]
    fn test_query_string_is_ignored_for_lookup_but_kept_in_state() {
        let router = storefront();
        let dispatch = router.dispatch("#/?category=vand-og-vandrensning");

        assert_eq!(*dispatch.handler, "products");
        assert_eq!(dispatch.state.query("category"), Some("vand-og-vandrensning"));
    }

    #[test]
    fn test_exact_route_beats_wildcard_registered_first() {
        let router: Router<&str> = Router::builder()
            .route("/help/*", "help")
            .route("/help/contact", "contact")
            .route("*", "not-found")
            .build()
            .unwrap();

        assert_eq!(*router.dispatch("/help/contact").handler, "contact");
        assert_eq!(*router.dispatch("/help/faq").handler, "help");
        assert_eq!(*router.dispatch("/help").handler, "not-found");
    }

    #[test]
    fn test_without_detail_handler_product_paths_use_static_map() {
        let router: Router<&str> = Router::builder()
            .route("*", "not-found")
            .build()
            .unwrap();

        assert_eq!(*router.dispatch("/product/a/b").handler, "not-found");
    }

    #[test]
    fn test_build_requires_fallback() {
        let result = Router::builder().route("/", "home").build();
        assert_eq!(result.unwrap_err(), RouterError::MissingFallback);
    }

    #[test]
    fn test_build_rejects_bad_and_duplicate_patterns() {
        let bad = Router::builder()
            .route("cart", "cart")
            .route("*", "fallback")
            .build();
        assert_eq!(bad.unwrap_err(), RouterError::InvalidPattern("cart".to_owned()));

        let mid_wildcard = Router::builder()
            .route("/a/*/b", "x")
            .route("*", "fallback")
            .build();
        assert_eq!(
            mid_wildcard.unwrap_err(),
            RouterError::InvalidPattern("/a/*/b".to_owned())
        );

        let duplicate = Router::builder()
            .route("/cart", "a")
            .route("/cart", "b")
            .route("*", "fallback")
            .build();
        assert_eq!(
            duplicate.unwrap_err(),
            RouterError::DuplicateRoute("/cart".to_owned())
        );
    }
}
