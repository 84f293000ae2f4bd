//! Shared application state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use prepper_auth::api::AuthApi;
use prepper_auth::application::token_store::TokenStore;
use prepper_cart::application::cart_store::CartStore;
use prepper_catalog::api::CatalogApi;
use prepper_core::clock::Clock;
use prepper_core::storage::KeyValueStore;
use prepper_routing::Router;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::listener::TracingCartListener;
use crate::page::PageKind;
use crate::routes::pages;
use crate::session::Session;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Startup configuration.
    pub config: Arc<AppConfig>,
    /// Product API.
    pub catalog: Arc<dyn CatalogApi>,
    /// Login endpoint.
    pub auth: Arc<dyn AuthApi>,
    /// The visitor's cart. Never held across an await.
    pub cart: Arc<Mutex<CartStore>>,
    /// Session-scoped bearer token.
    pub tokens: TokenStore,
    /// Fragment route table.
    pub pages: Arc<Router<PageKind>>,
    /// Notices, login failures and confirmations.
    pub session: Arc<Session>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Ports the state is assembled from.
pub struct Services {
    /// Product API.
    pub catalog: Arc<dyn CatalogApi>,
    /// Login endpoint.
    pub auth: Arc<dyn AuthApi>,
    /// Durable store for the cart.
    pub cart_storage: Arc<dyn KeyValueStore>,
    /// Session-scoped store for the token.
    pub session_storage: Arc<dyn KeyValueStore>,
    /// Time source for cart timestamps.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Loads the cart and builds the route table.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Routing` if the route table is inconsistent.
    pub fn new(config: AppConfig, services: Services) -> Result<Self, AppError> {
        let mut cart = CartStore::load(services.cart_storage, services.clock);
        cart.subscribe(Box::new(TracingCartListener));
        tracing::info!(
            total_items = cart.summary().total_items,
            "cart loaded"
        );

        Ok(Self {
            config: Arc::new(config),
            catalog: services.catalog,
            auth: services.auth,
            cart: Arc::new(Mutex::new(cart)),
            tokens: TokenStore::new(services.session_storage),
            pages: Arc::new(pages::route_table()?),
            session: Arc::new(Session::default()),
        })
    }

    /// Locks the cart store, recovering from a poisoned lock.
    pub fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
