//! Startup configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Root of the product and login API.
    pub api_url: String,
    /// Host that serves product images and the stylesheet.
    pub asset_url: String,
    /// File the cart is persisted to.
    pub cart_file: PathBuf,
    /// Category featured on the home page.
    pub default_category: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 3000,
            api_url: "http://localhost:4000/api".to_owned(),
            asset_url: "http://localhost:4000".to_owned(),
            cart_file: PathBuf::from(".prepper/cart.json"),
            default_category: "vand-og-vandrensning".to_owned(),
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT`, `PREPPER_API_URL`, `PREPPER_ASSET_URL`,
    /// `PREPPER_CART_FILE` and `PREPPER_DEFAULT_CATEGORY`, falling back to
    /// the defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => defaults.port,
        };
        let default_category = non_empty("PREPPER_DEFAULT_CATEGORY")
            .unwrap_or(defaults.default_category);
        if default_category.contains('/') {
            return Err(AppError::Config(
                "PREPPER_DEFAULT_CATEGORY must be a single slug".to_owned(),
            ));
        }

        Ok(Self {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port,
            api_url: non_empty("PREPPER_API_URL").unwrap_or(defaults.api_url),
            asset_url: non_empty("PREPPER_ASSET_URL")
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or(defaults.asset_url),
            cart_file: non_empty("PREPPER_CART_FILE").map_or(defaults.cart_file, PathBuf::from),
            default_category,
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// URL of the stylesheet on the asset host.
    #[must_use]
    pub fn stylesheet_url(&self) -> String {
        format!("{}/css/style.css", self.asset_url)
    }
}
