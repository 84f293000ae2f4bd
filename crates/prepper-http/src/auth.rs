//! `AuthApi` over HTTP.

use async_trait::async_trait;
use prepper_auth::api::AuthApi;
use prepper_auth::domain::credentials::{Credentials, LoginResponse};
use prepper_core::error::DomainError;

use crate::client::{ApiClient, decode};

/// Posts credentials to the login endpoint.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    api: ApiClient,
}

impl HttpAuthApi {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `base_url` is not an absolute
    /// URL, or `DomainError::Network` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        Ok(Self {
            api: ApiClient::new(base_url)?,
        })
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, DomainError> {
        let url = self.api.url(&["login"]);
        let response = self.api.post_json(&["login"], credentials).await?;
        let status = response.status();

        if status.is_success() {
            return decode(response, &url).await;
        }
        if status.is_client_error() {
            // Rejections come back as 4xx, usually with a `message` body.
            tracing::debug!(%status, "login endpoint rejected credentials");
            let body: LoginResponse = decode(response, &url).await.unwrap_or_default();
            return Ok(LoginResponse {
                token: None,
                message: body.message,
            });
        }
        Err(DomainError::Network(format!("POST {url} returned {status}")))
    }
}
