//! Shared request plumbing.

use std::time::Duration;

use prepper_core::error::DomainError;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

/// Upper bound for a single API call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A JSON API rooted at a base URL such as `http://localhost:4000/api`.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub(crate) fn new(base_url: &str) -> Result<Self, DomainError> {
        let base = Url::parse(base_url)
            .map_err(|e| DomainError::Validation(format!("invalid API url {base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(DomainError::Validation(format!(
                "invalid API url {base_url}: not a base url"
            )));
        }
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, base })
    }

    /// Appends percent-encoded `segments` to the base path.
    pub(crate) fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `GET`s `segments` and decodes the body. A 404, or a success whose
    /// body is empty or `null`, is `DomainError::NotFound` naming `what`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        what: &str,
    ) -> Result<T, DomainError> {
        let url = self.url(segments);
        tracing::debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await.map_err(network(&url))?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(DomainError::NotFound(what.to_owned())),
            status if status.is_success() => {
                let body = response.bytes().await.map_err(network(&url))?;
                if is_absent(&body) {
                    tracing::debug!(%url, "empty payload");
                    return Err(DomainError::NotFound(what.to_owned()));
                }
                serde_json::from_slice(&body).map_err(|e| {
                    DomainError::Network(format!("unreadable response from {url}: {e}"))
                })
            }
            status => Err(DomainError::Network(format!("GET {url} returned {status}"))),
        }
    }

    /// `POST`s `body` as JSON to `segments`.
    pub(crate) async fn post_json<B: serde::Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Response, DomainError> {
        let url = self.url(segments);
        tracing::debug!(%url, "POST");
        self.client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(network(&url))
    }
}

fn is_absent(body: &[u8]) -> bool {
    matches!(body.trim_ascii(), b"" | b"null")
}

pub(crate) fn network(url: &Url) -> impl FnOnce(reqwest::Error) -> DomainError + '_ {
    move |e| DomainError::Network(format!("request to {url} failed: {e}"))
}

pub(crate) async fn decode<T: DeserializeOwned>(
    response: Response,
    url: &Url,
) -> Result<T, DomainError> {
    response
        .json()
        .await
        .map_err(|e| DomainError::Network(format!("unreadable response from {url}: {e}")))
}
