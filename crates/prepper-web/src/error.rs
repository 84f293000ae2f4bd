//! Sgt. Prepper: server error types.

use axum::http::StatusCode;
use prepper_core::error::DomainError;
use prepper_routing::RouterError;
use thiserror::Error;

use crate::page::Page;

/// Startup errors for the storefront server.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The page route table is inconsistent.
    #[error("route table error: {0}")]
    Routing(#[from] RouterError),

    /// A remote API client could not be set up.
    #[error("API client error: {0}")]
    Client(#[from] DomainError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// A controller failure, rendered as an error page instead of propagating.
#[derive(Debug, Error)]
#[error("{title}: {source}")]
pub struct PageError {
    /// Response status.
    pub status: StatusCode,
    /// Page title.
    pub title: String,
    /// Message shown on the page.
    pub message: String,
    /// What went wrong.
    #[source]
    pub source: DomainError,
}

impl From<DomainError> for PageError {
    fn from(source: DomainError) -> Self {
        let (status, title, message) = match &source {
            DomainError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                "Siden blev ikke fundet",
                "Det du leder efter findes ikke",
            ),
            DomainError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                "Ugyldig forespørgsel",
                "Forespørgslen kunne ikke behandles",
            ),
            DomainError::Network(_) => (
                StatusCode::BAD_GATEWAY,
                "Fejl",
                "Der opstod en fejl ved indlæsning af siden",
            ),
            DomainError::Persistence(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Fejl",
                "Der opstod en intern fejl",
            ),
        };
        Self {
            status,
            title: title.to_owned(),
            message: message.to_owned(),
            source,
        }
    }
}

impl PageError {
    /// Replaces the default title and message for not-found errors.
    #[must_use]
    pub fn when_not_found(mut self, title: &str, message: &str) -> Self {
        if matches!(self.source, DomainError::NotFound(_)) {
            title.clone_into(&mut self.title);
            message.clone_into(&mut self.message);
        }
        self
    }

    /// Replaces the default message for network errors.
    #[must_use]
    pub fn when_unreachable(mut self, message: &str) -> Self {
        if matches!(self.source, DomainError::Network(_)) {
            message.clone_into(&mut self.message);
        }
        self
    }

    /// The error page.
    #[must_use]
    pub fn into_page(self) -> Page {
        if self.status.is_server_error() {
            tracing::error!(error = %self.source, status = %self.status, "page failed");
        } else {
            tracing::warn!(error = %self.source, status = %self.status, "page failed");
        }
        Page::error(self.status, &self.title, &self.message)
    }
}
