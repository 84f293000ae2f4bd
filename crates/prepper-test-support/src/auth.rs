//! Test authentication endpoint.

use std::sync::Mutex;

use async_trait::async_trait;
use prepper_auth::api::AuthApi;
use prepper_auth::domain::credentials::{Credentials, LoginResponse};
use prepper_core::error::DomainError;

#[derive(Debug, Clone)]
enum Reply {
    Token(String),
    Rejected(Option<String>),
    Unreachable,
}

/// An `AuthApi` with a fixed reply that records submitted usernames.
#[derive(Debug)]
pub struct StubAuthApi {
    reply: Reply,
    usernames: Mutex<Vec<String>>,
}

impl StubAuthApi {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            usernames: Mutex::new(Vec::new()),
        }
    }

    /// Issues `token` for any credentials.
    #[must_use]
    pub fn accepting(token: &str) -> Self {
        Self::with_reply(Reply::Token(token.to_owned()))
    }

    /// Answers without a token, optionally with a server message.
    #[must_use]
    pub fn rejecting(message: Option<&str>) -> Self {
        Self::with_reply(Reply::Rejected(message.map(str::to_owned)))
    }

    /// Fails every call with `DomainError::Network`.
    #[must_use]
    pub fn unreachable() -> Self {
        Self::with_reply(Reply::Unreachable)
    }

    /// Returns the usernames submitted so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn usernames(&self) -> Vec<String> {
        self.usernames.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthApi for StubAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, DomainError> {
        self.usernames
            .lock()
            .unwrap()
            .push(credentials.username.clone());
        match &self.reply {
            Reply::Token(token) => Ok(LoginResponse {
                token: Some(token.clone()),
                message: None,
            }),
            Reply::Rejected(message) => Ok(LoginResponse {
                token: None,
                message: message.clone(),
            }),
            Reply::Unreachable => Err(DomainError::Network("auth endpoint unreachable".into())),
        }
    }
}
