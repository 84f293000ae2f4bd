//! Login request and response records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Username and password as submitted by the login form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

impl Credentials {
    /// Creates credentials, trimming whitespace around the username.
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_owned(),
            password: password.to_owned(),
        }
    }

    /// Returns `true` if either field is empty.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.username.is_empty() || self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body returned by the login endpoint.
///
/// Success is signalled only by a non-empty `token`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Bearer token on success.
    #[serde(default)]
    pub token: Option<String>,
    /// Server message, usually present on failure.
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// The token, if the response carries a non-empty one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_hides_password() {
        let credentials = Credentials::new("sgt", "hunter2");

        let printed = format!("{credentials:?}");

        assert!(printed.contains("sgt"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_incomplete_credentials() {
        assert!(Credentials::new("  ", "secret").is_incomplete());
        assert!(Credentials::new("sgt", "").is_incomplete());
        assert!(!Credentials::new(" sgt ", "secret").is_incomplete());
        assert_eq!(Credentials::new(" sgt ", "secret").username, "sgt");
    }

    #[test]
    fn test_serializes_as_login_body() {
        let body = serde_json::to_value(Credentials::new("sgt", "secret")).unwrap();
        assert_eq!(body, serde_json::json!({"username": "sgt", "password": "secret"}));
    }

    #[test]
    fn test_response_token_requires_non_empty_value() {
        let ok: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        let empty: LoginResponse = serde_json::from_str(r#"{"token":""}"#).unwrap();
        let rejected: LoginResponse =
            serde_json::from_str(r#"{"message":"Forkert login"}"#).unwrap();

        assert_eq!(ok.token(), Some("abc"));
        assert_eq!(empty.token(), None);
        assert_eq!(rejected.token(), None);
        assert_eq!(rejected.message.as_deref(), Some("Forkert login"));
    }
}
