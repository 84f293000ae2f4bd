//! Opaque product identifiers.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque product key as the product API hands it out.
///
/// The API uses numeric ids, but nothing in the storefront relies on that,
/// so string ids are accepted too. The JSON representation is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// A numeric id, e.g. `1`.
    Number(u64),
    /// Any other id, e.g. `"tent-1"`.
    Text(String),
}

impl ProductId {
    /// Returns `true` for the empty string id, which counts as missing.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Parses form and path input: digits become `Number`, anything else `Text`.
impl FromStr for ProductId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<u64>()
            .map_or_else(|_| Self::Text(s.to_owned()), Self::Number))
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}
