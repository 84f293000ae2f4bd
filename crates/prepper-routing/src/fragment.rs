//! Parsed navigation fragments.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// The route state a controller reads instead of a global location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteState {
    path: String,
    query: Vec<(String, String)>,
}

impl RouteState {
    /// Parses a fragment such as `#/?category=tents`.
    ///
    /// The leading `#` is optional, an empty fragment is `/`, and a missing
    /// leading slash is added. Query values are percent-decoded; the path is
    /// kept as given and decoded per segment by [`RouteState::segments`].
    #[must_use]
    pub fn parse(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let (path, query) = fragment.split_once('?').unwrap_or((fragment, ""));

        let path = if path.is_empty() {
            "/".to_owned()
        } else if path.starts_with('/') {
            path.to_owned()
        } else {
            format!("/{path}")
        };
        let query = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Self { path, query }
    }

    /// The path part, always starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The first value of query parameter `key`.
    #[must_use]
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like `query`, but treats an empty value as absent.
    #[must_use]
    pub fn non_empty_query(&self, key: &str) -> Option<&str> {
        self.query(key).filter(|v| !v.is_empty())
    }

    /// Non-empty path segments, percent-decoded. An encoded `/` stays inside
    /// its segment; invalid UTF-8 is replaced.
    pub fn segments(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| percent_decode_str(s).decode_utf8_lossy())
    }

    /// Renders the state back into a fragment, without the `#`.
    #[must_use]
    pub fn to_fragment(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        format!("{}?{query}", self.path)
    }
}
