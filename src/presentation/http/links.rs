// src/presentation/http/links.rs
use crate::application::ports::links::PageLinks;

pub const CURSOR_PARAM: &str = "cursor";

/// Absolute URL of the current request, used to build pagination links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    scheme: &'static str,
    authority: String,
    path: String,
    query: Vec<(String, String)>,
}

impl RequestUrl {
    pub fn new(
        secure: bool,
        authority: impl Into<String>,
        path: impl Into<String>,
        query: Vec<(String, String)>,
    ) -> Self {
        Self {
            scheme: if secure { "https" } else { "http" },
            authority: authority.into(),
            path: path.into(),
            query,
        }
    }

    /// Same URL with `key` set to `value`, replacing earlier values. The
    /// query string is re-encoded sorted by key.
    pub fn with_param(&self, key: &str, value: &str) -> String {
        let mut pairs: Vec<(&str, &str)> = self
            .query
            .iter()
            .filter(|(name, _)| name != key)
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        pairs.push((key, value));
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        // plain string pairs cannot fail to serialize
        let query = serde_urlencoded::to_string(&pairs).unwrap_or_default();
        format!("{}://{}{}?{}", self.scheme, self.authority, self.path, query)
    }
}

impl PageLinks for RequestUrl {
    fn page_url(&self, cursor_token: &str) -> String {
        self.with_param(CURSOR_PARAM, cursor_token)
    }
}
