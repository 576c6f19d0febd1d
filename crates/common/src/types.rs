use serde::{Deserialize, Serialize};

/// User-typed search text, matched case-insensitively as a substring.
///
/// Keeps both the raw input (for echoing back into the search box) and a
/// lowercased needle so repeated matching over a collection does not
/// re-normalize the query for every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Creates a query from user input.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// Returns the query exactly as typed.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if the query is empty and therefore matches everything.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns true if `haystack` contains the query, ignoring case.
    pub fn matches(&self, haystack: &str) -> bool {
        self.needle.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }

    /// Returns true if any of the given fields contains the query.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        self.needle.is_empty() || fields.into_iter().any(|field| self.matches(field))
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<String> for SearchQuery {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<SearchQuery> for String {
    fn from(query: SearchQuery) -> Self {
        query.raw
    }
}
