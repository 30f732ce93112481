use crate::state::request::Request;

/// A parsed sidebar filter: lowercased, whitespace-separated tokens.
///
/// A request matches when every token is a substring of its lowercased
/// `"<method> ::: <name>"` text. No tokens matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    tokens: Vec<String>,
}

impl RequestFilter {
    pub fn parse(filter: &str) -> Self {
        let tokens = filter
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    pub fn from_active(active_filter: Option<&str>) -> Self {
        active_filter.map(Self::parse).unwrap_or_default()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn matches(&self, request: &Request) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        let haystack = request.match_text().to_lowercase();
        self.tokens.iter().all(|t| haystack.contains(t.as_str()))
    }

    /// Requests that pass the filter, in input order.
    pub fn apply<'a>(&self, requests: &'a [Request]) -> Vec<&'a Request> {
        requests.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Whether a filter value counts as active. Any non-empty string does,
/// including one made only of spaces.
pub fn is_active(active_filter: Option<&str>) -> bool {
    active_filter.is_some_and(|f| !f.is_empty())
}
