use serde::{Deserialize, Deserializer, Serialize};

/// Items requested per page on listing views.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Accepts `page=3`; treats absent, malformed, or zero values as unset so a
/// mangled URL degrades to the first page instead of a 400.
fn lenient_page<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&page| page >= 1))
}

/// The `?search=...&page=...` query parameters of a listing URL.
///
/// Field order is the serialization order, which keeps the encode/decode
/// cycle byte-stable for URLs this layer produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListingParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_page",
        skip_serializing_if = "Option::is_none"
    )]
    pub page: Option<usize>,
}

/// What a listing view is currently asking the catalog for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: usize,
    pub search_text: String,
    pub page_size: usize,
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            search_text: String::new(),
            page_size,
        }
    }

    /// Seeds state from incoming URL parameters; invalid or absent values
    /// fall back to page 1 and an empty search.
    pub fn from_params(params: &ListingParams, page_size: usize) -> Self {
        Self {
            page: params.page.unwrap_or(1),
            search_text: params
                .search
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            page_size,
        }
    }

    pub fn to_params(&self) -> ListingParams {
        ListingParams {
            search: (!self.search_text.is_empty()).then(|| self.search_text.clone()),
            page: Some(self.page),
        }
    }

    /// Serializes to the visible URL query, e.g. `?search=history&page=2`.
    pub fn to_query_string(&self) -> String {
        match serde_html_form::to_string(self.to_params()) {
            Ok(encoded) => format!("?{encoded}"),
            Err(err) => {
                log::error!("Failed to encode listing query: {err}");
                String::from("?page=1")
            }
        }
    }

    /// Commits a search term. A changed term resets `page` to 1 in the same
    /// transition; an unchanged term is a no-op. Returns whether the state
    /// changed.
    pub fn commit_search(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term == self.search_text {
            return false;
        }
        self.search_text = term.to_string();
        self.page = 1;
        true
    }

    /// Commits a page selection; never debounced. Returns whether the state
    /// changed.
    pub fn commit_page(&mut self, page: usize) -> bool {
        if page == self.page || page < 1 {
            return false;
        }
        self.page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> ListingParams {
        serde_html_form::from_str(query).expect("valid query string")
    }

    #[test]
    fn test_url_round_trip() {
        let state = QueryState::from_params(&parse("search=history&page=2"), DEFAULT_PAGE_SIZE);
        assert_eq!(state.page, 2);
        assert_eq!(state.search_text, "history");
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(state.to_query_string(), "?search=history&page=2");
    }

    #[test]
    fn test_empty_search_is_omitted() {
        let state = QueryState::new(DEFAULT_PAGE_SIZE);
        assert_eq!(state.to_query_string(), "?page=1");
    }

    #[test]
    fn test_invalid_page_defaults_to_first() {
        for query in ["page=abc", "page=0", "page=-2", ""] {
            let state = QueryState::from_params(&parse(query), DEFAULT_PAGE_SIZE);
            assert_eq!(state.page, 1, "query {query:?}");
        }
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut state = QueryState::from_params(&parse("search=war&page=5"), DEFAULT_PAGE_SIZE);
        assert!(state.commit_search("peace"));
        assert_eq!(state.page, 1);
        assert_eq!(state.search_text, "peace");
    }

    #[test]
    fn test_clearing_search_resets_page() {
        let mut state = QueryState::from_params(&parse("search=war&page=5"), DEFAULT_PAGE_SIZE);
        assert!(state.commit_search(""));
        assert_eq!(state.page, 1);
        assert_eq!(state.search_text, "");
    }

    #[test]
    fn test_unchanged_search_is_noop() {
        let mut state = QueryState::from_params(&parse("search=war&page=5"), DEFAULT_PAGE_SIZE);
        assert!(!state.commit_search("  war  "));
        assert_eq!(state.page, 5);
    }

    #[test]
    fn test_commit_page() {
        let mut state = QueryState::new(DEFAULT_PAGE_SIZE);
        assert!(state.commit_page(3));
        assert_eq!(state.page, 3);
        assert!(!state.commit_page(3));
        assert!(!state.commit_page(0));
    }

    #[test]
    fn test_encode_decode_idempotent() {
        let state = QueryState {
            page: 4,
            search_text: "two words".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        };
        let encoded = state.to_query_string();
        let reparsed = QueryState::from_params(
            &parse(encoded.trim_start_matches('?')),
            DEFAULT_PAGE_SIZE,
        );
        assert_eq!(reparsed, state);
        assert_eq!(reparsed.to_query_string(), encoded);
    }
}
