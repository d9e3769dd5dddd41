//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use devwant_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest};

/// Query parameters for paginated endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 10, max: 100).
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PaginationParams {
    /// Converts to a `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}

/// Board page query: pagination plus an optional search term.
///
/// Spelled out rather than flattened; flattened query structs lose their
/// numeric types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardPageParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    /// Matched against post titles and contents.
    pub search: Option<String>,
}

impl BoardPageParams {
    /// Splits into the page request and the search term.
    pub fn into_parts(self) -> (PageRequest, Option<String>) {
        (PageRequest::new(self.page, self.limit), self.search)
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use axum::http::Uri;

    use devwant_core::types::pagination::MAX_PAGE_SIZE;

    use super::*;

    #[test]
    fn test_defaults() {
        let uri: Uri = "/api/boards/free".parse().unwrap();
        let Query(params) = Query::<PaginationParams>::try_from_uri(&uri).unwrap();
        let page = params.into_page_request();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let params = PaginationParams {
            page: 0,
            limit: 5000,
        };
        let page = params.into_page_request();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_board_page_params_parse_search() {
        let uri: Uri = "/api/boards/free?page=3&limit=20&search=rust".parse().unwrap();
        let Query(params) = Query::<BoardPageParams>::try_from_uri(&uri).unwrap();
        let (page, search) = params.into_parts();
        assert_eq!(page.page, 3);
        assert_eq!(page.page_size, 20);
        assert_eq!(search.as_deref(), Some("rust"));
    }
}
