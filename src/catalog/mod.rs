//! Read-only client for the catalog REST API.
//!
//! Reader traits keep the services testable against mocks; the production
//! implementation is [`rest::RestCatalog`]. Both observed response shapes
//! (envelope with `count`/`results`/`next`/`previous`, or a bare array) are
//! normalized into [`Page`] here so downstream code never re-checks shape.

use async_trait::async_trait;
use serde::Serialize;

use crate::catalog::errors::CatalogResult;
use crate::domain::book::Book;
use crate::domain::show::Show;
use crate::domain::station::Station;
use crate::domain::topic::Topic;

pub mod errors;
pub mod rest;

/// One page of API results in canonical form.
///
/// `count` is the total number of matching items across all pages, not the
/// length of `results`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    pub count: usize,
    pub results: Vec<T>,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            count: 0,
            results: Vec::new(),
            has_next: false,
            has_previous: false,
        }
    }

    /// Number of pages at the given page size; 0 when there are no matches.
    pub fn total_pages(&self, page_size: usize) -> usize {
        self.count.div_ceil(page_size)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filters for `GET /books/`.
#[derive(Debug, Clone, Default)]
pub struct BookListQuery {
    pub search: Option<String>,
    pub show_id: Option<i64>,
    pub station_id: Option<String>,
    pub topic_slug: Option<String>,
    pub pagination: Option<Pagination>,
}

impl BookListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn show(mut self, show_id: i64) -> Self {
        self.show_id = Some(show_id);
        self
    }

    pub fn station(mut self, station_id: impl Into<String>) -> Self {
        self.station_id = Some(station_id.into());
        self
    }

    pub fn topic(mut self, slug: impl Into<String>) -> Self {
        self.topic_slug = Some(slug.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    /// Query-string pairs, omitting empty and absent parameters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(p) = &self.pagination {
            params.push(("page", p.page.to_string()));
            params.push(("page_size", p.per_page.to_string()));
        }
        if let Some(term) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search", term.to_string()));
        }
        if let Some(id) = self.show_id {
            params.push(("brand", id.to_string()));
        }
        if let Some(id) = self.station_id.as_deref().filter(|s| !s.is_empty()) {
            params.push(("station_id", id.to_string()));
        }
        if let Some(slug) = self.topic_slug.as_deref().filter(|s| !s.is_empty()) {
            params.push(("topic", slug.to_string()));
        }
        params
    }
}

/// Filters for `GET /brands/`.
#[derive(Debug, Clone, Default)]
pub struct ShowListQuery {
    pub search: Option<String>,
    pub station_id: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ShowListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn station(mut self, station_id: impl Into<String>) -> Self {
        self.station_id = Some(station_id.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(p) = &self.pagination {
            params.push(("page", p.page.to_string()));
            params.push(("page_size", p.per_page.to_string()));
        }
        if let Some(term) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search", term.to_string()));
        }
        if let Some(id) = self.station_id.as_deref().filter(|s| !s.is_empty()) {
            params.push(("station_id", id.to_string()));
        }
        params
    }
}

#[async_trait]
pub trait BookReader {
    async fn list_books(&self, query: BookListQuery) -> CatalogResult<Page<Book>>;
    async fn get_book_by_id(&self, id: i64) -> CatalogResult<Option<Book>>;
}

#[async_trait]
pub trait ShowReader {
    async fn list_shows(&self, query: ShowListQuery) -> CatalogResult<Page<Show>>;
    async fn get_show_by_id(&self, id: i64) -> CatalogResult<Option<Show>>;
}

#[async_trait]
pub trait StationReader {
    async fn list_stations(&self) -> CatalogResult<Page<Station>>;
    async fn get_station(&self, station_id: &str) -> CatalogResult<Option<Station>>;
}

#[async_trait]
pub trait TopicReader {
    async fn list_topics(&self) -> CatalogResult<Page<Topic>>;
    async fn get_topic_by_slug(&self, slug: &str) -> CatalogResult<Option<Topic>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_query_params_omit_empty() {
        let params = BookListQuery::new()
            .paginate(2, 10)
            .search("")
            .to_params();
        assert_eq!(
            params,
            vec![("page", "2".to_string()), ("page_size", "10".to_string())]
        );
    }

    #[test]
    fn test_book_query_params_full() {
        let params = BookListQuery::new()
            .paginate(1, 10)
            .search("history")
            .show(7)
            .topic("fiction")
            .to_params();
        assert_eq!(
            params,
            vec![
                ("page", "1".to_string()),
                ("page_size", "10".to_string()),
                ("search", "history".to_string()),
                ("brand", "7".to_string()),
                ("topic", "fiction".to_string()),
            ]
        );
    }

    #[test]
    fn test_show_query_params_station_filter() {
        let params = ShowListQuery::new().station("bbc_radio_four").to_params();
        assert_eq!(params, vec![("station_id", "bbc_radio_four".to_string())]);
    }

    #[test]
    fn test_total_pages() {
        let page = Page::<()> {
            count: 25,
            results: Vec::new(),
            has_next: true,
            has_previous: false,
        };
        assert_eq!(page.total_pages(10), 3);
        assert_eq!(Page::<()>::empty().total_pages(10), 0);
    }
}
