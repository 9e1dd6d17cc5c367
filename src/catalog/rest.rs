//! `reqwest`-backed implementation of the catalog reader traits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::catalog::errors::{CatalogError, CatalogResult};
use crate::catalog::{BookListQuery, BookReader, Page, ShowListQuery, ShowReader, StationReader, TopicReader};
use crate::domain::book::Book;
use crate::domain::show::Show;
use crate::domain::station::Station;
use crate::domain::topic::Topic;

/// Default timeout for catalog requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The two response shapes the backend produces for list endpoints.
///
/// Most endpoints wrap results in a pagination envelope; a few (topics)
/// return a bare array. The ambiguity is resolved here, once.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawListing<T> {
    Envelope {
        count: usize,
        results: Vec<T>,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
    },
    Bare(Vec<T>),
}

impl<T> From<RawListing<T>> for Page<T> {
    fn from(raw: RawListing<T>) -> Self {
        match raw {
            RawListing::Envelope {
                count,
                results,
                next,
                previous,
            } => Page {
                count,
                results,
                has_next: next.is_some(),
                has_previous: previous.is_some(),
            },
            // A bare list carries no pagination metadata, so it is treated
            // as the complete result set.
            RawListing::Bare(results) => Page {
                count: results.len(),
                results,
                has_next: false,
                has_previous: false,
            },
        }
    }
}

/// Stateless HTTP client for the catalog API.
///
/// Every call issues exactly one GET; there are no retries and no caching.
#[derive(Debug, Clone)]
pub struct RestCatalog {
    http: Client,
    base_url: String,
}

impl RestCatalog {
    pub fn new(base_url: impl Into<String>) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Builds a catalog around an existing client, e.g. to share a
    /// connection pool.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_listing<T>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> CatalogResult<Page<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(self.url(path))
            .query(params)
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                endpoint: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let raw: RawListing<T> =
            response
                .json()
                .await
                .map_err(|source| CatalogError::Decode {
                    endpoint: path.to_string(),
                    source,
                })?;

        Ok(raw.into())
    }

    /// Fetches a single record; HTTP 404 maps to `Ok(None)`.
    async fn get_detail<T>(&self, path: &str) -> CatalogResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|source| CatalogError::Transport {
                endpoint: path.to_string(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map(Some)
            .map_err(|source| CatalogError::Decode {
                endpoint: path.to_string(),
                source,
            })
    }
}

#[async_trait]
impl BookReader for RestCatalog {
    async fn list_books(&self, query: BookListQuery) -> CatalogResult<Page<Book>> {
        self.get_listing("/books/", &query.to_params()).await
    }

    async fn get_book_by_id(&self, id: i64) -> CatalogResult<Option<Book>> {
        self.get_detail(&format!("/books/{id}/")).await
    }
}

#[async_trait]
impl ShowReader for RestCatalog {
    async fn list_shows(&self, query: ShowListQuery) -> CatalogResult<Page<Show>> {
        self.get_listing("/brands/", &query.to_params()).await
    }

    async fn get_show_by_id(&self, id: i64) -> CatalogResult<Option<Show>> {
        self.get_detail(&format!("/brands/{id}/")).await
    }
}

#[async_trait]
impl StationReader for RestCatalog {
    async fn list_stations(&self) -> CatalogResult<Page<Station>> {
        self.get_listing("/stations/", &[]).await
    }

    async fn get_station(&self, station_id: &str) -> CatalogResult<Option<Station>> {
        // The backend exposes stations as a filtered listing rather than a
        // detail route.
        let page: Page<Station> = self
            .get_listing(
                "/stations/",
                &[("station_id", station_id.to_string())],
            )
            .await?;
        Ok(page.results.into_iter().next())
    }
}

#[async_trait]
impl TopicReader for RestCatalog {
    async fn list_topics(&self) -> CatalogResult<Page<Topic>> {
        self.get_listing("/topics/", &[]).await
    }

    async fn get_topic_by_slug(&self, slug: &str) -> CatalogResult<Option<Topic>> {
        self.get_detail(&format!("/topics/{slug}/")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    fn normalize(json: &str) -> Page<Item> {
        serde_json::from_str::<RawListing<Item>>(json)
            .expect("valid listing")
            .into()
    }

    #[test]
    fn test_envelope_is_normalized() {
        let items: Vec<String> = (1..=10).map(|i| format!("{{\"id\": {i}}}")).collect();
        let json = format!(
            "{{\"count\": 25, \"results\": [{}], \"next\": \"/books/?page=2\", \"previous\": null}}",
            items.join(",")
        );
        let page = normalize(&json);
        assert_eq!(page.count, 25);
        assert_eq!(page.results.len(), 10);
        assert!(page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_bare_list_is_normalized() {
        let page = normalize("[{\"id\": 1}, {\"id\": 2}, {\"id\": 3}]");
        assert_eq!(page.count, 3);
        assert_eq!(page.results.len(), 3);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test]
    fn test_envelope_middle_page() {
        let json = "{\"count\": 25, \"results\": [{\"id\": 11}], \
                    \"next\": \"p3\", \"previous\": \"p1\"}";
        let page = normalize(json);
        assert!(page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let catalog = RestCatalog::with_client(Client::new(), "http://api.local/api/");
        assert_eq!(catalog.url("/books/"), "http://api.local/api/books/");
        assert_eq!(catalog.url("books/"), "http://api.local/api/books/");
    }
}
