//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::listing::query::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base URL of the catalog REST API, e.g. `http://localhost:8000/api`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Glob passed to tera, e.g. `templates/**/*.html`.
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    /// Items per page on listing views.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_templates_dir() -> String {
    "templates/**/*.html".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
