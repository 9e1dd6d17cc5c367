use thiserror::Error;

/// Failure to obtain usable data from the catalog API.
///
/// The variants only preserve diagnostics; callers treat every variant
/// uniformly as "this request did not produce usable data".
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("GET {endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("GET {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GET {endpoint} returned an undecodable body: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl CatalogError {
    /// Endpoint path the failed request was issued against.
    pub fn endpoint(&self) -> &str {
        match self {
            CatalogError::Status { endpoint, .. }
            | CatalogError::Transport { endpoint, .. }
            | CatalogError::Decode { endpoint, .. } => endpoint,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
