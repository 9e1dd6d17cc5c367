use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::station::StationRef;

/// A book discussed on a radio show.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Book {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub purchase_link: Option<String>,
    /// Episode the book was discussed in. Older records may lack one.
    #[serde(default)]
    pub episode: Option<Episode>,
}

/// The broadcast a book appeared in, with its owning show and station.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Episode {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub aired_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub brand: Option<ShowRef>,
}

/// Slim show reference embedded in episode payloads.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ShowRef {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub station: Option<StationRef>,
}

impl Book {
    /// Name of the show the book was discussed on, when the API supplied one.
    pub fn show_name(&self) -> Option<&str> {
        self.episode
            .as_ref()
            .and_then(|e| e.brand.as_ref())
            .map(|b| b.name.as_str())
    }
}
