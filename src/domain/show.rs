use serde::{Deserialize, Serialize};

use crate::domain::station::StationRef;

/// A radio show ("brand" in the backend API) that discusses books.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Show {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub station: Option<StationRef>,
    /// Number of books the API has recorded for this show.
    #[serde(default)]
    pub book_count: usize,
}
