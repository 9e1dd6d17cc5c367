use serde::{Deserialize, Serialize};

/// A browsable topic (genre or theme) with at least one book.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Topic {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub book_count: usize,
}
