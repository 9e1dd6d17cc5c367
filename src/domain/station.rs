use serde::{Deserialize, Serialize};

/// A radio station.
///
/// `station_id` is the external identifier used in URLs and API filters
/// (e.g. `bbc_radio_four`), distinct from the numeric primary key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub station_id: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Slim station reference embedded in show and episode payloads.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct StationRef {
    pub id: i64,
    pub name: String,
    pub station_id: String,
}
