use crate::domain::show::Show;
use crate::domain::station::Station;

/// Data required to render one station and the shows it broadcasts.
pub struct StationPageData {
    pub station: Station,
    pub shows: Vec<Show>,
}
