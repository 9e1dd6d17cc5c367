use crate::catalog::{ShowListQuery, ShowReader, StationReader};
use crate::dto::stations::StationPageData;
use crate::services::{ServiceError, ServiceResult};

/// Loads one station and the shows it broadcasts.
pub async fn load_station_page<C>(catalog: &C, station_id: &str) -> ServiceResult<StationPageData>
where
    C: StationReader + ShowReader + Sync + ?Sized,
{
    let station = catalog
        .get_station(station_id)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch station {station_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    let shows = catalog
        .list_shows(ShowListQuery::new().station(station_id))
        .await
        .map_err(|err| {
            log::error!("Failed to list shows for station {station_id}: {err}");
            err
        })?;

    Ok(StationPageData {
        station,
        shows: shows.results,
    })
}
