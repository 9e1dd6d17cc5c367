use crate::catalog::{BookListQuery, BookReader, ShowListQuery, ShowReader};
use crate::dto::shows::{ShowPageData, ShowsPageData};
use crate::listing::query::{ListingParams, QueryState};
use crate::pagination::Paginated;
use crate::services::{ServiceError, ServiceResult};

/// Loads the paginated, searchable all-shows listing.
pub async fn load_shows_page<C>(
    catalog: &C,
    params: &ListingParams,
    page_size: usize,
) -> ServiceResult<ShowsPageData>
where
    C: ShowReader + Sync + ?Sized,
{
    let query = QueryState::from_params(params, page_size);

    let mut list_query = ShowListQuery::new().paginate(query.page, query.page_size);
    if !query.search_text.is_empty() {
        list_query = list_query.search(&query.search_text);
    }

    let page = catalog.list_shows(list_query).await.map_err(|err| {
        log::error!("Failed to list shows: {err}");
        err
    })?;

    let total_pages = page.total_pages(query.page_size);

    Ok(ShowsPageData {
        count: page.count,
        shows: Paginated::new(page.results, query.page, total_pages),
        search_query: (!query.search_text.is_empty()).then(|| query.search_text.clone()),
        url_query: query.to_query_string(),
    })
}

/// Loads one show together with the paginated list of its books.
pub async fn load_show_page<C>(
    catalog: &C,
    show_id: i64,
    params: &ListingParams,
    page_size: usize,
) -> ServiceResult<ShowPageData>
where
    C: ShowReader + BookReader + Sync + ?Sized,
{
    let show = catalog
        .get_show_by_id(show_id)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch show {show_id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    let query = QueryState::from_params(params, page_size);

    let mut list_query = BookListQuery::new()
        .show(show_id)
        .paginate(query.page, query.page_size);
    if !query.search_text.is_empty() {
        list_query = list_query.search(&query.search_text);
    }

    let page = catalog.list_books(list_query).await.map_err(|err| {
        log::error!("Failed to list books for show {show_id}: {err}");
        err
    })?;

    let total_pages = page.total_pages(query.page_size);

    Ok(ShowPageData {
        show,
        count: page.count,
        books: Paginated::new(page.results, query.page, total_pages),
        url_query: query.to_query_string(),
    })
}
