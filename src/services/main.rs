use crate::catalog::{BookListQuery, BookReader, ShowListQuery, ShowReader};
use crate::dto::main::HomePageData;
use crate::services::ServiceResult;

/// Loads the home page: recent books plus the shows sidebar.
///
/// Books are the page's primary data and their failure is fatal for the
/// view; the shows sidebar degrades to an empty list.
pub async fn load_home_page<C>(catalog: &C, page_size: usize) -> ServiceResult<HomePageData>
where
    C: BookReader + ShowReader + Sync + ?Sized,
{
    let books = catalog
        .list_books(BookListQuery::new().paginate(1, page_size))
        .await
        .map_err(|err| {
            log::error!("Failed to list books for home page: {err}");
            err
        })?;

    let shows = match catalog.list_shows(ShowListQuery::new()).await {
        Ok(page) => page.results,
        Err(err) => {
            log::warn!("Failed to list shows for home page: {err}");
            Vec::new()
        }
    };

    Ok(HomePageData {
        books: books.results,
        shows,
    })
}
