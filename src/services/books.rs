use crate::catalog::{BookListQuery, BookReader};
use crate::dto::books::{BookPageData, BooksPageData};
use crate::listing::query::{ListingParams, QueryState};
use crate::pagination::Paginated;
use crate::services::{ServiceError, ServiceResult};

/// Loads the paginated, searchable all-books listing.
pub async fn load_books_page<C>(
    catalog: &C,
    params: &ListingParams,
    page_size: usize,
) -> ServiceResult<BooksPageData>
where
    C: BookReader + Sync + ?Sized,
{
    let query = QueryState::from_params(params, page_size);

    let mut list_query = BookListQuery::new().paginate(query.page, query.page_size);
    if !query.search_text.is_empty() {
        list_query = list_query.search(&query.search_text);
    }

    let page = catalog.list_books(list_query).await.map_err(|err| {
        log::error!("Failed to list books: {err}");
        err
    })?;

    let total_pages = page.total_pages(query.page_size);

    Ok(BooksPageData {
        count: page.count,
        books: Paginated::new(page.results, query.page, total_pages),
        search_query: (!query.search_text.is_empty()).then(|| query.search_text.clone()),
        url_query: query.to_query_string(),
    })
}

/// Loads one book's detail page.
pub async fn load_book_page<C>(catalog: &C, id: i64) -> ServiceResult<BookPageData>
where
    C: BookReader + Sync + ?Sized,
{
    let book = catalog
        .get_book_by_id(id)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch book {id}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    Ok(BookPageData { book })
}
