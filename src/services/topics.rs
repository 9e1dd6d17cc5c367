use crate::catalog::{BookListQuery, BookReader, StationReader, TopicReader};
use crate::dto::topics::{TopicPageData, TopicsPageData};
use crate::listing::query::{ListingParams, QueryState};
use crate::pagination::Paginated;
use crate::services::{ServiceError, ServiceResult};

/// Loads the topics index.
///
/// Station names only feed the intro blurb, so that lookup is allowed to
/// fail without taking the page down.
pub async fn load_topics_page<C>(catalog: &C) -> ServiceResult<TopicsPageData>
where
    C: TopicReader + StationReader + Sync + ?Sized,
{
    let topics = catalog.list_topics().await.map_err(|err| {
        log::error!("Failed to list topics: {err}");
        err
    })?;

    let station_names = match catalog.list_stations().await {
        Ok(page) => page.results.into_iter().map(|s| s.name).collect(),
        Err(err) => {
            log::warn!("Failed to list stations for topics page: {err}");
            Vec::new()
        }
    };

    Ok(TopicsPageData {
        topics: topics.results,
        station_names,
    })
}

/// Loads one topic together with the paginated list of its books.
pub async fn load_topic_page<C>(
    catalog: &C,
    slug: &str,
    params: &ListingParams,
    page_size: usize,
) -> ServiceResult<TopicPageData>
where
    C: TopicReader + BookReader + Sync + ?Sized,
{
    let topic = catalog
        .get_topic_by_slug(slug)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch topic {slug}: {err}");
            err
        })?
        .ok_or(ServiceError::NotFound)?;

    let query = QueryState::from_params(params, page_size);

    let page = catalog
        .list_books(
            BookListQuery::new()
                .topic(slug)
                .paginate(query.page, query.page_size),
        )
        .await
        .map_err(|err| {
            log::error!("Failed to list books for topic {slug}: {err}");
            err
        })?;

    let total_pages = page.total_pages(query.page_size);

    Ok(TopicPageData {
        topic,
        count: page.count,
        books: Paginated::new(page.results, query.page, total_pages),
        url_query: query.to_query_string(),
    })
}
