use radioreads::listing::query::{DEFAULT_PAGE_SIZE, ListingParams};
use radioreads::services::ServiceError;
use radioreads::services::{
    books as book_service, main as main_service, shows as show_service,
    stations as station_service, topics as topic_service,
};

mod common;

use common::MockCatalog;

fn params(query: &str) -> ListingParams {
    serde_html_form::from_str(query).expect("valid query string")
}

#[tokio::test]
async fn test_books_page_forwards_search_and_page() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_list_books()
        .withf(|query| {
            query.search.as_deref() == Some("history")
                && matches!(
                    query.pagination,
                    Some(p) if p.page == 2 && p.per_page == DEFAULT_PAGE_SIZE
                )
                && query.show_id.is_none()
                && query.topic_slug.is_none()
        })
        .returning(|_| {
            Ok(common::page_of(
                (1..=10).map(common::book).collect(),
                25,
                true,
                true,
            ))
        });

    let data = book_service::load_books_page(
        &catalog,
        &params("search=history&page=2"),
        DEFAULT_PAGE_SIZE,
    )
    .await
    .unwrap();

    assert_eq!(data.count, 25);
    assert_eq!(data.books.items.len(), 10);
    assert_eq!(data.books.page, 2);
    assert_eq!(data.books.total_pages, 3);
    assert_eq!(data.search_query.as_deref(), Some("history"));
    assert_eq!(data.url_query, "?search=history&page=2");
}

#[tokio::test]
async fn test_books_page_omits_empty_search() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_list_books()
        .withf(|query| query.search.is_none())
        .returning(|_| Ok(common::page_of(vec![common::book(1)], 1, false, false)));

    let data = book_service::load_books_page(&catalog, &params("search=+++"), DEFAULT_PAGE_SIZE)
        .await
        .unwrap();

    assert_eq!(data.search_query, None);
    assert_eq!(data.url_query, "?page=1");
}

#[tokio::test]
async fn test_books_page_empty_results_have_no_pager() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_list_books()
        .returning(|_| Ok(common::page_of(vec![], 0, false, false)));

    let data = book_service::load_books_page(
        &catalog,
        &params("search=nothing"),
        DEFAULT_PAGE_SIZE,
    )
    .await
    .unwrap();

    assert_eq!(data.count, 0);
    assert!(data.books.items.is_empty());
    assert!(data.books.pages.is_empty());
}

#[tokio::test]
async fn test_books_page_propagates_fetch_failure() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_list_books()
        .returning(|_| Err(common::unavailable("/books/")));

    let err = book_service::load_books_page(&catalog, &ListingParams::default(), DEFAULT_PAGE_SIZE)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Catalog(_)));
}

#[tokio::test]
async fn test_book_detail_not_found() {
    let mut catalog = MockCatalog::new();
    catalog.expect_get_book_by_id().returning(|_| Ok(None));

    let err = book_service::load_book_page(&catalog, 42).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn test_home_page_shows_degrade_to_empty() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_list_books()
        .returning(|_| Ok(common::page_of(vec![common::book(1)], 1, false, false)));
    catalog
        .expect_list_shows()
        .returning(|_| Err(common::unavailable("/brands/")));

    let data = main_service::load_home_page(&catalog, DEFAULT_PAGE_SIZE)
        .await
        .unwrap();

    assert_eq!(data.books.len(), 1);
    assert!(data.shows.is_empty());
}

#[tokio::test]
async fn test_home_page_book_failure_is_fatal() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_list_books()
        .returning(|_| Err(common::unavailable("/books/")));

    let result = main_service::load_home_page(&catalog, DEFAULT_PAGE_SIZE).await;
    assert!(matches!(result, Err(ServiceError::Catalog(_))));
}

#[tokio::test]
async fn test_show_page_filters_books_by_show() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_get_show_by_id()
        .returning(|id| Ok(Some(common::show(id))));
    catalog
        .expect_list_books()
        .withf(|query| query.show_id == Some(7))
        .returning(|_| Ok(common::page_of(vec![common::book(1)], 1, false, false)));

    let data = show_service::load_show_page(&catalog, 7, &ListingParams::default(), DEFAULT_PAGE_SIZE)
        .await
        .unwrap();

    assert_eq!(data.show.id, 7);
    assert_eq!(data.books.items.len(), 1);
}

#[tokio::test]
async fn test_show_page_unknown_show_is_not_found() {
    let mut catalog = MockCatalog::new();
    catalog.expect_get_show_by_id().returning(|_| Ok(None));

    let err =
        show_service::load_show_page(&catalog, 9, &ListingParams::default(), DEFAULT_PAGE_SIZE)
            .await
            .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn test_station_page_lists_its_shows() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_get_station()
        .withf(|station_id| station_id == "bbc_radio_four")
        .returning(|_| Ok(Some(common::station("BBC Radio 4", "bbc_radio_four"))));
    catalog
        .expect_list_shows()
        .withf(|query| query.station_id.as_deref() == Some("bbc_radio_four"))
        .returning(|_| Ok(common::page_of(vec![common::show(1)], 1, false, false)));

    let data = station_service::load_station_page(&catalog, "bbc_radio_four")
        .await
        .unwrap();

    assert_eq!(data.station.name, "BBC Radio 4");
    assert_eq!(data.shows.len(), 1);
}

#[tokio::test]
async fn test_topics_page_station_names_degrade() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_list_topics()
        .returning(|| Ok(common::page_of(vec![common::topic("fiction")], 1, false, false)));
    catalog
        .expect_list_stations()
        .returning(|| Err(common::unavailable("/stations/")));

    let data = topic_service::load_topics_page(&catalog).await.unwrap();

    assert_eq!(data.topics.len(), 1);
    assert!(data.station_names.is_empty());
}

#[tokio::test]
async fn test_topic_page_filters_books_by_slug() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_get_topic_by_slug()
        .returning(|slug| Ok(Some(common::topic(slug))));
    catalog
        .expect_list_books()
        .withf(|query| query.topic_slug.as_deref() == Some("fiction"))
        .returning(|_| {
            Ok(common::page_of(
                (1..=10).map(common::book).collect(),
                12,
                true,
                false,
            ))
        });

    let data =
        topic_service::load_topic_page(&catalog, "fiction", &params("page=1"), DEFAULT_PAGE_SIZE)
            .await
            .unwrap();

    assert_eq!(data.topic.slug, "fiction");
    assert_eq!(data.count, 12);
    assert_eq!(data.books.total_pages, 2);
}

#[tokio::test]
async fn test_topic_page_unknown_slug_is_not_found() {
    let mut catalog = MockCatalog::new();
    catalog.expect_get_topic_by_slug().returning(|_| Ok(None));

    let err = topic_service::load_topic_page(
        &catalog,
        "missing",
        &ListingParams::default(),
        DEFAULT_PAGE_SIZE,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound));
}
