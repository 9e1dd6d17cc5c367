//! Shared test fixtures: a mock catalog and record builders.

use mockall::mock;

use radioreads::catalog::errors::{CatalogError, CatalogResult};
use radioreads::catalog::{
    BookListQuery, BookReader, Page, ShowListQuery, ShowReader, StationReader, TopicReader,
};
use radioreads::domain::book::Book;
use radioreads::domain::show::Show;
use radioreads::domain::station::Station;
use radioreads::domain::topic::Topic;

mock! {
    pub Catalog {}

    #[async_trait::async_trait]
    impl BookReader for Catalog {
        async fn list_books(&self, query: BookListQuery) -> CatalogResult<Page<Book>>;
        async fn get_book_by_id(&self, id: i64) -> CatalogResult<Option<Book>>;
    }

    #[async_trait::async_trait]
    impl ShowReader for Catalog {
        async fn list_shows(&self, query: ShowListQuery) -> CatalogResult<Page<Show>>;
        async fn get_show_by_id(&self, id: i64) -> CatalogResult<Option<Show>>;
    }

    #[async_trait::async_trait]
    impl StationReader for Catalog {
        async fn list_stations(&self) -> CatalogResult<Page<Station>>;
        async fn get_station(&self, station_id: &str) -> CatalogResult<Option<Station>>;
    }

    #[async_trait::async_trait]
    impl TopicReader for Catalog {
        async fn list_topics(&self) -> CatalogResult<Page<Topic>>;
        async fn get_topic_by_slug(&self, slug: &str) -> CatalogResult<Option<Topic>>;
    }
}

pub fn book(id: i64) -> Book {
    Book {
        id,
        title: format!("Book {id}"),
        ..Book::default()
    }
}

pub fn show(id: i64) -> Show {
    Show {
        id,
        name: format!("Show {id}"),
        ..Show::default()
    }
}

pub fn station(name: &str, station_id: &str) -> Station {
    Station {
        id: 1,
        name: name.to_string(),
        station_id: station_id.to_string(),
        ..Station::default()
    }
}

pub fn topic(slug: &str) -> Topic {
    Topic {
        slug: slug.to_string(),
        name: slug.to_string(),
        ..Topic::default()
    }
}

pub fn page_of<T>(results: Vec<T>, count: usize, has_next: bool, has_previous: bool) -> Page<T> {
    Page {
        count,
        results,
        has_next,
        has_previous,
    }
}

pub fn unavailable(endpoint: &str) -> CatalogError {
    CatalogError::Status {
        endpoint: endpoint.to_string(),
        status: 502,
    }
}
