use crate::domain::book::Book;
use crate::domain::topic::Topic;
use crate::pagination::Paginated;

/// Data required to render the topics index.
pub struct TopicsPageData {
    pub topics: Vec<Topic>,
    /// Station names for the intro blurb; empty when the lookup failed.
    pub station_names: Vec<String>,
}

/// Data required to render one topic and its books.
#[derive(Debug)]
pub struct TopicPageData {
    pub topic: Topic,
    pub books: Paginated<Book>,
    pub count: usize,
    pub url_query: String,
}
