use crate::domain::book::Book;
use crate::domain::show::Show;
use crate::pagination::Paginated;

/// Data required to render the all-shows listing.
pub struct ShowsPageData {
    pub shows: Paginated<Show>,
    pub count: usize,
    pub search_query: Option<String>,
    pub url_query: String,
}

/// Data required to render one show and its books.
#[derive(Debug)]
pub struct ShowPageData {
    pub show: Show,
    pub books: Paginated<Book>,
    pub count: usize,
    pub url_query: String,
}
