use crate::domain::book::Book;
use crate::pagination::Paginated;

/// Data required to render the all-books listing.
#[derive(Debug)]
pub struct BooksPageData {
    /// Paginated page of books with pager window.
    pub books: Paginated<Book>,
    /// Total number of matching books across all pages.
    pub count: usize,
    /// Search term echoed back into the search box when present.
    pub search_query: Option<String>,
    /// Canonical query string for the current state, e.g. `?search=war&page=2`.
    pub url_query: String,
}

/// Data required to render one book's detail page.
#[derive(Debug)]
pub struct BookPageData {
    pub book: Book,
}
