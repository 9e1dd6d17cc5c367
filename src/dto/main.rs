use crate::domain::book::Book;
use crate::domain::show::Show;

/// Data required to render the home page.
pub struct HomePageData {
    /// Most recently discussed books.
    pub books: Vec<Book>,
    /// Shows sidebar; empty when the secondary lookup failed.
    pub shows: Vec<Show>,
}
