use serde::Serialize;

/// How many pages stay visible at each end of the window.
const EDGE_PAGES: usize = 2;
/// How many pages stay visible on either side of the current page.
const AROUND_CURRENT: usize = 3;

/// Windowed page numbers for the pager controls: edge pages plus a
/// neighborhood around the current page, with `None` marking a gap.
fn page_window(total_pages: usize, current: usize) -> Vec<Option<usize>> {
    let mut pages = Vec::new();
    let mut in_gap = false;

    for n in 1..=total_pages {
        let near_edge = n <= EDGE_PAGES || n > total_pages.saturating_sub(EDGE_PAGES);
        let near_current =
            n >= current.saturating_sub(AROUND_CURRENT) && n <= current + AROUND_CURRENT;

        if near_edge || near_current {
            pages.push(Some(n));
            in_gap = false;
        } else if !in_gap {
            pages.push(None);
            in_gap = true;
        }
    }

    pages
}

/// A page of items together with everything the pager template needs.
///
/// With zero matching items `pages` is empty and the template renders an
/// empty state instead of page controls.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let page = current_page.max(1);

        Self {
            items,
            page,
            total_pages,
            pages: page_window(total_pages, page),
            has_next: page < total_pages,
            has_previous: page > 1 && total_pages > 0,
        }
    }
}
