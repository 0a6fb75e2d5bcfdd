use std::ops::Range;

use num_format::{Locale, ToFormattedString};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
}

/// What a list does with its current page when the query or a filter changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageResetPolicy {
    /// Jump back to page 1.
    ResetOnFilterChange,
    /// Stay on the current page. The window clamps it if the result shrank.
    KeepPage,
}

/// Page size plus the 1-based page the user asked for.
///
/// The stored page may point past the end after the data shrinks;
/// [`Pagination::window`] clamps it for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    page: usize,
}

/// The contiguous slice of a filtered list shown on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn window(&self, total: usize) -> PageWindow {
        let total_pages = total.div_ceil(self.page_size).max(1);
        let page = self.page.clamp(1, total_pages);
        let start = ((page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        PageWindow {
            start,
            end,
            total,
            page,
            total_pages,
        }
    }

    /// Moves relative to the clamped page for a list of `total` rows.
    pub fn navigate(&mut self, nav: PageNav, total: usize) {
        let window = self.window(total);
        self.page = match nav {
            PageNav::First => 1,
            PageNav::Prev => window.page.saturating_sub(1).max(1),
            PageNav::Next => (window.page + 1).min(window.total_pages),
            PageNav::Last => window.total_pages,
        };
    }
}

impl PageWindow {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// `"1 - 7 of 12"`, or `"0 - 0 of 0"` for an empty list.
    pub fn label(&self) -> String {
        if self.total == 0 {
            return "0 - 0 of 0".to_string();
        }
        format!(
            "{} - {} of {}",
            (self.start + 1).to_formatted_string(&Locale::en),
            self.end.to_formatted_string(&Locale::en),
            self.total.to_formatted_string(&Locale::en)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_of_seven_courses() {
        let window = Pagination::new(7).window(7);
        assert_eq!(window.range(), 0..7);
        assert_eq!(window.label(), "1 - 7 of 7");
        assert!(!window.has_prev());
        assert!(!window.has_next());
    }

    #[test]
    fn slice_length_is_min_of_page_size_and_remaining() {
        for total in 0..40 {
            for size in [1, 7, 10, 25, 50] {
                let mut pagination = Pagination::new(size);
                loop {
                    let window = pagination.window(total);
                    assert_eq!(window.len(), size.min(total - window.start));
                    if !window.has_next() {
                        break;
                    }
                    pagination.navigate(PageNav::Next, total);
                }
            }
        }
    }

    #[test]
    fn navigation_stops_at_boundaries() {
        let mut pagination = Pagination::new(10);
        pagination.navigate(PageNav::Prev, 25);
        assert_eq!(pagination.page(), 1);

        pagination.navigate(PageNav::Last, 25);
        let window = pagination.window(25);
        assert_eq!(window.page, 3);
        assert!(window.has_prev());
        assert!(!window.has_next());
        assert_eq!(window.label(), "21 - 25 of 25");

        pagination.navigate(PageNav::Next, 25);
        assert_eq!(pagination.page(), 3);

        pagination.navigate(PageNav::First, 25);
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn stale_page_is_clamped_when_data_shrinks() {
        let mut pagination = Pagination::new(7);
        pagination.navigate(PageNav::Last, 30);
        assert_eq!(pagination.page(), 5);

        let window = pagination.window(8);
        assert_eq!(window.page, 2);
        assert_eq!(window.range(), 7..8);

        pagination.navigate(PageNav::Prev, 8);
        assert_eq!(pagination.page(), 1);
    }

    #[test]
    fn changing_page_size_returns_to_first_page() {
        let mut pagination = Pagination::new(7);
        pagination.navigate(PageNav::Next, 20);
        pagination.set_page_size(25);
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.page_size(), 25);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let window = Pagination::new(7).window(0);
        assert!(window.is_empty());
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.label(), "0 - 0 of 0");
        assert!(!window.has_prev());
        assert!(!window.has_next());
    }

    #[test]
    fn label_groups_thousands() {
        let mut pagination = Pagination::new(50);
        pagination.navigate(PageNav::Last, 1234);
        assert_eq!(pagination.window(1234).label(), "1,201 - 1,234 of 1,234");
    }
}
