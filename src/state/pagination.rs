//! Page tracking for the fetched job list.

/// Maximum number of page numbers shown in the pagination bar.
///
pub const VISIBLE_PAGE_COUNT: u32 = 5;

/// Tracks the current page and the page count reported by the last fetch.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Pagination {
    current_page: u32,
    total_pages: Option<u32>,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            current_page: 1,
            total_pages: None,
        }
    }
}

impl Pagination {
    /// Return the current 1-based page.
    ///
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Return the page count, unknown until the first successful fetch.
    ///
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Move to the target page. Returns false, leaving the page unchanged,
    /// when the target lies outside `[1, total_pages]` or the count is unknown.
    ///
    pub fn change_page(&mut self, target: u32) -> bool {
        match self.total_pages {
            Some(total) if target >= 1 && target <= total => {
                self.current_page = target;
                true
            }
            _ => false,
        }
    }

    /// Record the page count from fetch metadata. Returns true only when the
    /// stored value actually changed.
    ///
    pub fn update_total_pages(&mut self, max_page: u32) -> bool {
        if self.total_pages == Some(max_page) {
            return false;
        }
        self.total_pages = Some(max_page);
        true
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        matches!(self.total_pages, Some(total) if self.current_page < total)
    }

    /// Return up to five page numbers around the current page, shifted so the
    /// window stays within the known page range.
    ///
    pub fn visible_pages(&self) -> Vec<u32> {
        let total = match self.total_pages {
            Some(total) if total > 0 => total,
            _ => return vec![],
        };
        let start = self
            .current_page
            .saturating_sub(VISIBLE_PAGE_COUNT / 2)
            .max(1);
        let end = total.min(start + VISIBLE_PAGE_COUNT - 1);
        let start = (end + 1).saturating_sub(VISIBLE_PAGE_COUNT).max(1);
        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_total(total: u32) -> Pagination {
        let mut pagination = Pagination::default();
        pagination.update_total_pages(total);
        pagination
    }

    #[test]
    fn starts_on_first_page_with_unknown_total() {
        let pagination = Pagination::default();
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.total_pages(), None);
    }

    #[test]
    fn change_page_rejects_out_of_bounds() {
        let mut pagination = with_total(4);
        assert!(!pagination.change_page(0));
        assert!(!pagination.change_page(5));
        assert_eq!(pagination.current_page(), 1);
        assert!(pagination.change_page(4));
        assert_eq!(pagination.current_page(), 4);
    }

    #[test]
    fn change_page_rejected_while_total_unknown() {
        let mut pagination = Pagination::default();
        assert!(!pagination.change_page(2));
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn update_total_only_reports_changes() {
        let mut pagination = Pagination::default();
        assert!(pagination.update_total_pages(3));
        assert!(!pagination.update_total_pages(3));
        assert!(pagination.update_total_pages(7));
        assert_eq!(pagination.total_pages(), Some(7));
    }

    #[test]
    fn previous_and_next_bounds() {
        let mut pagination = with_total(2);
        assert!(!pagination.has_previous());
        assert!(pagination.has_next());
        pagination.change_page(2);
        assert!(pagination.has_previous());
        assert!(!pagination.has_next());
    }

    #[test]
    fn visible_pages_window() {
        let mut pagination = with_total(10);
        assert_eq!(pagination.visible_pages(), vec![1, 2, 3, 4, 5]);
        pagination.change_page(6);
        assert_eq!(pagination.visible_pages(), vec![4, 5, 6, 7, 8]);
        pagination.change_page(10);
        assert_eq!(pagination.visible_pages(), vec![6, 7, 8, 9, 10]);
        assert_eq!(with_total(3).visible_pages(), vec![1, 2, 3]);
        assert!(Pagination::default().visible_pages().is_empty());
    }
}
