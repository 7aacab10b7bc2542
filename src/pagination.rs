//! Page arithmetic for request listings

use serde::{Deserialize, Serialize};

/// Rows per page on the request screens
pub const PER_PAGE: usize = 10;

/// Rows per page on dashboard widgets
pub const DASHBOARD_PER_PAGE: usize = 5;

/// Paginated envelope returned by the records API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self, per_page: usize) -> u64 {
        total_pages(self.total, per_page)
    }
}

/// `ceil(total / per_page)`, never less than one page.
pub fn total_pages(total: u64, per_page: usize) -> u64 {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page as u64).max(1)
}

/// Client-side paging over rows already loaded. Pages are 1-based.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    per_page: usize,
    current_page: usize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], per_page: usize) -> Self {
        Self {
            items,
            per_page: per_page.max(1),
            current_page: 1,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn max_page(&self) -> usize {
        self.items.len().div_ceil(self.per_page).max(1)
    }

    pub fn current_data(&self) -> &'a [T] {
        let start = (self.current_page - 1) * self.per_page;
        let end = (start + self.per_page).min(self.items.len());
        self.items.get(start..end).unwrap_or(&[])
    }

    pub fn next(&mut self) {
        self.current_page = (self.current_page + 1).min(self.max_page());
    }

    pub fn prev(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn jump(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.max_page());
    }
}
