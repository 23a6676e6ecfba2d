//! Client-side pagination over a loaded table.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

/// One-based page cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl Pager {
    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self { page: 1, per_page: per_page.max(1), total: 0 }
    }

    /// First row number on the page, `0` for an empty table.
    #[must_use]
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.page - 1) * self.per_page + 1
    }

    #[must_use]
    pub fn end_item(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.start_item() + self.per_page - 1).min(self.total)
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    /// Update the row count, pulling the page back if it no longer exists.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.clamp(1, self.page_count());
    }

    #[must_use]
    pub fn footer(&self) -> String {
        format!("Showing {}-{} of {}", self.start_item(), self.end_item(), self.total)
    }

    /// Rows of `items` on the current page.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.page - 1) * self.per_page).min(items.len());
        let end = (start + self.per_page).min(items.len());
        &items[start..end]
    }
}
