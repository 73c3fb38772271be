use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 20, 50, 100];

/// Number of pages needed for `len` items; 0 for an empty collection.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Slice for the 1-based `page`, clamped to the bounds of `items`.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

/// "Showing `first` to `last` of `total`" numbers for a list footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl PaginationState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_pages(total_items, self.items_per_page)
    }

    /// Brings the page back into `1..=max(total_pages, 1)` after the
    /// collection changed size.
    pub fn sync(&mut self, total_items: usize) {
        let last = self.total_pages(total_items).max(1);
        if self.current_page == 0 || self.current_page > last {
            self.current_page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize, total_items: usize) {
        let last = self.total_pages(total_items).max(1);
        self.current_page = page.clamp(1, last);
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.reset();
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.current_page, self.items_per_page)
    }

    pub fn display_range(&self, total_items: usize) -> DisplayRange {
        if total_items == 0 {
            return DisplayRange {
                first: 0,
                last: 0,
                total: 0,
            };
        }
        let first = (self.current_page - 1) * self.items_per_page + 1;
        let last = (self.current_page * self.items_per_page).min(total_items);
        DisplayRange {
            first: first.min(total_items),
            last,
            total: total_items,
        }
    }
}
