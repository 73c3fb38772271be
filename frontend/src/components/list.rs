use super::{
    pagination::{DisplayRange, PaginationState},
    search::filter_by_query,
};

pub type FieldsFn<T> = fn(&T) -> Vec<String>;
pub type OrderFn<T> = fn(&mut [T]);

/// One rendered page of a filtered, ordered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
    pub range: DisplayRange,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Query and pagination state for one list, plus the field set searched and
/// an optional ordering. `apply` runs filter, then order, then paginate.
#[derive(Clone)]
pub struct ListControls<T> {
    query: String,
    pagination: PaginationState,
    fields: FieldsFn<T>,
    order: Option<OrderFn<T>>,
}

impl<T: Clone> ListControls<T> {
    pub fn new(fields: FieldsFn<T>, items_per_page: usize) -> Self {
        Self {
            query: String::new(),
            pagination: PaginationState::new(items_per_page),
            fields,
            order: None,
        }
    }

    pub fn with_order(mut self, order: OrderFn<T>) -> Self {
        self.order = Some(order);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pagination.reset();
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.pagination.set_items_per_page(items_per_page);
    }

    /// Back to page 1, for filter changes that live outside the query.
    pub fn reset_page(&mut self) {
        self.pagination.reset();
    }

    /// Moves to `page`, clamped against the filtered size of `items`.
    pub fn set_page(&mut self, page: usize, items: &[T]) {
        let total = self.filtered(items).len();
        self.pagination.set_page(page, total);
    }

    pub fn filtered(&self, items: &[T]) -> Vec<T> {
        let mut rows = filter_by_query(items, &self.query, self.fields);
        if let Some(order) = self.order {
            order(&mut rows);
        }
        rows
    }

    pub fn apply(&mut self, items: &[T]) -> Page<T> {
        let rows = self.filtered(items);
        self.pagination.sync(rows.len());
        Page {
            items: self.pagination.page_of(&rows).to_vec(),
            total_items: rows.len(),
            total_pages: self.pagination.total_pages(rows.len()),
            current_page: self.pagination.current_page,
            items_per_page: self.pagination.items_per_page,
            range: self.pagination.display_range(rows.len()),
        }
    }
}
