//! Pagination: slicing a sorted sequence and describing where the slice sits

use serde::Serialize;

/// One page of records plus the size of the sequence it was cut from
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records on this page
    pub items: Vec<T>,

    /// Number of records before slicing
    pub total: usize,
}

/// Slice `sorted` into page `page` of `page_size` records
///
/// `total` is taken before any skip/take. Without a page size the whole
/// sequence is returned. A page past the end yields no items and the same
/// total. Inputs are assumed validated (`page_size > 0`); a zero page size
/// simply produces an empty page.
pub fn paginate<T>(sorted: Vec<T>, page: usize, page_size: Option<usize>) -> Page<T> {
    let total = sorted.len();

    let Some(size) = page_size else {
        return Page {
            items: sorted,
            total,
        };
    };

    let offset = page.saturating_mul(size);
    let items = if offset >= total {
        Vec::new()
    } else {
        sorted.into_iter().skip(offset).take(size).collect()
    };

    Page { items, total }
}

/// Pagination metadata
///
/// Derived from a response's `total` and the request's page controls.
/// Pages are zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (starts at 0)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        // Ensure page_size is at least 1 to avoid division by zero
        let page_size = page_size.max(1);
        let total_pages = total.div_ceil(page_size);
        let start = page.saturating_mul(page_size);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: start.saturating_add(page_size) < total,
            has_prev: page > 0,
        }
    }
}
