use serde::{Deserialize, Serialize};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// 1-based page cursor over the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub index: usize,
    pub size: usize,
}

impl PageState {
    pub const fn first() -> Self {
        Self {
            index: 1,
            size: PAGE_SIZE,
        }
    }

    pub const fn page_count(self, len: usize) -> usize {
        page_count(len, self.size)
    }

    /// Same cursor moved to `index`, kept within `[1, page_count(len)]`.
    pub fn moved_to(self, index: usize, len: usize) -> Self {
        Self {
            index: clamp_page(index, self.page_count(len)),
            ..self
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::first()
    }
}

/// Number of pages needed for `len` rows; never less than one.
pub const fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 || len == 0 {
        return 1;
    }
    len.div_ceil(page_size)
}

pub fn clamp_page(index: usize, page_count: usize) -> usize {
    index.clamp(1, page_count.max(1))
}

/// Rows of page `page_index` (1-based).
///
/// Out-of-range input yields an empty page rather than a panic.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    if page_index == 0 || page_size == 0 {
        return &[];
    }
    let start = (page_index - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
