//! In-memory query engine: range filters, stable sorting, and pagination.
//!
//! Every function here is total and pure. Inputs are borrowed, outputs are
//! new sequences (or sub-slices), and nothing is retained between calls.

mod filter;
mod page;
mod sort;

pub use filter::{
    filter, parse_amount_input, parse_date_input, FilterBound, FilterEdit, FilterSpec,
};
pub use page::{clamp_page, page_count, paginate, PageState, PAGE_SIZE};
pub use sort::{sort, toggle_sort, Comparator, SortDirection, SortField, SortSpec};
