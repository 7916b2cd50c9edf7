//! View controller: the session state and its transitions.
//!
//! [`ViewState`] is an immutable value. Every user action or fetch completion
//! is an [`Event`], and [`reduce`] maps `(state, event)` to the next state.
//! Presentation code renders [`ViewState::view`] and feeds events back.
//!
//! Fetch completions are applied in the order they arrive. Two overlapping
//! fetches are not deduplicated: whichever completes last determines the
//! record set.

use serde::Serialize;
use tracing::debug;

use crate::query::{self, FilterEdit, FilterSpec, PageState, SortField, SortSpec};
use crate::source::{FetchError, FetchOutcome};
use crate::FinancialRecord;

/// Progress of the most recent fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready {
        skipped: usize,
    },
    Failed {
        code: &'static str,
        message: String,
    },
}

impl FetchStatus {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    FetchStarted,
    /// The single completion event of a fetch.
    FetchCompleted(Result<FetchOutcome, FetchError>),
    RecordsArrived(Vec<FinancialRecord>),
    FetchFailed(FetchError),
    EditFilter(FilterEdit),
    ApplyFilters,
    SortBy(SortField),
    NextPage,
    PreviousPage,
    JumpToPage(usize),
}

/// Everything the session knows: the loaded rows, the derived visible
/// sequence, and the user's filter, sort, and page choices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    records: Vec<FinancialRecord>,
    filtered: Vec<FinancialRecord>,
    filter: FilterSpec,
    sort: SortSpec,
    page: PageState,
    status: FetchStatus,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every record from the last successful load.
    pub fn records(&self) -> &[FinancialRecord] {
        &self.records
    }

    /// Filtered (and possibly sorted) sequence that pages are cut from.
    pub fn filtered(&self) -> &[FinancialRecord] {
        &self.filtered
    }

    pub const fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub const fn sort(&self) -> SortSpec {
        self.sort
    }

    pub const fn page(&self) -> PageState {
        self.page
    }

    pub const fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn page_count(&self) -> usize {
        self.page.page_count(self.filtered.len())
    }

    /// Rows of the current page.
    pub fn visible(&self) -> &[FinancialRecord] {
        query::paginate(&self.filtered, self.page.index, self.page.size)
    }

    pub fn view(&self) -> PageView<'_> {
        let page_count = self.page_count();
        PageView {
            rows: self.visible(),
            page: self.page.index,
            page_count,
            page_size: self.page.size,
            filtered_count: self.filtered.len(),
            total_count: self.records.len(),
            has_previous: self.page.index > 1,
            has_next: self.page.index < page_count,
            sort: self.sort,
            filter: self.filter,
            status: &self.status,
        }
    }
}

/// Next state after `event`.
pub fn reduce(state: ViewState, event: Event) -> ViewState {
    match event {
        Event::FetchStarted => ViewState {
            status: FetchStatus::Loading,
            ..state
        },
        Event::FetchCompleted(Ok(outcome)) => {
            records_arrived(state, outcome.records, outcome.skipped)
        }
        Event::FetchCompleted(Err(error)) | Event::FetchFailed(error) => fetch_failed(state, error),
        Event::RecordsArrived(records) => records_arrived(state, records, 0),
        Event::EditFilter(edit) => ViewState {
            filter: state.filter.with_edit(edit),
            ..state
        },
        Event::ApplyFilters => {
            // The active sort is kept but not re-applied to the new subset.
            let filtered = query::filter(&state.records, &state.filter);
            debug!(
                kept = filtered.len(),
                total = state.records.len(),
                "applied filters"
            );
            ViewState {
                filtered,
                page: PageState {
                    index: 1,
                    ..state.page
                },
                ..state
            }
        }
        Event::SortBy(field) => {
            let sort = query::toggle_sort(state.sort, field);
            let filtered = query::sort(&state.filtered, sort.field, sort.direction);
            debug!(field = %sort.field, direction = ?sort.direction, "sorted rows");
            ViewState {
                filtered,
                sort,
                ..state
            }
        }
        Event::NextPage => {
            let target = state.page.index.saturating_add(1);
            move_page(state, target)
        }
        Event::PreviousPage => {
            let target = state.page.index.saturating_sub(1);
            move_page(state, target)
        }
        Event::JumpToPage(target) => move_page(state, target),
    }
}

fn records_arrived(state: ViewState, records: Vec<FinancialRecord>, skipped: usize) -> ViewState {
    debug!(records = records.len(), skipped, "records arrived");
    ViewState {
        filtered: records.clone(),
        records,
        page: PageState {
            index: 1,
            ..state.page
        },
        status: FetchStatus::Ready { skipped },
        ..state
    }
}

fn fetch_failed(state: ViewState, error: FetchError) -> ViewState {
    debug!(code = error.code(), "fetch failed");
    ViewState {
        status: FetchStatus::Failed {
            code: error.code(),
            message: error.message().to_owned(),
        },
        ..state
    }
}

fn move_page(state: ViewState, target: usize) -> ViewState {
    let page = state.page.moved_to(target, state.filtered.len());
    ViewState { page, ..state }
}

/// Read-only projection handed to renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<'a> {
    pub rows: &'a [FinancialRecord],
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub sort: SortSpec,
    pub filter: FilterSpec,
    pub status: &'a FetchStatus,
}

impl PageView<'_> {
    /// "Page X of Y".
    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.page, self.page_count)
    }
}
