//! # fiscalview core
//!
//! Record model, query engine, and view controller for browsing annual
//! financial statements.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`controller`] | Session state and the `(state, event) -> state` reducer |
//! | [`domain`] | Domain models (FinancialRecord, FiscalDate, Symbol) |
//! | [`error`] | Validation errors |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`query`] | Filter, sort, and paginate engine |
//! | [`retry`] | Backoff policy for fetches |
//! | [`source`] | Record sources and fetch errors |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fiscalview_core::{reduce, Event, FmpSource, RecordSource, SortField, SourceConfig, ViewState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = FmpSource::new(SourceConfig::from_env());
//!     let mut state = reduce(ViewState::new(), Event::FetchStarted);
//!     state = reduce(state, Event::FetchCompleted(source.fetch().await));
//!     state = reduce(state, Event::SortBy(SortField::Revenue));
//!
//!     let view = state.view();
//!     println!("{} ({} rows)", view.indicator(), view.rows.len());
//! }
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Record Source  │────▶│ HTTP Client      │
//! └────────┬────────┘     └──────────────────┘
//!          │ FetchCompleted
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  reduce()       │────▶│ filter / sort    │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  PageView       │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Fetches return a [`FetchError`] whose kind separates network failures
//! from schema failures:
//!
//! ```rust
//! use fiscalview_core::{FetchError, FetchErrorKind};
//!
//! fn describe(error: &FetchError) -> &'static str {
//!     match error.kind() {
//!         FetchErrorKind::Transport | FetchErrorKind::Status => "provider unreachable",
//!         FetchErrorKind::Schema | FetchErrorKind::Decode => "unexpected payload",
//!         FetchErrorKind::Io => "local file unreadable",
//!     }
//! }
//! ```
//!
//! The query engine itself has no failure modes: filter, sort, and paginate
//! are defined for every input, including empty record sets.

pub mod controller;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod query;
pub mod retry;
pub mod source;

// Controller
pub use controller::{reduce, Event, FetchStatus, PageView, ViewState};

// Domain models
pub use domain::{FinancialRecord, FiscalDate, Symbol};

// Error types
pub use error::ValidationError;

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, ScriptedHttpClient,
};

// Query engine
pub use query::{
    filter, page_count, paginate, parse_amount_input, parse_date_input, sort, toggle_sort,
    FilterBound, FilterEdit, FilterSpec, PageState, SortDirection, SortField, SortSpec, PAGE_SIZE,
};

// Retry logic
pub use retry::{Backoff, RetryConfig, TRANSIENT_STATUSES};

// Record sources
pub use source::{
    decode_records, FetchError, FetchErrorKind, FetchOutcome, FmpSource, JsonFileSource,
    RecordSource, SourceConfig,
};
