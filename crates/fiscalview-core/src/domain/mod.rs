//! # Domain Models
//!
//! Canonical types for annual financial statements.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`FinancialRecord`] | One fiscal-year row (date, revenue, net income, ...) |
//! | [`FiscalDate`] | Calendar date of a fiscal period end |
//! | [`Symbol`] | Validated ticker used to address the provider |
//!
//! Records are immutable values: the query engine only re-slices and
//! reorders them, it never edits a row.

mod fiscal_date;
mod record;
mod symbol;

pub use fiscal_date::FiscalDate;
pub use record::FinancialRecord;
pub use symbol::Symbol;
