//! Record sources: where the raw statement rows come from.
//!
//! A [`RecordSource`] performs one fetch and reports either the decoded
//! records or a single [`FetchError`]. Network failures and schema failures
//! are distinct kinds so callers can tell "could not reach the provider" from
//! "the provider answered with something that is not a list of rows".
//!
//! | Source | Description |
//! |--------|-------------|
//! | [`FmpSource`] | Financial Modeling Prep annual income statements over HTTP |
//! | [`JsonFileSource`] | The same payload read from a local file |

mod file;
mod fmp;

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::retry::TRANSIENT_STATUSES;
use crate::FinancialRecord;

pub use file::JsonFileSource;
pub use fmp::{FmpSource, SourceConfig, DEFAULT_BASE_URL};

/// Failure classification for a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    /// Connection, timeout, or body read failure.
    Transport,
    /// The provider answered with a non-2xx status.
    Status,
    /// The body was not valid JSON.
    Decode,
    /// Valid JSON, but not an array of rows.
    Schema,
    /// Local file could not be read.
    Io,
}

/// Structured fetch error carrying the user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    kind: FetchErrorKind,
    message: String,
    status: Option<u16>,
    retryable: bool,
}

impl FetchError {
    pub fn transport(message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind: FetchErrorKind::Transport,
            message: message.into(),
            status: None,
            retryable,
        }
    }

    /// Non-success HTTP status. Retryable when the status is transient.
    pub fn status(status: u16) -> Self {
        Self {
            kind: FetchErrorKind::Status,
            message: format!("API request failed with status {status}"),
            status: Some(status),
            retryable: TRANSIENT_STATUSES.contains(&status),
        }
    }

    /// Overrides the retry classification, e.g. with a caller's status list.
    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Decode,
            message: message.into(),
            status: None,
            retryable: false,
        }
    }

    pub fn schema() -> Self {
        Self {
            kind: FetchErrorKind::Schema,
            message: String::from("Unexpected API response format"),
            status: None,
            retryable: false,
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: FetchErrorKind::Io,
            message: message.into(),
            status: None,
            retryable: false,
        }
    }

    pub const fn kind(&self) -> FetchErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn http_status(&self) -> Option<u16> {
        self.status
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    /// Network-side failures, as opposed to payload or local failures.
    pub const fn is_network(&self) -> bool {
        matches!(self.kind, FetchErrorKind::Transport | FetchErrorKind::Status)
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            FetchErrorKind::Transport => "fetch.transport",
            FetchErrorKind::Status => "fetch.status",
            FetchErrorKind::Decode => "fetch.decode",
            FetchErrorKind::Schema => "fetch.schema",
            FetchErrorKind::Io => "fetch.io",
        }
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FetchError {}

/// Records decoded from one successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    pub records: Vec<FinancialRecord>,
    /// Array elements that could not be read as a record and were dropped.
    pub skipped: usize,
}

/// Upstream provider of raw statement rows.
pub trait RecordSource: Send + Sync {
    /// Human-readable origin, safe to log (no credentials).
    fn describe(&self) -> String;

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<FetchOutcome, FetchError>> + Send + 'a>>;
}

/// Decode a provider body into records.
///
/// The only schema requirement is that the body is a JSON array. Elements
/// that are not readable rows are skipped and counted.
pub fn decode_records(body: &str) -> Result<FetchOutcome, FetchError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::decode(format!("response is not valid JSON: {e}")))?;

    let rows = match payload {
        Value::Array(rows) => rows,
        other => {
            if let Some(upstream) = other.get("Error Message").and_then(Value::as_str) {
                debug!(upstream, "provider returned an error object");
            }
            return Err(FetchError::schema());
        }
    };

    let mut outcome = FetchOutcome {
        records: Vec::with_capacity(rows.len()),
        skipped: 0,
    };
    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<FinancialRecord>(row) {
            Ok(record) => outcome.records.push(record),
            Err(error) => {
                warn!(index, %error, "skipping unreadable statement row");
                outcome.skipped += 1;
            }
        }
    }
    Ok(outcome)
}
