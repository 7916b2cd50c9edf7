use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use tracing::info;

use super::{decode_records, FetchError, FetchOutcome, RecordSource};

/// Statement rows read from a JSON file shaped like the provider response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<FetchOutcome, FetchError>> + Send + 'a>> {
        Box::pin(async move {
            let body = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
                FetchError::io(format!("failed to read {}: {e}", self.path.display()))
            })?;
            let outcome = decode_records(&body)?;
            info!(
                path = %self.path.display(),
                records = outcome.records.len(),
                skipped = outcome.skipped,
                "loaded income statements from file"
            );
            Ok(outcome)
        })
    }
}
