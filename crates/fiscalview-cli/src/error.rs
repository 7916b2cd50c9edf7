use fiscalview_core::FetchError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] fiscalview_core::ValidationError),

    #[error("usage: {0}")]
    Usage(String),

    #[error("{}", .0.message())]
    Fetch(FetchError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A page could not be drawn; details go to the log only.
    #[error("{FALLBACK_MESSAGE}")]
    Render,
}

/// Shown instead of a page whenever drawing it fails.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again later.";

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Usage(_) => 2,
            Self::Fetch(_) => 3,
            Self::Serialization(_) => 4,
            Self::Render => 5,
            Self::Io(_) => 10,
        }
    }
}
