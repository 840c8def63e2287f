use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Data source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Nothing to export: the record set is empty")]
    EmptyExport,

    #[error("Invalid score submission: {0}")]
    InvalidSubmission(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if this error came from the external data source
    pub fn is_source_error(&self) -> bool {
        matches!(self, Error::SourceUnavailable(_))
    }
}
