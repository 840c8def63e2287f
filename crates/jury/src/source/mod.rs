//! External data source for posters, judges and scores.
//!
//! Every call is a single request/response: it either delivers a complete
//! record set or fails with [`crate::Error::SourceUnavailable`]. Nothing is
//! retried here.

#[cfg(feature = "api")]
mod client;
mod submission;

#[cfg(feature = "api")]
pub use client::ApiClient;
pub use submission::ScoreSubmission;

use serde_json::{Map, Value as JsonValue};

use crate::error::Result;
use crate::record::{PosterRecord, ScoreRecord};

/// Raw score object as sent by the data source, keys in wire order
pub type RawScore = Map<String, JsonValue>;

pub trait DataSource {
    fn fetch_posters(&self) -> Result<Vec<PosterRecord>>;

    fn fetch_scores(&self) -> Result<Vec<ScoreRecord>>;

    /// Scores without schema mapping, used for export
    fn fetch_raw_scores(&self) -> Result<Vec<RawScore>>;

    fn fetch_judges(&self) -> Result<Vec<String>>;

    fn submit_score(&self, submission: &ScoreSubmission) -> Result<()>;
}
