//! # jury
//!
//! Core library for collecting and reporting juried poster scores.
//!
//! This crate provides:
//! - Poster and score record types
//! - Grouping by session and by submission date
//! - Per-bucket sorting with toggling direction
//! - Collapse/sort display state, with persisted session preferences
//! - CSV and NDJSON export
//! - Poster search
//! - A blocking client for the judging REST endpoints
//!
//! ## Feature Flags
//!
//! - `api` (default): Enables [`ApiClient`], the HTTP data source.

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod group;
pub mod prelude;
pub mod record;
pub mod search;
pub mod sort;
pub mod source;
pub mod view;

pub use config::{JuryConfig, JuryConfigBuilder};
pub use display::{
    COLLAPSED_SESSIONS_KEY, DisplayState, FileStore, KeyValueStore, MemoryStore,
    PersistentDisplayState,
};
pub use error::{Error, Result};
pub use export::{
    CSV_FILE_NAME, CSV_MIME_TYPE, CsvExporter, ExportFormat, JsonExporter, NDJSON_MIME_TYPE,
    encode_csv, encode_ndjson,
};
pub use group::{Bucket, group_by, group_by_date, group_by_session};
pub use record::{
    Criterion, FieldValue, PosterRecord, Record, Role, ScoreRecord, Session, rating_label,
};
pub use search::filter_posters;
pub use sort::{SortColumn, SortDirection, SortState, sort_records};
#[cfg(feature = "api")]
pub use source::ApiClient;
pub use source::{DataSource, RawScore, ScoreSubmission};
pub use view::{GroupView, ResultsView, SessionsView};
