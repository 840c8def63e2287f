//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from jury.
//!
//! # Usage
//!
//! ```ignore
//! use jury::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Views: `ResultsView`, `SessionsView`, `GroupView`
//! - Records: `PosterRecord`, `ScoreRecord`, `Record`, `Session`
//! - Display state: `DisplayState`, `KeyValueStore`, `FileStore`
//! - Error handling: `Error`, `Result`

// Views
pub use crate::view::{GroupView, ResultsView, SessionsView};

// Error handling
pub use crate::error::{Error, Result};

// Records
pub use crate::record::{PosterRecord, Record, ScoreRecord, Session};

// Display state
pub use crate::display::{DisplayState, FileStore, KeyValueStore, MemoryStore};

// Sorting
pub use crate::sort::{SortColumn, SortDirection};

// Data source and export
pub use crate::export::ExportFormat;
pub use crate::source::{DataSource, ScoreSubmission};
