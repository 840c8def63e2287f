//! Record model for posters and judge scores.
//!
//! Both record kinds are immutable snapshots delivered by the data source.
//! Field access by wire name goes through the [`Record`] trait so that the
//! sort engine and the export codec work over typed records and raw JSON
//! objects alike.

mod enums;
mod poster;
mod score;
mod value;

pub use enums::*;
pub use poster::*;
pub use score::*;
pub use value::*;
