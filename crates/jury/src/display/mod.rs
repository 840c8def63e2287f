//! Display state for grouped views.
//!
//! - **Display state**: per-bucket collapse flags and sort selection
//! - **Persisted state**: session collapse flags saved through a key/value store
//! - **Stores**: file-backed and in-memory key/value storage

mod persisted;
mod state;
mod store;

pub use persisted::*;
pub use state::*;
pub use store::*;
