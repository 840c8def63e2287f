//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod export;
pub mod judges;
pub mod results;
pub mod sessions;
pub mod submit;
