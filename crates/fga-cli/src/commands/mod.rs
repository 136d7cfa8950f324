//! CLI command implementations.

pub mod stores;
