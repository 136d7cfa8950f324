//! # fga-format
//!
//! Wire and output types for managing stores on an OpenFGA server.
//!
//! This crate provides:
//! - Request and response bodies for the store endpoints
//! - The canonical output documents printed by the CLI
//! - Second-precision UTC timestamp encoding
//!
//! ## Example
//!
//! ```rust
//! use fga_format::{Store, StoreList};
//!
//! let list = StoreList { stores: Vec::<Store>::new() };
//! assert_eq!(serde_json::to_string(&list).unwrap(), r#"{"stores":[]}"#);
//! ```

mod store;
pub mod timestamp;

pub use store::*;

/// Maximum number of list pages fetched before aggregation stops.
///
/// With the server's default page size this caps a listing at roughly 1000 stores.
pub const MAX_STORES_PAGES_LENGTH: usize = 20;

/// Path of the stores collection, relative to the API root.
pub const STORES_PATH: &str = "stores";
