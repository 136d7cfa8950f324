//! # fga-client
//!
//! The client capability consumed by the store commands, plus a blocking
//! HTTP implementation of it.
//!
//! Commands only depend on [`SdkClient`], so tests can hand them a fake
//! while the binary hands them an [`HttpClient`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use fga_client::{ClientConfig, HttpClient, SdkClient};
//! use fga_format::ListStoresOptions;
//!
//! let config = ClientConfig::new("http://localhost:8080")?;
//! let client = HttpClient::new(config)?;
//! let page = client.list_stores(&ListStoresOptions::default())?;
//! println!("{} store(s) on the first page", page.stores.len());
//! # Ok::<(), fga_client::ClientError>(())
//! ```

mod config;
mod error;
mod http;

pub use config::*;
pub use error::*;
pub use http::*;

use fga_format::{CreateStoreRequest, CreateStoreResponse, ListStoresOptions, ListStoresResponse};

/// The store operations a server exposes.
///
/// Each call performs exactly one request; implementations must not retry.
pub trait SdkClient {
    /// Create a store.
    fn create_store(&self, body: &CreateStoreRequest) -> ClientResult<CreateStoreResponse>;

    /// Fetch one page of stores.
    fn list_stores(&self, options: &ListStoresOptions) -> ClientResult<ListStoresResponse>;
}
