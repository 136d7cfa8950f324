//! Store commands - create a store, list all stores.
//!
//! Each command is split into a pure operation that returns the serialized
//! output, and a `run` wrapper that prints it.

use fga_client::ClientError;
use thiserror::Error;

pub mod create;
pub mod list;

/// Errors from a store command.
#[derive(Debug, Error)]
pub enum StoresError {
    /// The server call failed
    #[error("failed to {action} due to {source}")]
    Remote {
        action: &'static str,
        #[source]
        source: ClientError,
    },

    /// The result could not be encoded
    #[error("failed to {action} due to {source}")]
    Serialization {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl StoresError {
    fn remote(action: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |source| Self::Remote { action, source }
    }

    fn serialization(action: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| Self::Serialization { action, source }
    }
}
