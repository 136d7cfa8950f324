//! Create command - Create a store and print it.

use anyhow::Result;
use fga_client::SdkClient;
use fga_format::CreateStoreRequest;
use tracing::debug;

use super::StoresError;

const ACTION: &str = "create store";

/// Create a store named `name` and return it as canonical JSON.
///
/// The name is passed through as-is; the server decides whether it is valid.
pub fn create(client: &impl SdkClient, name: &str) -> Result<String, StoresError> {
    let response = client
        .create_store(&CreateStoreRequest::new(name))
        .map_err(StoresError::remote(ACTION))?;

    debug!(id = response.id.as_deref().unwrap_or_default(), "store created");

    serde_json::to_string(&response).map_err(StoresError::serialization(ACTION))
}

pub fn run(client: &impl SdkClient, name: &str) -> Result<()> {
    let output = create(client, name)?;
    println!("{output}");
    Ok(())
}
