//! List command - Fetch every page of stores and print them as one document.

use anyhow::Result;
use fga_client::SdkClient;
use fga_format::{ListStoresOptions, StoreList};
use std::num::NonZeroUsize;
use tracing::debug;

use super::StoresError;

const ACTION: &str = "list stores";

/// Follow the continuation cursor until the server runs out of pages or
/// `max_pages` pages have been fetched, and return all stores as canonical JSON.
///
/// Hitting the page cap is not an error; any stores past it are silently left
/// out. A failure on any page discards the pages fetched before it.
pub fn list_stores(
    client: &impl SdkClient,
    max_pages: NonZeroUsize,
) -> Result<String, StoresError> {
    let mut stores = Vec::new();
    let mut continuation_token = String::new();
    let mut page_index = 0;

    loop {
        let options = ListStoresOptions::after(continuation_token);
        let page = client
            .list_stores(&options)
            .map_err(StoresError::remote(ACTION))?;

        let next_token = page.next_token().map(str::to_owned);
        page_index += 1;
        debug!(
            page = page_index,
            stores = page.stores.len(),
            more = next_token.is_some(),
            "fetched stores page"
        );
        stores.extend(page.stores);

        match next_token {
            None => break,
            Some(_) if page_index >= max_pages.get() => {
                debug!(
                    max_pages = max_pages.get(),
                    "page limit reached, remaining stores not fetched"
                );
                break;
            }
            Some(token) => continuation_token = token,
        }
    }

    serde_json::to_string(&StoreList { stores }).map_err(StoresError::serialization(ACTION))
}

pub fn run(client: &impl SdkClient, max_pages: NonZeroUsize) -> Result<()> {
    let output = list_stores(client, max_pages)?;
    println!("{output}");
    Ok(())
}
