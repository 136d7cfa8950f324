//! Store records and the request/response bodies of the store endpoints.
//!
//! Field declaration order is the serialization order. Every struct that is
//! printed by the CLI declares its fields alphabetically, which keeps the
//! output canonical without a sorting pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// An isolated authorization-data container owned by the server.
///
/// Every field is optional on the wire; absent fields are left out of the
/// serialized output instead of being written as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Store {
    /// When the store was created
    #[serde(
        default,
        serialize_with = "timestamp::serialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Set once the store has been soft-deleted
    #[serde(
        default,
        serialize_with = "timestamp::serialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted_at: Option<DateTime<Utc>>,
    /// Server-assigned opaque identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Caller-supplied name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When the store was last modified
    #[serde(
        default,
        serialize_with = "timestamp::serialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of a create-store request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateStoreRequest {
    pub name: String,
}

impl CreateStoreRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The store returned by a create-store call.
pub type CreateStoreResponse = Store;

/// Query options for a single list-stores call.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ListStoresOptions {
    /// Cursor from the previous page; blank means "first page"
    #[serde(skip_serializing_if = "is_blank")]
    pub continuation_token: Option<String>,
    /// Records per page; the server default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ListStoresOptions {
    /// Options for the page following `continuation_token`.
    pub fn after(continuation_token: impl Into<String>) -> Self {
        Self {
            continuation_token: Some(continuation_token.into()),
            page_size: None,
        }
    }
}

fn is_blank(token: &Option<String>) -> bool {
    token.as_deref().map_or(true, str::is_empty)
}

/// One page of a store listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListStoresResponse {
    /// Stores on this page, in server order
    #[serde(default)]
    pub stores: Vec<Store>,
    /// Cursor for the next page; absent or empty on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
}

impl ListStoresResponse {
    /// The cursor for the next page, or `None` if this is the last page.
    pub fn next_token(&self) -> Option<&str> {
        self.continuation_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

/// Aggregated listing printed by `stores list`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreList {
    /// All fetched stores; serialized as `[]` when empty
    pub stores: Vec<Store>,
}
