//! Canonical timestamp encoding.
//!
//! The server reports RFC 3339 timestamps with arbitrary sub-second precision.
//! Everything this crate writes uses `YYYY-MM-DDTHH:MM:SSZ` instead, so output
//! stays byte-stable across servers.

use chrono::{DateTime, Utc};
use serde::Serializer;

/// Output format for all timestamps, UTC with second precision.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Render a timestamp in the canonical form.
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(FORMAT).to_string()
}

/// `serialize_with` helper for `DateTime<Utc>` fields.
pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&ts.format(FORMAT))
}

/// `serialize_with` helper for `Option<DateTime<Utc>>` fields.
///
/// Pair with `skip_serializing_if = "Option::is_none"`; a `None` that does
/// reach the serializer is written as `null`.
pub fn serialize_option<S>(ts: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match ts {
        Some(ts) => serialize(ts, serializer),
        None => serializer.serialize_none(),
    }
}
