//! Response envelopes shared by the admin endpoints

use serde::{Deserialize, Serialize};

/// List response: one page of items plus the unfiltered total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
    pub total: i64,
}

/// Single-item response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEnvelope<T> {
    pub data: T,
}

/// Build a `Content-Range` value such as `users 0-24/30`.
///
/// The end index is inclusive and never drops below zero, so an empty
/// first page reads `users 0-0/0`.
pub fn content_range(resource: &str, offset: i64, returned: usize, total: i64) -> String {
    let end = (offset + returned as i64 - 1).max(0);
    format!("{} {}-{}/{}", resource, offset, end, total)
}
