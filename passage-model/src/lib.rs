//! Page-tagged passage records and their JSON encoding.

use serde::{Deserialize, Serialize};

/// A passage of page text, tagged with the page it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageRecord {
    /// 1-based page number of the source page.
    pub page: u32,
    /// Passage text, trimmed and never empty.
    pub text: String,
}

impl PassageRecord {
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self { page, text: text.into() }
    }
}

/// Compact single-line JSON array of records.
pub fn to_json_line(records: &[PassageRecord]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

/// Indented JSON, for humans.
pub fn to_json_pretty(records: &[PassageRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
