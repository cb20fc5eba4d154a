//! JSON codec for stored entry sequences
//!
//! Stored layout is a single array per storage key:
//! `[{"text": "...", "completed": false}, ...]`.
//! A missing `completed` field decodes as `false`; unknown fields are ignored.

use crate::domain::Entry;
use crate::error::Result;

/// Encode entries as the stored JSON array
pub fn encode(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}

/// Decode a stored JSON array back into entries
pub fn decode(raw: &str) -> Result<Vec<Entry>> {
    Ok(serde_json::from_str(raw)?)
}
