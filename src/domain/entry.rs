//! List entry model

use serde::{Deserialize, Serialize};

/// One list item. `text` doubles as the identity key for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Entry {
    pub fn new(text: impl Into<String>, completed: bool) -> Self {
        Entry {
            text: text.into(),
            completed,
        }
    }

    /// Entry with the completion flag cleared
    pub fn pending(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }
}
