//! Logical list names and their storage keys

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two lists a workspace keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// To-do items with a completion flag
    #[default]
    Quick,
    /// Timestamped mood log; completion is never used
    Mood,
}

impl ListKind {
    /// Key the list is stored under
    pub fn storage_key(&self) -> &'static str {
        match self {
            ListKind::Quick => "quickListItems",
            ListKind::Mood => "moodJournalEntries",
        }
    }

    /// Whether rows of this list can be marked complete
    pub fn supports_completion(&self) -> bool {
        matches!(self, ListKind::Quick)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ListKind::Quick => "quick",
            ListKind::Mood => "mood",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quick" => Ok(ListKind::Quick),
            "mood" => Ok(ListKind::Mood),
            _ => Err(format!(
                "Invalid list: '{}'. Valid lists are: quick, mood",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys() {
        assert_eq!(ListKind::Quick.storage_key(), "quickListItems");
        assert_eq!(ListKind::Mood.storage_key(), "moodJournalEntries");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(ListKind::from_str("quick").unwrap(), ListKind::Quick);
        assert_eq!(ListKind::from_str("MOOD").unwrap(), ListKind::Mood);
        assert!(ListKind::from_str("journal").is_err());
        assert!(ListKind::from_str("todo").is_err());
        let err = ListKind::from_str("groceries").unwrap_err();
        assert!(err.contains("Invalid list"));
    }

    #[test]
    fn test_completion_support() {
        assert!(ListKind::Quick.supports_completion());
        assert!(!ListKind::Mood.supports_completion());
    }

    #[test]
    fn test_serde_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            list: ListKind,
        }

        let s = toml::to_string(&Wrapper {
            list: ListKind::Mood,
        })
        .unwrap();
        assert!(s.contains("list = \"mood\""));

        let w: Wrapper = toml::from_str("list = \"quick\"").unwrap();
        assert_eq!(w.list, ListKind::Quick);
    }

    #[test]
    fn test_default_is_quick() {
        assert_eq!(ListKind::default(), ListKind::Quick);
    }
}
