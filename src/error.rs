//! Error types for quicklist

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quicklist
#[derive(Debug, Error)]
pub enum QuickListError {
    #[error("Not a quicklist directory: {0}")]
    NotInitialized(PathBuf),

    #[error("Invalid entry: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for QuickListError {
    fn from(e: std::io::Error) -> Self {
        QuickListError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for QuickListError {
    fn from(e: serde_json::Error) -> Self {
        QuickListError::Storage(format!("serialization failed: {}", e))
    }
}

impl QuickListError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuickListError::NotInitialized(_) => 2,
            QuickListError::Validation(_) => 3,
            QuickListError::Storage(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuickListError::NotInitialized(path) => {
                format!(
                    "Not a quicklist directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'quicklist init' in this directory to create a workspace\n\
                    • Navigate to an existing quicklist directory\n\
                    • Set QUICKLIST_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            QuickListError::Validation(msg) => {
                format!(
                    "Invalid entry: {}\n\n\
                    Entries need some visible text, e.g.:\n\
                    quicklist add \"Buy milk\"",
                    msg
                )
            }
            QuickListError::Storage(msg) => {
                format!(
                    "Storage error: {}\n\n\
                    Suggestions:\n\
                    • Check that the .quicklist/storage directory is writable\n\
                    • Check free disk space",
                    msg
                )
            }
            QuickListError::Config(msg) => {
                if msg.contains("Invalid list") {
                    format!(
                        "{}\n\n\
                        Valid lists: quick, mood\n\
                        Example: quicklist config default_list mood",
                        msg
                    )
                } else if msg.contains("Invalid mood") {
                    format!(
                        "{}\n\n\
                        Valid moods: happy, sad, angry, calm, excited, tired\n\
                        Example: quicklist mood happy",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuickListError
pub type Result<T> = std::result::Result<T, QuickListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_initialized_suggestion() {
        let err = QuickListError::NotInitialized(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("quicklist init"));
        assert!(msg.contains("QUICKLIST_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_validation_example() {
        let err = QuickListError::Validation("text is empty".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("text is empty"));
        assert!(msg.contains("quicklist add"));
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: QuickListError = io.into();
        assert!(matches!(err, QuickListError::Storage(_)));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_config_invalid_list_suggestions() {
        let err = QuickListError::Config("Invalid list: xyz".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("quick, mood"));
        assert!(msg.contains("quicklist config default_list mood"));
    }

    #[test]
    fn test_config_invalid_mood_suggestions() {
        let err = QuickListError::Config("Invalid mood: 'meh'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("happy, sad"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(QuickListError::NotInitialized(PathBuf::new()).exit_code(), 2);
        assert_eq!(QuickListError::Validation(String::new()).exit_code(), 3);
        assert_eq!(QuickListError::Unsupported(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = QuickListError::Unsupported("toggle on mood journal".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Unsupported operation: toggle on mood journal");
    }
}
