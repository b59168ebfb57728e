//! Error types for cardmeta

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the cardmeta application
#[derive(Debug, Error)]
pub enum CardmetaError {
    #[error("Not a cardmeta site: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Context error: {0}")]
    Context(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Labels error: {0}")]
    Labels(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CardmetaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CardmetaError::NotSiteDirectory(_) => 2,
            CardmetaError::Context(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CardmetaError::NotSiteDirectory(path) => {
                format!(
                    "Not a cardmeta site: {}\n\n\
                    Suggestions:\n\
                    • Run 'cardmeta init' in this directory to create a new site\n\
                    • Navigate to an existing cardmeta site\n\
                    • Set CARDMETA_ROOT environment variable to your site path",
                    path.display()
                )
            }
            CardmetaError::Context(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Context files must be .json or .toml page exports\n\
                    • Check the file for syntax errors\n\
                    • Unknown fields are ignored, so a full host export is fine",
                    msg
                )
            }
            CardmetaError::Config(msg) => {
                if msg.contains("Invalid handle") {
                    format!(
                        "{}\n\n\
                        Handles are 1-15 letters, digits or underscores, with an optional leading @\n\
                        Examples: cardmeta config social_handle acme\n\
                                  cardmeta config social_handle @acme",
                        msg
                    )
                } else if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: social_handle, base_url, locale\n\
                        Example: cardmeta config base_url https://forum.example.com/images/default.png",
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

/// Result type using CardmetaError
pub type Result<T> = std::result::Result<T, CardmetaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_site_directory_suggestion() {
        let err = CardmetaError::NotSiteDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("cardmeta init"));
        assert!(msg.contains("CARDMETA_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_context_error_suggestions() {
        let err = CardmetaError::Context("Unsupported context format: page.yml".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("page.yml"));
        assert!(msg.contains(".json or .toml"));
    }

    #[test]
    fn test_config_invalid_handle_suggestions() {
        let err = CardmetaError::Config("Invalid handle: 'way too long for twitter'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("1-15 letters"));
        assert!(msg.contains("cardmeta config social_handle"));
    }

    #[test]
    fn test_config_unknown_key_suggestions() {
        let err = CardmetaError::Config("Unknown config key: 'handle'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("social_handle, base_url, locale"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CardmetaError::NotSiteDirectory(PathBuf::from("/tmp")).exit_code(),
            2
        );
        assert_eq!(CardmetaError::Context("bad".to_string()).exit_code(), 3);
        assert_eq!(CardmetaError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = CardmetaError::Labels("missing table".to_string());
        let msg = err.display_with_suggestions();
        // Thiserror prefixes with the error type
        assert_eq!(msg, "Labels error: missing table");
    }
}
