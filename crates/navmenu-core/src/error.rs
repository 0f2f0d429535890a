//! Error types for navmenu-core
//!
//! The menu state machine itself never fails. Everything fallible lives in
//! configuration loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for navmenu operations
#[derive(Error, Debug)]
pub enum NavError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported config format for {path} (expected .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse JSON in {path}: {message}")]
    JsonParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse YAML in {path}: {message}")]
    YamlParse {
        path: PathBuf,
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl NavError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        NavError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Actionable hint for the user, when one exists
    pub fn suggestion(&self) -> Option<String> {
        match self {
            NavError::FileNotFound { path } => {
                Some(format!("Check if file exists: ls {}", path.display()))
            }
            NavError::FileRead { path, .. } => {
                Some(format!("Check permissions: chmod +r {}", path.display()))
            }
            NavError::UnsupportedFormat { .. } => {
                Some("Rename the file with a .json, .yaml or .yml extension".to_string())
            }
            NavError::JsonParse { .. } => {
                Some("Validate JSON syntax with: jq . <file>".to_string())
            }
            NavError::YamlParse { .. } => {
                Some("Print a valid template with: navmenu default-config --format yaml".to_string())
            }
            NavError::InvalidConfig { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_for_missing_file() {
        let err = NavError::FileNotFound {
            path: PathBuf::from("/tmp/nav.yaml"),
        };
        assert_eq!(
            err.suggestion().as_deref(),
            Some("Check if file exists: ls /tmp/nav.yaml")
        );
    }

    #[test]
    fn test_invalid_config_has_no_suggestion() {
        let err = NavError::invalid("title must not be empty");
        assert!(err.suggestion().is_none());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: title must not be empty"
        );
    }
}
