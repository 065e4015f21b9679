//! Error types for Brewguide
//!
//! Almost nothing in Brewguide can fail. The errors below cover the places
//! where something is read from disk: the settings file and image assets.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Brewguide
#[derive(Debug, Error)]
pub enum BrewError {
    // ========================================================================
    // IO Errors
    // ========================================================================
    /// Settings file could not be read
    #[error("Failed to read settings file '{path}': {message}")]
    SettingsRead { path: PathBuf, message: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Settings file is not valid TOML or has the wrong shape
    #[error("Failed to parse settings: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Settings parsed but hold an unusable value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Asset Errors
    // ========================================================================
    /// Image asset missing from the asset root
    #[error("Asset not found: {0}")]
    AssetNotFound(PathBuf),
}

impl BrewError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        BrewError::InvalidConfig(msg.into())
    }

    /// Check if this error came from the settings layer
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            BrewError::SettingsRead { .. } | BrewError::ConfigParse(_) | BrewError::InvalidConfig(_)
        )
    }
}

/// Result type alias using BrewError
pub type BrewResult<T> = Result<T, BrewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BrewError::invalid_config("chain_length must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: chain_length must be at least 1"
        );
    }

    #[test]
    fn test_error_categories() {
        assert!(BrewError::invalid_config("x").is_config());
        assert!(!BrewError::AssetNotFound(PathBuf::from("bean.png")).is_config());
    }

    #[test]
    fn test_settings_read_is_config_error() {
        let err = BrewError::SettingsRead {
            path: PathBuf::from("brewguide.toml"),
            message: "permission denied".to_string(),
        };
        assert!(err.is_config());
        assert_eq!(
            err.to_string(),
            "Failed to read settings file 'brewguide.toml': permission denied"
        );
    }
}
