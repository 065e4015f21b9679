//! Settings for Brewguide
//!
//! Everything is optional. Settings come from `brewguide.toml` in the working
//! directory (or the file named by `BREWGUIDE_CONFIG`). Any field left out
//! keeps its default, and a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{BrewError, BrewResult};

/// Default settings file name, looked up in the working directory
pub const SETTINGS_FILE: &str = "brewguide.toml";

/// Environment variable that overrides the settings file location
pub const SETTINGS_ENV: &str = "BREWGUIDE_CONFIG";

// ============================================================================
// Follow Animation
// ============================================================================

/// Tuning for the pointer-following marker chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowConfig {
    /// Number of markers in the chain
    pub chain_length: usize,
    /// Distance is divided by this to get the per-tick speed
    pub scale_factor: f32,
    /// Upper bound on the distance a marker moves in one tick
    pub max_speed: f32,
    /// Below this distance a marker has caught its target and stays put
    pub caught_epsilon: f32,
    /// Time between ticks in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            chain_length: 12,
            scale_factor: 5.0,
            max_speed: 10.0,
            caught_epsilon: 0.01,
            tick_interval_ms: 20,
        }
    }
}

impl FollowConfig {
    /// Tick period as a [`Duration`]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject values that would stall the chain or produce NaN positions
    pub fn validate(&self) -> BrewResult<()> {
        if self.chain_length == 0 {
            return Err(BrewError::invalid_config(
                "follow.chain_length must be at least 1",
            ));
        }
        // Below 1.0 a step can overshoot and the marker never settles.
        if !(self.scale_factor.is_finite() && self.scale_factor >= 1.0) {
            return Err(BrewError::invalid_config(
                "follow.scale_factor must be at least 1.0",
            ));
        }
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            return Err(BrewError::invalid_config(
                "follow.max_speed must be a positive number",
            ));
        }
        if !(self.caught_epsilon.is_finite() && self.caught_epsilon > 0.0) {
            return Err(BrewError::invalid_config(
                "follow.caught_epsilon must be a positive number",
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(BrewError::invalid_config(
                "follow.tick_interval_ms must be at least 1",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Window & Assets
// ============================================================================

/// Desktop window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Brewguide".to_string(),
            width: 1200.0,
            height: 800.0,
        }
    }
}

/// Where image assets are looked up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    pub root: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets/images"),
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub follow: FollowConfig,
    pub assets: AssetSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml(contents: &str) -> BrewResult<Self> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> BrewResult<Self> {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| BrewError::SettingsRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml(&contents)
    }

    /// Load settings, falling back to the defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Validate every section
    pub fn validate(&self) -> BrewResult<()> {
        self.follow.validate()?;
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(BrewError::invalid_config(
                "window.width and window.height must be positive",
            ));
        }
        Ok(())
    }
}

/// Settings file location: `$BREWGUIDE_CONFIG` if set, else `brewguide.toml`
pub fn settings_path() -> PathBuf {
    std::env::var_os(SETTINGS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.follow.chain_length, 12);
        assert_eq!(settings.follow.scale_factor, 5.0);
        assert_eq!(settings.follow.max_speed, 10.0);
        assert_eq!(settings.follow.tick_interval(), Duration::from_millis(20));
        assert_eq!(settings.assets.root, PathBuf::from("assets/images"));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_example_file_matches_defaults() {
        let example = include_str!("../../../brewguide.example.toml");
        assert_eq!(Settings::from_toml(example).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = Settings::from_toml(
            r#"
            [follow]
            chain_length = 10
            scale_factor = 20.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.follow.chain_length, 10);
        assert_eq!(settings.follow.scale_factor, 20.0);
        assert_eq!(settings.follow.max_speed, 10.0);
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_toml("[follow]\nchain_length = 0\n").unwrap_err();
        assert!(matches!(err, BrewError::InvalidConfig(_)));

        let err = Settings::from_toml("[follow]\ncaught_epsilon = 0.0\n").unwrap_err();
        assert!(matches!(err, BrewError::InvalidConfig(_)));

        let err = Settings::from_toml("[follow]\nscale_factor = 0.5\n").unwrap_err();
        assert!(matches!(err, BrewError::InvalidConfig(_)));

        let err = Settings::from_toml("[follow]\ntick_interval_ms = 0\n").unwrap_err();
        assert!(matches!(err, BrewError::InvalidConfig(_)));

        let err = Settings::from_toml("[window]\nwidth = -1.0\n").unwrap_err();
        assert!(matches!(err, BrewError::InvalidConfig(_)));
    }

    #[test]
    fn test_scale_factor_lower_bound() {
        assert!(Settings::from_toml("[follow]\nscale_factor = 1.0\n").is_ok());
        let err = Settings::from_toml("[follow]\nscale_factor = 0.99\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: follow.scale_factor must be at least 1.0"
        );
    }

    #[test]
    fn test_malformed_toml() {
        let err = Settings::from_toml("[follow\nchain_length = 3").unwrap_err();
        assert!(matches!(err, BrewError::ConfigParse(_)));
        assert!(err.is_config());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(
            &path,
            "[window]\ntitle = \"Kahve\"\n\n[assets]\nroot = \"static/img\"\n",
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.window.title, "Kahve");
        assert_eq!(settings.assets.root, PathBuf::from("static/img"));
    }

    #[test]
    fn test_load_or_default_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "[follow]\nmax_speed = \"fast\"\n").unwrap();

        assert!(Settings::load(&path).is_err());
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }
}
