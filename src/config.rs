//! Carousel configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.
//! Files are looked up at an explicit path or under the user config
//! directory (`<config_dir>/coverflow/config.json`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tier::TierTable;

const CONFIG_DIR_NAME: &str = "coverflow";
const CONFIG_FILE_NAME: &str = "config.json";

/// What happens when navigation runs past either end of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Wrap around; there is no first or last card
    #[default]
    Circular,
    /// Stop at the first and last card
    Bounded,
}

/// Document text direction. Right-to-left mirrors layout and arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn is_rtl(&self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

/// Quiet periods for the debounced input channels, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub resize_ms: u64,
    pub wheel_ms: u64,
    pub scroll_settle_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            resize_ms: 150,
            wheel_ms: 50,
            scroll_settle_ms: 100,
        }
    }
}

impl Timings {
    pub fn resize(&self) -> Duration {
        Duration::from_millis(self.resize_ms)
    }

    pub fn wheel(&self) -> Duration {
        Duration::from_millis(self.wheel_ms)
    }

    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }
}

/// Full set of options for one carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub edge_mode: EdgeMode,
    pub direction: TextDirection,
    pub timings: Timings,
    /// Minimum horizontal travel, in pixels, for a swipe to navigate
    pub swipe_threshold_px: f32,
    pub tiers: TierTable,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            edge_mode: EdgeMode::default(),
            direction: TextDirection::default(),
            timings: Timings::default(),
            swipe_threshold_px: 50.0,
            tiers: TierTable::default(),
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.swipe_threshold_px.is_nan() || self.swipe_threshold_px <= 0.0 {
            return Err(ConfigError::InvalidSwipeThreshold(self.swipe_threshold_px));
        }
        self.tiers.validate()
    }

    /// Parses and validates a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CarouselConfig = serde_json::from_str(json).context("Invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&contents)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Loads `explicit` if given, otherwise the default config file if it
    /// exists, otherwise built-in defaults.
    ///
    /// An explicit path that fails to load is an error; a broken default
    /// file only logs a warning and falls back to defaults.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => match Self::load(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded carousel config");
                    Ok(config)
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %format!("{err:#}"),
                        "ignoring invalid config file"
                    );
                    Ok(Self::default())
                }
            },
            _ => Ok(Self::default()),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// `<config_dir>/coverflow/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::Tier;

    #[test]
    fn test_empty_object_is_default() {
        let config = CarouselConfig::from_json("{}").unwrap();
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(config.timings.resize(), Duration::from_millis(150));
        assert_eq!(config.timings.wheel(), Duration::from_millis(50));
        assert_eq!(config.timings.scroll_settle(), Duration::from_millis(100));
    }

    #[test]
    fn test_partial_override() {
        let config = CarouselConfig::from_json(
            r#"{"edge_mode": "bounded", "direction": "rtl", "timings": {"wheel_ms": 80}}"#,
        )
        .unwrap();
        assert_eq!(config.edge_mode, EdgeMode::Bounded);
        assert!(config.direction.is_rtl());
        assert_eq!(config.timings.wheel_ms, 80);
        assert_eq!(config.timings.resize_ms, 150);
        assert_eq!(config.tiers.tier_for_width(1200.0), Tier::Desktop);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(CarouselConfig::from_json(r#"{"swipe_threshold_px": 0}"#).is_err());
        assert!(CarouselConfig::from_json(r#"{"edge_mode": "sideways"}"#).is_err());
        assert!(CarouselConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_serialized_config_parses_back() {
        let mut config = CarouselConfig::default();
        config.edge_mode = EdgeMode::Bounded;
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"bounded\""));
        assert_eq!(CarouselConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let path = std::env::temp_dir().join("coverflow_missing_config_does_not_exist.json");
        assert!(CarouselConfig::load_or_default(Some(&path)).is_err());
    }
}
