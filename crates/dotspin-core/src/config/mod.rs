//! Configuration: style attributes, resolved indicator settings and the
//! persisted settings file

mod attributes;

pub use attributes::*;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::metrics::DisplayMetrics;

/// Default interval between host frames, in milliseconds
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Color scheme used by the hosts around the indicator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Ocean,
    Monochrome,
}

impl ThemeName {
    /// All themes, in cycling order
    pub fn all() -> &'static [ThemeName] {
        &[Self::Default, Self::Ocean, Self::Monochrome]
    }

    pub fn next(self) -> Self {
        match self {
            Self::Default => Self::Ocean,
            Self::Ocean => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

/// Persisted settings for dotspin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Style attributes applied to the indicator
    pub indicator: AttributeSet,
    /// Pixels per density-independent pixel
    pub density: f32,
    /// User text scale applied on top of `density` for `sp` lengths
    pub font_scale: f32,
    /// Host color scheme
    pub theme: ThemeName,
    /// Interval between host frames, in milliseconds
    pub frame_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indicator: AttributeSet::new(),
            density: 1.0,
            font_scale: 1.0,
            theme: ThemeName::Default,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dotspin").join("config.json"))
    }

    /// Load config from disk, falling back to defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring config at {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        if !(config.density.is_finite() && config.density > 0.0) {
            return Err(Error::Config(format!(
                "density must be a positive number, got {}",
                config.density
            )));
        }
        if !(config.font_scale.is_finite() && config.font_scale > 0.0) {
            return Err(Error::Config(format!(
                "font_scale must be a positive number, got {}",
                config.font_scale
            )));
        }
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Err(Error::Config("no config directory on this platform".into())),
        }
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Display metrics implied by the configured density and font scale
    pub fn metrics(&self) -> DisplayMetrics {
        DisplayMetrics::new(self.density).with_font_scale(self.font_scale)
    }

    /// Resolve the indicator configuration from the stored attributes
    pub fn indicator_config(&self) -> Result<IndicatorConfig> {
        IndicatorConfig::from_attributes(&self.indicator, &self.metrics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            indicator: AttributeSet::new()
                .with(ATTR_COLOR, "#FF6699")
                .with(ATTR_DURATION, "500"),
            density: 2.0,
            font_scale: 1.0,
            theme: ThemeName::Ocean,
            frame_interval_ms: 33,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let indicator = loaded.indicator_config().unwrap();
        assert_eq!(indicator.color, Color::rgb(0xFF, 0x66, 0x99));
        assert_eq!(indicator.size, 64.0);
        assert_eq!(indicator.duration_ms, 500);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "theme": "monochrome" }"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme, ThemeName::Monochrome);
        assert_eq!(loaded.density, 1.0);
        assert_eq!(loaded.font_scale, 1.0);
        assert_eq!(loaded.frame_interval_ms, DEFAULT_FRAME_INTERVAL_MS);
        assert!(loaded.indicator.is_empty());
    }

    #[test]
    fn test_invalid_files_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Json(_))));

        std::fs::write(&path, r#"{ "density": 0 }"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));

        std::fs::write(&path, r#"{ "font_scale": -1 }"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));

        let missing = dir.path().join("missing.json");
        assert!(matches!(Config::load_from(&missing), Err(Error::Io(_))));
    }

    #[test]
    fn test_font_scale_reaches_sp_sizes() {
        let config = Config {
            indicator: AttributeSet::new().with(ATTR_SIZE, "20sp"),
            density: 2.0,
            font_scale: 1.3,
            ..Config::default()
        };
        assert_eq!(config.metrics().scaled_density, 2.6);
        assert_eq!(config.indicator_config().unwrap().size, 52.0);
    }

    #[test]
    fn test_theme_cycle() {
        let mut theme = ThemeName::Default;
        for _ in 0..ThemeName::all().len() {
            theme = theme.next();
        }
        assert_eq!(theme, ThemeName::Default);
    }
}
