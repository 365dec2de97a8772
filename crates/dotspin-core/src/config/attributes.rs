//! Style attributes and the indicator configuration derived from them

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::metrics::{Dimension, DisplayMetrics};

/// Attribute holding the dot color
pub const ATTR_COLOR: &str = "color";
/// Attribute holding the bounding-box size
pub const ATTR_SIZE: &str = "size";
/// Attribute holding the rotation period in milliseconds
pub const ATTR_DURATION: &str = "duration";

/// Default size in density-independent pixels
pub const DEFAULT_SIZE_DP: f32 = 32.0;
/// Default period of one full rotation
pub const DEFAULT_DURATION_MS: u64 = 800;

/// Declarative style attributes, as text
///
/// Mirrors what a layout file would carry: unparsed values keyed by
/// attribute name. Unknown keys are kept but ignored by the indicator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    values: BTreeMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay another set on top of this one, later values win
    pub fn merge(&mut self, other: &AttributeSet) {
        for (name, value) in &other.values {
            self.values.insert(name.clone(), value.clone());
        }
    }
}

/// Resolved configuration of a loading indicator
///
/// Fixed once the indicator is built; only the paint color can change
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    /// Dot color
    pub color: Color,
    /// Side of the square bounding box, in pixels
    pub size: f32,
    /// Period of one full rotation, in milliseconds
    pub duration_ms: u64,
}

impl IndicatorConfig {
    /// Defaults for a display with the given density
    pub fn for_metrics(metrics: &DisplayMetrics) -> Self {
        Self {
            color: Color::WHITE,
            size: metrics.dp_to_px(DEFAULT_SIZE_DP),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// Read configuration from style attributes, falling back to defaults
    ///
    /// Values are not range-checked: a zero size or duration is accepted
    /// as written. Text that cannot be read as the attribute's type is an
    /// error.
    pub fn from_attributes(attrs: &AttributeSet, metrics: &DisplayMetrics) -> Result<Self> {
        let mut config = Self::for_metrics(metrics);

        if let Some(value) = attrs.get(ATTR_COLOR) {
            config.color = value
                .parse()
                .map_err(|e: crate::color::ParseColorError| {
                    Error::invalid_attribute(ATTR_COLOR, value, e.to_string())
                })?;
        }

        if let Some(value) = attrs.get(ATTR_SIZE) {
            let dimension: Dimension = value
                .parse()
                .map_err(|e: String| Error::invalid_attribute(ATTR_SIZE, value, e))?;
            config.size = metrics.to_px(dimension);
        }

        if let Some(value) = attrs.get(ATTR_DURATION) {
            config.duration_ms = value.trim().parse().map_err(|_| {
                Error::invalid_attribute(
                    ATTR_DURATION,
                    value,
                    "expected a non-negative integer of milliseconds",
                )
            })?;
        }

        tracing::debug!(
            color = %config.color,
            size = config.size,
            duration_ms = config.duration_ms,
            "Resolved indicator attributes"
        );

        Ok(config)
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self::for_metrics(&DisplayMetrics::default())
    }
}
