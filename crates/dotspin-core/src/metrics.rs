//! Display density and dimension conversion

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Density information for the display the indicator is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Pixels per density-independent pixel
    pub density: f32,
    /// Pixels per scale-independent pixel (density times the font scale)
    pub scaled_density: f32,
}

impl DisplayMetrics {
    pub fn new(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
        }
    }

    pub fn with_font_scale(mut self, scale: f32) -> Self {
        self.scaled_density = self.density * scale;
        self
    }

    /// Convert density-independent pixels to whole pixels
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        pixel_size(dp * self.density)
    }

    /// Convert a dimension to whole pixels
    pub fn to_px(&self, dimension: Dimension) -> f32 {
        match dimension {
            Dimension::Px(px) => pixel_size(px),
            Dimension::Dp(dp) => self.dp_to_px(dp),
            Dimension::Sp(sp) => pixel_size(sp * self.scaled_density),
        }
    }
}

/// Round a length to whole pixels, half away from zero
///
/// A non-zero length never rounds to zero; it becomes one pixel instead.
pub fn pixel_size(px: f32) -> f32 {
    let rounded = px.round();
    if rounded == 0.0 && px != 0.0 {
        px.signum()
    } else {
        rounded
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// A length with a unit, as written in style attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Px(f32),
    Dp(f32),
    Sp(f32),
}

impl FromStr for Dimension {
    type Err = String;

    /// Parses `32dp`, `32dip`, `24px`, `14sp`. A bare number is taken as pixels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);

        let value: f32 = number
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a number", number.trim()))?;

        match unit.to_ascii_lowercase().as_str() {
            "" | "px" => Ok(Self::Px(value)),
            "dp" | "dip" => Ok(Self::Dp(value)),
            "sp" => Ok(Self::Sp(value)),
            other => Err(format!("unsupported unit '{}'", other)),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{}px", v),
            Self::Dp(v) => write!(f, "{}dp", v),
            Self::Sp(v) => write!(f, "{}sp", v),
        }
    }
}
