//! Colors and color resources
//!
//! Colors are stored as straight (non-premultiplied) RGBA and written in the
//! `#AARRGGBB` form used by style attributes. Short forms (`#RGB`, `#ARGB`,
//! `#RRGGBB`) and a handful of color names are accepted when parsing.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a color string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ParseColorError(String);

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color::rgba(0x00, 0x00, 0x00, 0x00);

    /// Opaque color from red, green and blue channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color from a packed `0xAARRGGBB` value
    const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Packed `0xAARRGGBB` value
    const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Alpha as a fraction in `[0, 1]`
    pub fn alpha_f32(&self) -> f32 {
        f32::from(self.a) / 255.0
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "transparent" => Self::TRANSPARENT,
            "red" => Self::rgb(0xFF, 0x00, 0x00),
            "green" => Self::rgb(0x00, 0xFF, 0x00),
            "blue" => Self::rgb(0x00, 0x00, 0xFF),
            "yellow" => Self::rgb(0xFF, 0xFF, 0x00),
            "cyan" | "aqua" => Self::rgb(0x00, 0xFF, 0xFF),
            "magenta" | "fuchsia" => Self::rgb(0xFF, 0x00, 0xFF),
            "gray" | "grey" => Self::rgb(0x88, 0x88, 0x88),
            "lightgray" | "lightgrey" => Self::rgb(0xCC, 0xCC, 0xCC),
            "darkgray" | "darkgrey" => Self::rgb(0x44, 0x44, 0x44),
            _ => return None,
        };
        Some(color)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return Self::named(&s.to_ascii_lowercase())
                .ok_or_else(|| ParseColorError(format!("unknown color name '{}'", s)));
        };

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError(format!("'{}' is not a hex color", s)));
        }

        // Short forms repeat each nibble: #RGB -> #FFRRGGBB
        let expanded: String = match hex.len() {
            3 => std::iter::once('F')
                .chain(hex.chars())
                .flat_map(|c| [c, c])
                .collect(),
            4 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => format!("FF{}", hex),
            8 => hex.to_string(),
            n => {
                return Err(ParseColorError(format!(
                    "hex color must have 3, 4, 6 or 8 digits, got {}",
                    n
                )))
            }
        };

        u32::from_str_radix(&expanded, 16)
            .map(Self::from_argb)
            .map_err(|e| ParseColorError(e.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

/// Resolves color resource identifiers to concrete colors
pub trait ColorResolver {
    fn resolve_color(&self, id: &str) -> Option<Color>;
}

/// A named table of color resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    colors: BTreeMap<String, Color>,
}

impl ColorPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a color resource
    pub fn insert(&mut self, id: impl Into<String>, color: Color) -> Option<Color> {
        self.colors.insert(id.into(), color)
    }

    /// Builder form of [`ColorPalette::insert`]
    pub fn with(mut self, id: impl Into<String>, color: Color) -> Self {
        self.insert(id, color);
        self
    }

    /// Resource ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl ColorResolver for ColorPalette {
    fn resolve_color(&self, id: &str) -> Option<Color> {
        self.colors.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_forms() {
        assert_eq!("#FF6699".parse::<Color>().unwrap(), Color::rgb(0xFF, 0x66, 0x99));
        assert_eq!(
            "#80FF6699".parse::<Color>().unwrap(),
            Color::rgba(0xFF, 0x66, 0x99, 0x80)
        );
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!("#f69".parse::<Color>().unwrap(), Color::rgb(0xFF, 0x66, 0x99));
        assert_eq!(
            "#8f69".parse::<Color>().unwrap(),
            Color::rgba(0xFF, 0x66, 0x99, 0x88)
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("white".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!(" Grey ".parse::<Color>().unwrap(), Color::rgb(0x88, 0x88, 0x88));
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("#12".parse::<Color>().is_err());
        assert!("#GGGGGG".parse::<Color>().is_err());
        assert!("#1234567".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_is_argb_hex() {
        assert_eq!(Color::WHITE.to_string(), "#FFFFFFFF");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#04010203");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::rgb(0x12, 0x34, 0x56)).unwrap();
        assert_eq!(json, "\"#FF123456\"");
        let back: Color = serde_json::from_str("\"#123456\"").unwrap();
        assert_eq!(back, Color::rgb(0x12, 0x34, 0x56));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_palette_resolves_ids() {
        let palette = ColorPalette::new()
            .with("accent", Color::rgb(255, 102, 170))
            .with("text", Color::WHITE);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.resolve_color("accent"), Some(Color::rgb(255, 102, 170)));
        assert_eq!(palette.resolve_color("missing"), None);
        assert_eq!(palette.ids().collect::<Vec<_>>(), vec!["accent", "text"]);
    }
}
