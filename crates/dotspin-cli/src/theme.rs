//! Theme system for UI customization
//!
//! Provides the color schemes of the terminal host, and the color
//! resources the indicator can be switched to.

use std::cell::RefCell;

use dotspin_core::{ColorPalette, LifecycleState};
use ratatui::prelude::Color;

// Re-export ThemeName from core
pub use dotspin_core::ThemeName;

/// Theme color palette
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent color (headers, key hints)
    pub accent: Color,
    /// Secondary accent color
    pub accent_secondary: Color,
    /// Main text color
    pub text: Color,
    /// Subtle/dimmed text color
    pub subtle: Color,
    /// Attached and visible, the indicator animates
    pub animating: Color,
    /// Attached but hidden, the animation is paused
    pub hidden: Color,
    /// Detached from the window, no animation exists
    pub detached: Color,
    /// Border color
    pub border: Color,
}

impl Theme {
    /// Create the default pink theme
    pub fn default_theme() -> Self {
        Self {
            accent: Color::Rgb(255, 102, 170),
            accent_secondary: Color::Rgb(255, 153, 200),
            text: Color::Rgb(205, 214, 244),
            subtle: Color::Rgb(147, 153, 178),
            animating: Color::Rgb(166, 227, 161),
            hidden: Color::Rgb(249, 226, 175),
            detached: Color::Rgb(243, 139, 168),
            border: Color::Rgb(147, 153, 178),
        }
    }

    /// Create the ocean blue theme
    pub fn ocean_theme() -> Self {
        Self {
            accent: Color::Rgb(100, 180, 255),
            accent_secondary: Color::Rgb(150, 200, 255),
            text: Color::Rgb(200, 220, 240),
            subtle: Color::Rgb(120, 150, 180),
            animating: Color::Rgb(100, 220, 150),
            hidden: Color::Rgb(255, 200, 100),
            detached: Color::Rgb(255, 100, 100),
            border: Color::Rgb(80, 120, 160),
        }
    }

    /// Create the monochrome theme
    pub fn monochrome_theme() -> Self {
        Self {
            accent: Color::Rgb(255, 255, 255),
            accent_secondary: Color::Rgb(200, 200, 200),
            text: Color::Rgb(220, 220, 220),
            subtle: Color::Rgb(128, 128, 128),
            animating: Color::Rgb(180, 220, 180),
            hidden: Color::Rgb(220, 200, 140),
            detached: Color::Rgb(220, 140, 140),
            border: Color::Rgb(100, 100, 100),
        }
    }

    /// Status color for a lifecycle state
    pub fn state_color(&self, state: LifecycleState) -> Color {
        match state {
            LifecycleState::AttachedVisible => self.animating,
            LifecycleState::AttachedHidden => self.hidden,
            LifecycleState::Detached => self.detached,
        }
    }

    /// Get theme by name
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::default_theme(),
            ThemeName::Ocean => Self::ocean_theme(),
            ThemeName::Monochrome => Self::monochrome_theme(),
        }
    }

    /// Color resources the indicator can be switched to
    pub fn palette(&self) -> ColorPalette {
        ColorPalette::new()
            .with("accent", to_core_color(self.accent))
            .with("accent_secondary", to_core_color(self.accent_secondary))
            .with("text", to_core_color(self.text))
            .with("animating", to_core_color(self.animating))
            .with("hidden", to_core_color(self.hidden))
            .with("detached", to_core_color(self.detached))
            .with("white", dotspin_core::Color::WHITE)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Convert a terminal color to an indicator color
///
/// Indexed and reset colors have no fixed RGB value and map to white.
pub fn to_core_color(color: Color) -> dotspin_core::Color {
    use dotspin_core::Color as Rgba;
    match color {
        Color::Rgb(r, g, b) => Rgba::rgb(r, g, b),
        Color::Black => Rgba::BLACK,
        Color::Red => Rgba::rgb(0x80, 0x00, 0x00),
        Color::Green => Rgba::rgb(0x00, 0x80, 0x00),
        Color::Yellow => Rgba::rgb(0x80, 0x80, 0x00),
        Color::Blue => Rgba::rgb(0x00, 0x00, 0x80),
        Color::Magenta => Rgba::rgb(0x80, 0x00, 0x80),
        Color::Cyan => Rgba::rgb(0x00, 0x80, 0x80),
        Color::Gray => Rgba::rgb(0xC0, 0xC0, 0xC0),
        Color::DarkGray => Rgba::rgb(0x80, 0x80, 0x80),
        Color::LightRed => Rgba::rgb(0xFF, 0x00, 0x00),
        Color::LightGreen => Rgba::rgb(0x00, 0xFF, 0x00),
        Color::LightYellow => Rgba::rgb(0xFF, 0xFF, 0x00),
        Color::LightBlue => Rgba::rgb(0x00, 0x00, 0xFF),
        Color::LightMagenta => Rgba::rgb(0xFF, 0x00, 0xFF),
        Color::LightCyan => Rgba::rgb(0x00, 0xFF, 0xFF),
        _ => Rgba::WHITE,
    }
}

/// Convert an indicator color to a terminal color (alpha is dropped)
pub fn to_tui_color(color: dotspin_core::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

// Global theme instance for easy access
thread_local! {
    static CURRENT_THEME: RefCell<Theme> = RefCell::new(Theme::default());
    static CURRENT_THEME_NAME: RefCell<ThemeName> = const { RefCell::new(ThemeName::Default) };
}

/// Set the current global theme
pub fn set_theme(name: ThemeName) {
    CURRENT_THEME.with(|t| {
        *t.borrow_mut() = Theme::from_name(name);
    });
    CURRENT_THEME_NAME.with(|n| {
        *n.borrow_mut() = name;
    });
}

/// Get the current theme name
pub fn current_theme_name() -> ThemeName {
    CURRENT_THEME_NAME.with(|n| *n.borrow())
}

/// Get the current theme's indicator color resources
pub fn palette() -> ColorPalette {
    CURRENT_THEME.with(|t| t.borrow().palette())
}

/// Get the current accent color
pub fn accent() -> Color {
    CURRENT_THEME.with(|t| t.borrow().accent)
}

/// Get the current secondary accent color
pub fn accent_secondary() -> Color {
    CURRENT_THEME.with(|t| t.borrow().accent_secondary)
}

/// Get the current text color
pub fn text() -> Color {
    CURRENT_THEME.with(|t| t.borrow().text)
}

/// Get the current subtle text color
pub fn subtle() -> Color {
    CURRENT_THEME.with(|t| t.borrow().subtle)
}

/// Get the current status color for a lifecycle state
pub fn state_color(state: LifecycleState) -> Color {
    CURRENT_THEME.with(|t| t.borrow().state_color(state))
}

/// Get the current border color
pub fn border() -> Color {
    CURRENT_THEME.with(|t| t.borrow().border)
}
