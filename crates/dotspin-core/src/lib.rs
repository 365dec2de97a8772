//! # dotspin-core
//!
//! A rotating-dots loading indicator: eight dots of increasing size arranged
//! in a ring, turning one slot per animation step while the indicator is
//! attached and visible.
//!
//! This crate provides:
//! - Style-attribute parsing into an immutable indicator configuration
//! - A frame-driven integer animator with repeat modes and interpolators
//! - The attach/visibility lifecycle that starts and stops the animation
//! - A canvas abstraction with a transform stack, and a recording canvas
//!   that resolves drawn shapes to device coordinates
//!
//! ## Modules
//!
//! - [`animation`] - Frame-driven animator and interpolators
//! - [`color`] - RGBA colors and color resources
//! - [`config`] - Style attributes, indicator configuration, settings file
//! - [`error`] - Error types and Result alias
//! - [`geometry`] - Closed-form dot placement
//! - [`indicator`] - The loading indicator view
//! - [`lifecycle`] - Attachment/visibility state machine
//! - [`metrics`] - Display density and dimensions
//! - [`render`] - Canvas trait and recording canvas
//! - [`view`] - Host callbacks and shared view state
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use dotspin_core::{LoadingIndicator, RecordingCanvas, View};
//!
//! let mut indicator = LoadingIndicator::default();
//! indicator.on_attached_to_window();
//! indicator.on_frame(Duration::from_millis(0));
//! indicator.on_frame(Duration::from_millis(250));
//! assert_eq!(indicator.animation_value(), 2);
//!
//! let mut canvas = RecordingCanvas::new();
//! indicator.on_draw(&mut canvas);
//! assert_eq!(canvas.circles().count(), 8);
//! ```

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod indicator;
pub mod lifecycle;
pub mod metrics;
pub mod render;
pub mod view;

// Error types
pub use error::{Error, Result};

// Configuration
pub use config::{AttributeSet, Config, IndicatorConfig, ThemeName};

// Colors and density
pub use color::{Color, ColorPalette, ColorResolver};
pub use metrics::{Dimension, DisplayMetrics};

// Animation
pub use animation::{IntAnimator, LinearInterpolator, RepeatCount, RepeatMode, TimeInterpolator};

// Lifecycle and view
pub use lifecycle::{AnimationCommand, LifecycleEvent, LifecycleState};
pub use view::{Invalidator, View, ViewBase, Visibility};

// Drawing
pub use geometry::{layout_dots, layout_dots_at, Dot, LINE_COUNT};
pub use render::{Canvas, DeviceCircle, Paint, Point, RecordingCanvas, Rect};

// The indicator
pub use indicator::LoadingIndicator;
