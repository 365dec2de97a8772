//! Drawing surface abstraction

use crate::color::Color;

/// An axis-aligned rectangle in canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square with its top-left corner at the origin
    pub const fn square(side: f32) -> Self {
        Self::new(0.0, 0.0, side, side)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Overlap of two rectangles; empty overlaps have zero width or height
    pub fn intersect(&self, other: &Rect) -> Rect {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        Rect::new(
            left,
            top,
            self.right.min(other.right).max(left),
            self.bottom.min(other.bottom).max(top),
        )
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// How shapes are filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub anti_alias: bool,
    pub stroke_cap: StrokeCap,
    pub stroke_width: f32,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            anti_alias: false,
            stroke_cap: StrokeCap::Butt,
            stroke_width: 0.0,
        }
    }
}

/// A drawing surface with a save/restore transform stack
///
/// Transforms compose onto the current matrix: after `rotate(a)` then
/// `translate(x, y)`, a point is translated first and rotated second.
pub trait Canvas {
    /// Push the current matrix; returns the save count before the push
    fn save(&mut self) -> usize;

    /// Push the current matrix and start an offscreen layer clipped to
    /// `bounds`; returns the save count before the push
    fn save_layer(&mut self, bounds: Rect) -> usize;

    /// Pop one level; popping the base level is ignored
    fn restore(&mut self);

    /// Number of levels on the stack, starting at 1
    fn save_count(&self) -> usize;

    fn translate(&mut self, dx: f32, dy: f32);

    /// Rotate clockwise by `degrees` about the current origin
    fn rotate(&mut self, degrees: f32);

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint);

    /// Pop levels until `count` remain
    fn restore_to_count(&mut self, count: usize) {
        while self.save_count() > count.max(1) {
            self.restore();
        }
    }

    /// Rotate about the pivot `(px, py)`
    fn rotate_about(&mut self, degrees: f32, px: f32, py: f32) {
        self.translate(px, py);
        self.rotate(degrees);
        self.translate(-px, -py);
    }
}
