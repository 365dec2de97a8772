//! A canvas that records operations and resolves shapes to device space

use super::canvas::{Canvas, Paint, Rect};
use super::matrix::{Affine, Point};
use crate::color::Color;

/// A circle resolved to device coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceCircle {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
    /// Clip of the innermost layer the circle was drawn into
    pub clip: Option<Rect>,
}

impl DeviceCircle {
    /// Whether any of the circle survives its layer clip
    pub fn is_visible(&self) -> bool {
        match self.clip {
            Some(clip) => {
                self.center.x + self.radius > clip.left
                    && self.center.x - self.radius < clip.right
                    && self.center.y + self.radius > clip.top
                    && self.center.y - self.radius < clip.bottom
            }
            None => true,
        }
    }
}

/// One recorded canvas call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    SaveLayer(Rect),
    Restore,
    Translate { dx: f32, dy: f32 },
    Rotate { degrees: f32 },
    Circle(DeviceCircle),
}

#[derive(Debug, Clone, Copy)]
struct Level {
    matrix: Affine,
    clip: Option<Rect>,
}

/// Records every call and tracks the transform stack
///
/// Hosts without a transform-stack API draw into a `RecordingCanvas` and
/// paint the resolved [`DeviceCircle`]s themselves.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    stack: Vec<Level>,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            stack: vec![Level {
                matrix: Affine::IDENTITY,
                clip: None,
            }],
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Circles in draw order
    pub fn circles(&self) -> impl Iterator<Item = &DeviceCircle> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle(circle) => Some(circle),
            _ => None,
        })
    }

    /// Current transform
    pub fn matrix(&self) -> Affine {
        self.top().matrix
    }

    /// True when every save has been matched by a restore
    pub fn is_balanced(&self) -> bool {
        self.stack.len() == 1
    }

    fn top(&self) -> &Level {
        // The base level is never popped
        &self.stack[self.stack.len() - 1]
    }

    fn concat(&mut self, m: Affine) {
        if let Some(level) = self.stack.last_mut() {
            level.matrix = level.matrix.then(&m);
        }
    }

    fn map_rect(matrix: &Affine, rect: Rect) -> Rect {
        let corners = [
            matrix.map_point(Point::new(rect.left, rect.top)),
            matrix.map_point(Point::new(rect.right, rect.top)),
            matrix.map_point(Point::new(rect.left, rect.bottom)),
            matrix.map_point(Point::new(rect.right, rect.bottom)),
        ];
        corners.iter().skip(1).fold(
            Rect::new(corners[0].x, corners[0].y, corners[0].x, corners[0].y),
            |r, p| Rect::new(r.left.min(p.x), r.top.min(p.y), r.right.max(p.x), r.bottom.max(p.y)),
        )
    }
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) -> usize {
        let count = self.stack.len();
        let level = *self.top();
        self.stack.push(level);
        self.ops.push(DrawOp::Save);
        count
    }

    fn save_layer(&mut self, bounds: Rect) -> usize {
        let count = self.stack.len();
        let level = *self.top();
        let mapped = Self::map_rect(&level.matrix, bounds);
        let clip = match level.clip {
            Some(outer) => outer.intersect(&mapped),
            None => mapped,
        };
        self.stack.push(Level {
            matrix: level.matrix,
            clip: Some(clip),
        });
        self.ops.push(DrawOp::SaveLayer(bounds));
        count
    }

    fn restore(&mut self) {
        if self.stack.len() <= 1 {
            tracing::warn!("Canvas restore without a matching save");
            return;
        }
        self.stack.pop();
        self.ops.push(DrawOp::Restore);
    }

    fn save_count(&self) -> usize {
        self.stack.len()
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.concat(Affine::translation(dx, dy));
        self.ops.push(DrawOp::Translate { dx, dy });
    }

    fn rotate(&mut self, degrees: f32) {
        self.concat(Affine::rotation(degrees));
        self.ops.push(DrawOp::Rotate { degrees });
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        let level = *self.top();
        let circle = DeviceCircle {
            center: level.matrix.map_point(Point::new(cx, cy)),
            radius: radius * level.matrix.scale(),
            color: paint.color,
            clip: level.clip,
        };
        self.ops.push(DrawOp::Circle(circle));
    }
}
