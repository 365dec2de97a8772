//! Canvas abstraction and a recording implementation

mod canvas;
mod matrix;
mod recording;

pub use canvas::{Canvas, Paint, Rect, StrokeCap};
pub use matrix::{Affine, Point};
pub use recording::{DeviceCircle, DrawOp, RecordingCanvas};
