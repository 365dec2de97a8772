//! Frame-driven animation primitives

mod animator;
mod interpolator;

pub use animator::{IntAnimator, RepeatCount, RepeatMode, UpdateListener, DEFAULT_DURATION};
pub use interpolator::{LinearInterpolator, TimeInterpolator};
