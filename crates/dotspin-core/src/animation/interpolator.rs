//! Time interpolators

use std::fmt;

/// Maps elapsed fraction of a cycle to animation progress
///
/// Both input and output are nominally in `[0, 1]`.
pub trait TimeInterpolator: fmt::Debug {
    fn interpolation(&self, fraction: f32) -> f32;
}

/// Constant pacing
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearInterpolator;

impl TimeInterpolator for LinearInterpolator {
    fn interpolation(&self, fraction: f32) -> f32 {
        fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        for f in [0.0, 0.25, 0.5, 0.999, 1.0] {
            assert_eq!(LinearInterpolator.interpolation(f), f);
        }
    }
}
