//! Dot ring geometry
//!
//! Closed-form placement of the eight dots. The indicator draws through
//! cumulative canvas transforms; these functions give the same positions
//! directly, for hosts and checks that want coordinates instead.

use crate::render::Point;

/// Number of dots in the ring
pub const LINE_COUNT: usize = 8;

/// Angle between neighbouring dots
pub const DEGREES_PER_LINE: f32 = 360.0 / LINE_COUNT as f32;

/// Largest animation value; the animation counts `0..=MAX_ANIMATION_VALUE`
pub const MAX_ANIMATION_VALUE: i32 = LINE_COUNT as i32 - 1;

/// Stroke width for a bounding box of side `size`
pub fn stroke_width(size: f32) -> f32 {
    size / 4.0
}

/// Radius of dot `index`; grows linearly with the index
pub fn dot_radius(index: usize, size: f32) -> f32 {
    (7 + index) as f32 * stroke_width(size) / 28.0
}

/// Ring rotation for an animation value
pub fn rotation_degrees(animation_value: i32) -> f32 {
    animation_value as f32 * DEGREES_PER_LINE
}

/// Distance from the center to each dot's center
pub fn dot_offset(size: f32) -> f32 {
    size / 2.0 - stroke_width(size) / 2.0
}

/// A placed dot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub index: usize,
    pub center: Point,
    pub radius: f32,
    /// Clockwise angle from the upward axis, in degrees
    pub angle: f32,
}

/// Positions of all dots for a bounding box of side `size`
pub fn layout_dots(size: f32, animation_value: i32) -> [Dot; LINE_COUNT] {
    layout_dots_at(Point::new(size / 2.0, size / 2.0), size, animation_value)
}

/// Positions of all dots for a ring of side `size` centered on `center`
pub fn layout_dots_at(center: Point, size: f32, animation_value: i32) -> [Dot; LINE_COUNT] {
    let offset = dot_offset(size);
    let rotation = rotation_degrees(animation_value);

    std::array::from_fn(|index| {
        let angle = rotation + DEGREES_PER_LINE * (index + 1) as f32;
        let (sin, cos) = angle.to_radians().sin_cos();
        Dot {
            index,
            center: Point::new(center.x + offset * sin, center.y - offset * cos),
            radius: dot_radius(index, size),
            angle,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_steps_of_45_degrees() {
        for k in 0..=MAX_ANIMATION_VALUE {
            assert_eq!(rotation_degrees(k), k as f32 * 45.0);
        }
    }

    #[test]
    fn test_radius_formula_and_monotonicity() {
        let size = 32.0;
        for i in 0..LINE_COUNT {
            let expected = (7 + i) as f32 * (size / 4.0) / 28.0;
            assert_eq!(dot_radius(i, size), expected);
        }
        for i in 1..LINE_COUNT {
            assert!(dot_radius(i, size) > dot_radius(i - 1, size));
        }
        assert_eq!(dot_radius(0, 32.0), 2.0);
        assert_eq!(dot_radius(7, 32.0), 4.0);
    }

    #[test]
    fn test_default_stroke_width() {
        assert_eq!(stroke_width(32.0), 8.0);
        assert_eq!(dot_offset(32.0), 12.0);
    }

    #[test]
    fn test_dots_stay_inside_bounds() {
        let size = 32.0;
        for value in 0..=MAX_ANIMATION_VALUE {
            for dot in layout_dots(size, value) {
                assert!(dot.center.x - dot.radius >= -1e-4);
                assert!(dot.center.y - dot.radius >= -1e-4);
                assert!(dot.center.x + dot.radius <= size + 1e-4);
                assert!(dot.center.y + dot.radius <= size + 1e-4);
            }
        }
    }

    #[test]
    fn test_dots_are_evenly_spaced() {
        let dots = layout_dots(32.0, 0);
        let center = Point::new(16.0, 16.0);
        for dot in &dots {
            assert!((dot.center.distance_to(center) - 12.0).abs() < 1e-4);
        }
        for pair in dots.windows(2) {
            assert!((pair[1].angle - pair[0].angle - 45.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_last_dot_points_up_at_rest() {
        // Dot 7 has turned a full circle and sits straight above the center
        let dot = layout_dots(32.0, 0)[7];
        assert!((dot.center.x - 16.0).abs() < 1e-4);
        assert!((dot.center.y - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_first_dot_sits_upper_right_at_rest() {
        let dot = layout_dots(32.0, 0)[0];
        assert!((dot.center.x - 24.485281).abs() < 1e-4);
        assert!((dot.center.y - 7.514719).abs() < 1e-4);
        assert_eq!(dot.radius, 2.0);
    }

    #[test]
    fn test_ring_follows_center() {
        let centered = layout_dots_at(Point::new(50.0, 30.0), 32.0, 3);
        let boxed = layout_dots(32.0, 3);
        for (a, b) in centered.iter().zip(boxed.iter()) {
            assert!((a.center.x - b.center.x - 34.0).abs() < 1e-4);
            assert!((a.center.y - b.center.y - 14.0).abs() < 1e-4);
            assert_eq!(a.radius, b.radius);
        }
    }

    #[test]
    fn test_advancing_value_rotates_ring_by_one_slot() {
        let a = layout_dots(32.0, 0);
        let b = layout_dots(32.0, 1);
        for i in 0..LINE_COUNT - 1 {
            assert!(b[i].center.distance_to(a[i + 1].center) < 1e-4);
        }
    }
}
