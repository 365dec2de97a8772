//! 2D affine transforms

/// A point in canvas coordinates (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Affine transform `[a c e; b d f; 0 0 1]`
///
/// Maps `(x, y)` to `(a·x + c·y + e, b·x + d·y + f)`. Positive rotation
/// angles turn clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn translation(dx: f32, dy: f32) -> Self {
        Self {
            e: dx,
            f: dy,
            ..Self::IDENTITY
        }
    }

    pub fn rotation(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// `self · other`: `other` is applied first
    pub fn then(&self, other: &Affine) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            e: self.a * other.e + self.c * other.f + self.e,
            f: self.b * other.e + self.d * other.f + self.f,
        }
    }

    pub fn map_point(&self, p: Point) -> Point {
        Point {
            x: self.a * p.x + self.c * p.y + self.e,
            y: self.b * p.x + self.d * p.y + self.f,
        }
    }

    /// Uniform scale factor, used to map radii
    pub fn scale(&self) -> f32 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(p: Point, x: f32, y: f32) -> bool {
        (p.x - x).abs() < 1e-4 && (p.y - y).abs() < 1e-4
    }

    #[test]
    fn test_rotation_is_clockwise_on_screen() {
        // +x axis rotated 90 degrees points down (+y)
        let p = Affine::rotation(90.0).map_point(Point::new(1.0, 0.0));
        assert!(close(p, 0.0, 1.0));
    }

    #[test]
    fn test_then_applies_right_operand_first() {
        let m = Affine::translation(10.0, 0.0).then(&Affine::rotation(90.0));
        let p = m.map_point(Point::new(1.0, 0.0));
        assert!(close(p, 10.0, 1.0));
    }

    #[test]
    fn test_scale_of_rigid_transform_is_one() {
        let m = Affine::translation(3.0, 4.0).then(&Affine::rotation(33.0));
        assert!((m.scale() - 1.0).abs() < 1e-5);
    }
}
