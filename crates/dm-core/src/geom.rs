use core::ops::Sub;

use serde::{Deserialize, Serialize};

/// Integer lattice point. Ordering is lexicographic on `(x, y)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_f64(self) -> Point2d {
        Point2d {
            x: f64::from(self.x),
            y: f64::from(self.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Per-axis comparison within `tolerance`.
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn distance_sq(self, other: Self) -> f64 {
        let d = self - other;
        d.dot(d)
    }
}

impl Vec2d {
    pub fn dot(self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// z component of the 3D cross product.
    pub fn cross(self, rhs: Self) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl Sub<Point2d> for Point2d {
    type Output = Vec2d;

    fn sub(self, rhs: Point2d) -> Self::Output {
        Vec2d {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Twice the signed area of `(a, b, c)`: positive when counter-clockwise in a
/// y-up frame, negative when clockwise, zero when collinear.
///
/// Evaluated in `i128`, so it is exact for any `i32` lattice input.
pub fn orientation(a: Point, b: Point, c: Point) -> i128 {
    let abx = i128::from(b.x) - i128::from(a.x);
    let aby = i128::from(b.y) - i128::from(a.y);
    let acx = i128::from(c.x) - i128::from(a.x);
    let acy = i128::from(c.y) - i128::from(a.y);
    abx * acy - aby * acx
}

#[cfg(test)]
mod tests {
    use super::{Point, Point2d, Vec2d, orientation};

    #[test]
    fn orientation_signs() {
        let a = Point::new(0, 0);
        let b = Point::new(4, 0);

        assert!(orientation(a, b, Point::new(0, 3)) > 0);
        assert!(orientation(a, b, Point::new(0, -3)) < 0);
        assert_eq!(orientation(a, b, Point::new(9, 0)), 0);
        assert_eq!(orientation(a, b, Point::new(0, 3)), 12);
    }

    #[test]
    fn orientation_is_exact_at_i32_extremes() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MIN);
        let c = Point::new(i32::MIN, i32::MAX);
        assert!(orientation(a, b, c) > 0);
    }

    #[test]
    fn approx_eq_uses_absolute_difference() {
        let p = Point2d::new(1.0, 1.0);

        assert!(p.approx_eq(Point2d::new(1.05, 0.95), 0.1));
        assert!(!p.approx_eq(Point2d::new(0.5, 1.0), 0.1));
        assert!(p.approx_eq(p, 0.0));
    }

    #[test]
    fn difference_dot_and_cross() {
        let v = Point2d::new(4.0, 1.0) - Point2d::new(1.0, -3.0);
        assert_eq!(v, Vec2d { x: 3.0, y: 4.0 });
        assert_eq!(v.dot(v), 25.0);
        assert_eq!(v.cross(Vec2d { x: 1.0, y: 0.0 }), -4.0);
        assert_eq!(Point2d::new(0.0, 0.0).distance_sq(Point2d::new(3.0, 4.0)), 25.0);
    }

    #[test]
    fn point_ordering_is_lexicographic() {
        assert!(Point::new(0, 9) < Point::new(1, 0));
        assert!(Point::new(1, 0) < Point::new(1, 1));
        assert_eq!(Point::from((3, 4)).to_f64(), Point2d::new(3.0, 4.0));
    }
}
