use dm_core::{Error, Point, Point2d, orientation};

use crate::edge::Edge;

/// Circumcenter of `(a, b, c)` from the intersection of the perpendicular
/// bisectors of `ab` and `ac`.
///
/// Collinear input divides by a zero determinant and yields a non-finite
/// point.
pub fn circumcenter(a: Point, b: Point, c: Point) -> Point2d {
    let a = a.to_f64();
    let ab = b.to_f64() - a;
    let ac = c.to_f64() - a;

    let t = ab.dot(ab);
    let u = ac.dot(ac);
    let s = 1.0 / (2.0 * ab.cross(ac));

    Point2d::new(
        a.x + (ac.y * t - ab.y * u) * s,
        a.y + (ab.x * u - ac.x * t) * s,
    )
}

/// Immutable triangle with its circumcircle cached at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
    circumcenter: Point2d,
    circumradius_sq: f64,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        let circumcenter = circumcenter(a, b, c);
        let circumradius_sq = a.to_f64().distance_sq(circumcenter);
        Self {
            a,
            b,
            c,
            circumcenter,
            circumradius_sq,
        }
    }

    pub fn a(&self) -> Point {
        self.a
    }

    pub fn b(&self) -> Point {
        self.b
    }

    pub fn c(&self) -> Point {
        self.c
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    pub fn has_vertex(&self, p: Point) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    pub fn circumcenter(&self) -> Point2d {
        self.circumcenter
    }

    pub fn circumradius_sq(&self) -> f64 {
        self.circumradius_sq
    }

    /// Zero signed area: collinear or repeated vertices. The cached circle
    /// of such a triangle is non-finite.
    pub fn is_degenerate(&self) -> bool {
        orientation(self.a, self.b, self.c) == 0
    }

    /// `(a, b)`, `(b, c)`, `(c, a)`.
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Strictly inside the circumcircle; points on the circle are outside.
    /// A degenerate triangle contains nothing.
    pub fn in_circumcircle(&self, p: Point) -> bool {
        if !self.circumradius_sq.is_finite() || !self.circumcenter.is_finite() {
            return false;
        }
        p.to_f64().distance_sq(self.circumcenter) < self.circumradius_sq
    }

    /// Sign-consistent orientation test, boundary inclusive.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return false;
        }

        let d0 = orientation(self.a, self.b, p);
        let d1 = orientation(self.b, self.c, p);
        let d2 = orientation(self.c, self.a, p);

        let has_neg = d0 < 0 || d1 < 0 || d2 < 0;
        let has_pos = d0 > 0 || d1 > 0 || d2 > 0;
        !(has_neg && has_pos)
    }

    pub fn centroid(&self) -> Point2d {
        let (a, b, c) = (self.a.to_f64(), self.b.to_f64(), self.c.to_f64());
        Point2d::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    pub fn area(&self) -> f64 {
        orientation(self.a, self.b, self.c).unsigned_abs() as f64 * 0.5
    }

    /// Inclusive integer bounding box `(min, max)`.
    pub fn bounds(&self) -> (Point, Point) {
        let xs = [self.a.x, self.b.x, self.c.x];
        let ys = [self.a.y, self.b.y, self.c.y];
        (
            Point::new(min3(xs), min3(ys)),
            Point::new(max3(xs), max3(ys)),
        )
    }
}

impl TryFrom<&[Point]> for Triangle {
    type Error = Error;

    fn try_from(vertices: &[Point]) -> Result<Self, Self::Error> {
        match *vertices {
            [a, b, c] => Ok(Self::new(a, b, c)),
            _ => Err(Error::InvalidTriangle {
                vertices: vertices.len(),
            }),
        }
    }
}

fn min3(v: [i32; 3]) -> i32 {
    v[0].min(v[1]).min(v[2])
}

fn max3(v: [i32; 3]) -> i32 {
    v[0].max(v[1]).max(v[2])
}
