use std::collections::HashMap;

use dm_core::Point;
use tracing::{debug, trace, warn};

use crate::edge::Edge;
use crate::triangle::Triangle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertStats {
    pub inserted: usize,
    /// Points whose insertion found no circumcircle containing them.
    pub skipped: usize,
    pub removed: usize,
    pub created: usize,
}

/// Incremental Bowyer-Watson triangulation of the `[0, width] x [0, height]`
/// rectangle.
///
/// The rectangle starts split into two triangles along its `(0, 0)-(w, h)`
/// diagonal. The corners are never removed, so triangles touching them stay
/// in the output.
#[derive(Debug, Clone)]
pub struct DelaunayBuilder {
    width: i32,
    height: i32,
    triangles: Vec<Triangle>,
    stats: InsertStats,
}

impl DelaunayBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        let top_left = Point::new(0, 0);
        let top_right = Point::new(width, 0);
        let bottom_right = Point::new(width, height);
        let bottom_left = Point::new(0, height);
        Self {
            width,
            height,
            triangles: vec![
                Triangle::new(top_left, top_right, bottom_right),
                Triangle::new(top_left, bottom_right, bottom_left),
            ],
            stats: InsertStats::default(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn stats(&self) -> InsertStats {
        self.stats
    }

    /// Inserts `d` and returns how many triangles its cavity replaced.
    ///
    /// A return of `0` means no circumcircle contained `d` (it lies outside
    /// the rectangle) and the triangulation is unchanged.
    pub fn insert(&mut self, d: Point) -> usize {
        let mut cavity = Vec::new();
        self.triangles.retain(|t| {
            if t.in_circumcircle(d) {
                cavity.extend(t.edges());
                false
            } else {
                true
            }
        });

        let removed = cavity.len() / 3;
        if removed == 0 {
            self.stats.skipped += 1;
            warn!(x = d.x, y = d.y, "point outside every circumcircle, skipped");
            return 0;
        }

        let boundary = cavity_boundary(&cavity);
        self.triangles
            .extend(boundary.iter().map(|e| Triangle::new(e.p, e.q, d)));

        self.stats.inserted += 1;
        self.stats.removed += removed;
        self.stats.created += boundary.len();
        trace!(
            x = d.x,
            y = d.y,
            removed,
            created = boundary.len(),
            "inserted point"
        );
        removed
    }

    pub fn finish(self) -> Vec<Triangle> {
        debug!(
            inserted = self.stats.inserted,
            skipped = self.stats.skipped,
            triangles = self.triangles.len(),
            "triangulation finished"
        );
        self.triangles
    }
}

/// Symmetric difference of the cavity's edge multiset.
///
/// Each edge toggles its presence: a second occurrence (shared by two bad
/// triangles) cancels the first, an edge seen an odd number of times stays.
/// Surviving edges keep the direction and order of their last insertion.
pub fn cavity_boundary(edges: &[Edge]) -> Vec<Edge> {
    let mut slots: Vec<Option<Edge>> = Vec::with_capacity(edges.len());
    let mut present: HashMap<Edge, usize> = HashMap::with_capacity(edges.len());

    for &e in edges {
        match present.remove(&e) {
            Some(slot) => slots[slot] = None,
            None => {
                present.insert(e, slots.len());
                slots.push(Some(e));
            }
        }
    }

    slots.into_iter().flatten().collect()
}

/// Delaunay triangulation of `points` inside the `width x height` rectangle,
/// inserted in the given order.
pub fn triangulate(points: &[Point], width: i32, height: i32) -> Vec<Triangle> {
    let mut builder = DelaunayBuilder::new(width, height);
    for &p in points {
        builder.insert(p);
    }
    builder.finish()
}

/// Counts `(triangle, point)` pairs where `point` is inside the circumcircle
/// of a triangle it is not a vertex of.
///
/// A point must be closer than `(1 - rel_tol) * r^2` to count, so rounding on
/// co-circular points is not reported.
pub fn empty_circle_violations(
    triangles: &[Triangle],
    points: &[Point],
    rel_tol: f64,
) -> usize {
    triangles
        .iter()
        .filter(|t| !t.is_degenerate())
        .map(|t| {
            let limit = t.circumradius_sq() * (1.0 - rel_tol);
            points
                .iter()
                .filter(|&&p| {
                    !t.has_vertex(p) && p.to_f64().distance_sq(t.circumcenter()) < limit
                })
                .count()
        })
        .sum()
}
