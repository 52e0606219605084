use core::hash::{Hash, Hasher};

use dm_core::Point;

/// Triangle side. Keeps the direction it was produced with, but compares
/// and hashes as an unordered endpoint pair.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub p: Point,
    pub q: Point,
}

impl Edge {
    pub const fn new(p: Point, q: Point) -> Self {
        Self { p, q }
    }

    /// Endpoints with the smaller one first.
    pub fn key(&self) -> (Point, Point) {
        if self.p <= self.q {
            (self.p, self.q)
        } else {
            (self.q, self.p)
        }
    }

    pub fn reversed(self) -> Self {
        Self {
            p: self.q,
            q: self.p,
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
