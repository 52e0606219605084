//! Incremental Delaunay triangulation for delaunay mosaics.
//!
//! [`DelaunayBuilder`] implements Bowyer-Watson insertion over integer
//! lattice points inside a `[0, width] x [0, height]` rectangle:
//! - every triangle whose cached circumcircle strictly contains the new point
//!   is removed;
//! - the removed triangles' edges are reduced by symmetric cancellation to the
//!   cavity boundary ([`cavity_boundary`]);
//! - each boundary edge is joined to the new point.
//!
//! The rectangle corners are part of the result. Exactly collinear or
//! repeated vertices produce degenerate triangles whose circumcircle is
//! non-finite; [`Triangle::in_circumcircle`] treats those as containing
//! nothing.

mod builder;
mod edge;
mod triangle;

pub use builder::{
    DelaunayBuilder, InsertStats, cavity_boundary, empty_circle_violations, triangulate,
};
pub use edge::Edge;
pub use triangle::{Triangle, circumcenter};
