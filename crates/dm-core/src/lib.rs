//! Foundational primitives for delaunay mosaics.
//!
//! ## Pixels and Images
//! [`RgbaImage`] is a dense, row-major buffer of [`Rgba`] pixels with the
//! origin at the top-left corner. Pipeline stages never mutate their input:
//! every filter returns a freshly allocated image, so the unfiltered source
//! stays available for coloring.
//!
//! ## Border Modes
//! Neighborhood reads outside the image resolve through [`BorderMode`]:
//! clamp-to-edge, periodic wrap, or a constant fill.
//!
//! ## Coordinates
//! Feature points live on the integer lattice ([`Point`]); integer coordinates
//! refer to pixel centers. Derived quantities such as circumcenters and
//! centroids use [`Point2d`].

mod border;
mod error;
mod geom;
mod image;
mod pixel;
mod sample;

pub use border::{BorderMode, map_index};
pub use error::{Error, Result};
pub use geom::{Point, Point2d, Vec2d, orientation};
pub use image::{Image, ImageView, RgbaImage};
pub use pixel::{Rgb, Rgba, clamp_channel};
pub use sample::sample_nearest;
