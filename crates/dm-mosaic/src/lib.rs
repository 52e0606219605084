//! Delaunay mosaic generation.
//!
//! [`generate`] wires the workspace crates together:
//! 1. grayscale, box blur and edge filter the image, keep bright pixels;
//! 2. sample a fraction of those feature points;
//! 3. triangulate the sample inside the image rectangle;
//! 4. color each triangle from the original image ([`color_of`]).

mod color;
mod config;
mod pipeline;

pub use color::{ColorMode, color_of};
pub use config::MosaicConfig;
pub use pipeline::{ColoredTriangle, Mosaic, generate};
