//! Feature extraction for delaunay mosaics.
//!
//! The chain is grayscale, box blur, then a Laplacian-like high-pass filter
//! whose red channel is thresholded into lattice points:
//!
//! - [`gray::grayscale`] broadcasts Rec. 709 luma to R, G and B.
//! - [`conv2d::convolve_rgba`] correlates an odd square [`Kernel2D`] with the
//!   color channels, copying alpha.
//! - [`extract::extract_edge_points`] scans in raster order.
//!
//! Border handling defaults to clamp-to-edge; see [`dm_core::BorderMode`].

pub mod conv2d;
pub mod extract;
pub mod features;
pub mod gray;
pub mod kernels2d;

pub use conv2d::convolve_rgba;
pub use extract::{DEFAULT_EDGE_THRESHOLD, extract_edge_points};
pub use features::{
    FilterStages, extract_feature_points, extract_feature_points_with_border, filter_stages,
};
pub use gray::grayscale;
pub use kernels2d::Kernel2D;
