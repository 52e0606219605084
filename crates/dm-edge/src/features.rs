use dm_core::{BorderMode, Point, Result, Rgba, RgbaImage};
use tracing::debug;

use crate::conv2d::convolve_rgba;
use crate::extract::extract_edge_points;
use crate::gray::grayscale;
use crate::kernels2d::Kernel2D;

/// Intermediate buffers of the feature filter chain.
#[derive(Debug, Clone)]
pub struct FilterStages {
    pub gray: RgbaImage,
    pub blurred: RgbaImage,
    pub edges: RgbaImage,
}

/// Runs grayscale, box blur and the Laplacian-like edge filter.
pub fn filter_stages(
    image: &RgbaImage,
    blur_kernel_size: usize,
    edge_kernel_size: usize,
    border: BorderMode<Rgba>,
) -> Result<FilterStages> {
    let blur = Kernel2D::box_blur(blur_kernel_size)?;
    let edge = Kernel2D::laplacian(edge_kernel_size)?;

    let gray = grayscale(image);
    let blurred = convolve_rgba(&gray, &blur, border);
    let edges = convolve_rgba(&blurred, &edge, border);

    Ok(FilterStages {
        gray,
        blurred,
        edges,
    })
}

/// Edge pixels of `image` with clamp-to-edge borders.
pub fn extract_feature_points(
    image: &RgbaImage,
    blur_kernel_size: usize,
    edge_kernel_size: usize,
    threshold: u8,
) -> Result<Vec<Point>> {
    extract_feature_points_with_border(
        image,
        blur_kernel_size,
        edge_kernel_size,
        threshold,
        BorderMode::Clamp,
    )
}

pub fn extract_feature_points_with_border(
    image: &RgbaImage,
    blur_kernel_size: usize,
    edge_kernel_size: usize,
    threshold: u8,
    border: BorderMode<Rgba>,
) -> Result<Vec<Point>> {
    image.lattice_size()?;
    let stages = filter_stages(image, blur_kernel_size, edge_kernel_size, border)?;
    let points = extract_edge_points(&stages.edges, threshold);
    debug!(
        width = image.width(),
        height = image.height(),
        points = points.len(),
        "extracted feature points"
    );
    Ok(points)
}
