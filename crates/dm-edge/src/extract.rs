use dm_core::{Point, RgbaImage};

/// Fixed red-channel threshold for edge pixels.
pub const DEFAULT_EDGE_THRESHOLD: u8 = 50;

/// Collects every pixel whose red channel is `>= threshold`, in raster order.
///
/// Coordinates are emitted as `i32`; callers are expected to have checked
/// [`RgbaImage::lattice_size`].
pub fn extract_edge_points(img: &RgbaImage, threshold: u8) -> Vec<Point> {
    let view = img.as_view();
    let mut out = Vec::new();
    for y in 0..img.height() {
        for (x, px) in view.row(y).iter().enumerate() {
            if px.r >= threshold {
                out.push(Point::new(x as i32, y as i32));
            }
        }
    }
    out
}
