use dm_core::{Point, Result, Rgb, Rgba, RgbaImage};
use dm_delaunay::{Triangle, triangulate};
use dm_edge::extract_feature_points_with_border;
use dm_sample::{Sample, sample_random, sample_seeded};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::color_of;
use crate::config::MosaicConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColoredTriangle {
    pub vertices: [Point; 3],
    pub color: Rgb,
}

impl ColoredTriangle {
    pub fn triangle(&self) -> Triangle {
        let [a, b, c] = self.vertices;
        Triangle::new(a, b, c)
    }
}

/// Result of one [`generate`] run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mosaic {
    pub width: usize,
    pub height: usize,
    pub triangles: Vec<ColoredTriangle>,
    /// Feature points used as triangulation sites, in insertion order.
    pub sampled: Vec<Point>,
    /// Feature points left out of the triangulation.
    pub remaining: Vec<Point>,
}

impl Mosaic {
    /// Fills every triangle with its color; later triangles win on shared
    /// edges. Pixels no triangle covers stay opaque black.
    pub fn rasterize(&self) -> RgbaImage {
        let mut out = RgbaImage::new_fill(self.width, self.height, Rgba::opaque(0, 0, 0));
        if out.is_empty() {
            return out;
        }
        let max_x = i32::try_from(self.width - 1).unwrap_or(i32::MAX);
        let max_y = i32::try_from(self.height - 1).unwrap_or(i32::MAX);

        for ct in &self.triangles {
            let t = ct.triangle();
            let fill = Rgba::opaque(ct.color.r, ct.color.g, ct.color.b);
            let (lo, hi) = t.bounds();
            for y in lo.y.max(0)..=hi.y.min(max_y) {
                for x in lo.x.max(0)..=hi.x.min(max_x) {
                    if !t.contains(Point::new(x, y)) {
                        continue;
                    }
                    if let Some(px) = out.get_mut(x as usize, y as usize) {
                        *px = fill;
                    }
                }
            }
        }
        out
    }
}

/// Runs feature extraction, sampling, triangulation and coloring.
///
/// Every call starts from a fresh triangulation. With zero sampled sites the
/// mosaic has no triangles; a `sample_rate` outside `(0, 1]` is one way to
/// get there and is not an error.
pub fn generate(image: &RgbaImage, config: &MosaicConfig) -> Result<Mosaic> {
    config.validate()?;
    let (lattice_w, lattice_h) = image.lattice_size()?;

    let points = extract_feature_points_with_border(
        image,
        config.blur_kernel_size,
        config.edge_kernel_size,
        config.threshold,
        config.border,
    )?;

    let Sample { sampled, remaining } = match config.seed {
        Some(seed) => sample_seeded(&points, config.sample_rate, seed),
        None => sample_random(&points, config.sample_rate),
    };

    let triangles = if sampled.is_empty() {
        Vec::new()
    } else {
        triangulate(&sampled, lattice_w, lattice_h)
            .iter()
            .map(|t| ColoredTriangle {
                vertices: t.vertices(),
                color: color_of(t, image, config.color_mode),
            })
            .collect()
    };

    debug!(
        features = points.len(),
        sampled = sampled.len(),
        triangles = triangles.len(),
        mode = ?config.color_mode,
        "generated mosaic"
    );

    Ok(Mosaic {
        width: image.width(),
        height: image.height(),
        triangles,
        sampled,
        remaining,
    })
}
