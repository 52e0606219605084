use dm_core::{BorderMode, Point, Rgb, Rgba, RgbaImage, sample_nearest};
use dm_delaunay::Triangle;
use serde::{Deserialize, Serialize};

/// How a triangle's fill color is picked from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Mean of every pixel center inside the triangle.
    Exact,
    /// Pixel nearest the centroid.
    #[default]
    Quick,
}

pub fn color_of(triangle: &Triangle, image: &RgbaImage, mode: ColorMode) -> Rgb {
    if image.is_empty() {
        return Rgb::default();
    }
    match mode {
        ColorMode::Exact => {
            mean_inside(triangle, image).unwrap_or_else(|| centroid_color(triangle, image))
        }
        ColorMode::Quick => centroid_color(triangle, image),
    }
}

fn centroid_color(triangle: &Triangle, image: &RgbaImage) -> Rgb {
    let c = triangle.centroid();
    sample_nearest(&image.as_view(), c.x, c.y, BorderMode::<Rgba>::Clamp).rgb()
}

/// `None` when no pixel center falls inside (slivers and off-image triangles).
fn mean_inside(triangle: &Triangle, image: &RgbaImage) -> Option<Rgb> {
    let (lo, hi) = triangle.bounds();
    let x0 = lo.x.max(0);
    let y0 = lo.y.max(0);
    let x1 = hi.x.min(last_index(image.width()));
    let y1 = hi.y.min(last_index(image.height()));

    let view = image.as_view();
    let mut sum = [0u64; 3];
    let mut count = 0u64;
    for y in y0..=y1 {
        let row = view.row(y as usize);
        for x in x0..=x1 {
            if !triangle.contains(Point::new(x, y)) {
                continue;
            }
            let px = row[x as usize];
            sum[0] += u64::from(px.r);
            sum[1] += u64::from(px.g);
            sum[2] += u64::from(px.b);
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    let mean = |s: u64| ((s + count / 2) / count) as u8;
    Some(Rgb::new(mean(sum[0]), mean(sum[1]), mean(sum[2])))
}

fn last_index(len: usize) -> i32 {
    i32::try_from(len - 1).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use dm_core::{Image, Point, Rgb, Rgba};
    use dm_delaunay::Triangle;

    use super::{ColorMode, color_of, mean_inside};

    fn halves(w: usize, h: usize) -> Image<Rgba> {
        let mut img = Image::new_fill(w, h, Rgba::opaque(0, 0, 0));
        for y in 0..h {
            for x in 0..w / 2 {
                *img.get_mut(x, y).expect("in bounds") = Rgba::opaque(200, 100, 50);
            }
        }
        img
    }

    fn tri(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Triangle {
        Triangle::new(a.into(), b.into(), c.into())
    }

    #[test]
    fn quick_picks_rounded_centroid() {
        let img = halves(10, 10);
        // centroid (1, 2)
        let t = tri((0, 0), (3, 0), (0, 6));
        assert_eq!(color_of(&t, &img, ColorMode::Quick), Rgb::new(200, 100, 50));
        // centroid (8, 2)
        let t = tri((7, 0), (9, 0), (8, 6));
        assert_eq!(color_of(&t, &img, ColorMode::Quick), Rgb::new(0, 0, 0));
    }

    #[test]
    fn quick_clamps_centroid_to_buffer() {
        let img = halves(4, 4);
        let t = tri((-30, -30), (-27, -30), (-30, -27));
        assert_eq!(color_of(&t, &img, ColorMode::Quick), Rgb::new(200, 100, 50));
    }

    #[test]
    fn exact_averages_covered_pixels() {
        let img = halves(10, 10);
        // The unit square at (4, 0) split in two: t covers (4,0) (5,0) (4,1),
        // u covers (5,0) (5,1) (4,1). Column 4 is colored, column 5 black.
        let t = Triangle::new(Point::new(4, 0), Point::new(5, 0), Point::new(4, 1));
        let u = Triangle::new(Point::new(5, 0), Point::new(5, 1), Point::new(4, 1));
        assert_eq!(mean_inside(&t, &img), Some(Rgb::new(133, 67, 33)));
        assert_eq!(mean_inside(&u, &img), Some(Rgb::new(67, 33, 17)));
    }

    #[test]
    fn exact_on_uniform_region_matches_region_color() {
        let img = halves(20, 10);
        let t = tri((0, 0), (8, 0), (0, 9));
        assert_eq!(color_of(&t, &img, ColorMode::Exact), Rgb::new(200, 100, 50));
    }

    #[test]
    fn exact_falls_back_to_quick_for_slivers() {
        let img = halves(10, 10);
        let sliver = tri((0, 0), (4, 4), (8, 8));
        assert_eq!(mean_inside(&sliver, &img), None);
        assert_eq!(
            color_of(&sliver, &img, ColorMode::Exact),
            color_of(&sliver, &img, ColorMode::Quick)
        );
    }

    #[test]
    fn empty_image_is_black() {
        let img: Image<Rgba> = Image::from_vec(0, 0, Vec::new()).expect("empty image");
        let t = tri((0, 0), (5, 0), (0, 5));
        assert_eq!(color_of(&t, &img, ColorMode::Exact), Rgb::default());
        assert_eq!(color_of(&t, &img, ColorMode::Quick), Rgb::default());
    }

    #[test]
    fn contains_matches_exact_membership() {
        let t = tri((1, 1), (12, 3), (4, 10));
        let mut img = Image::new_fill(16, 16, Rgba::opaque(0, 0, 0));
        let mut inside = 0u64;
        for y in 0..16 {
            for x in 0..16 {
                if t.contains(Point::new(x, y)) {
                    *img.get_mut(x as usize, y as usize).expect("in bounds") =
                        Rgba::opaque(255, 255, 255);
                    inside += 1;
                }
            }
        }
        assert!(inside > 0);
        // Only pixels `contains` accepts are averaged, so the mean is pure white.
        assert_eq!(mean_inside(&t, &img), Some(Rgb::new(255, 255, 255)));
    }
}
