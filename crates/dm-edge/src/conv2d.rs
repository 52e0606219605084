use dm_core::{BorderMode, Image, ImageView, Rgba, RgbaImage, clamp_channel, map_index};

use crate::kernels2d::Kernel2D;

/// Applies `kernel` to the R, G and B channels of `src`; alpha is copied.
///
/// Sums accumulate in `f32` and are rounded and clamped to `[0, 255]`.
/// Neighbors outside the image resolve through `border`.
pub fn convolve_rgba(src: &RgbaImage, kernel: &Kernel2D, border: BorderMode<Rgba>) -> RgbaImage {
    let w = src.width();
    let h = src.height();
    let mut out = Image::new_fill(w, h, Rgba::default());
    if src.is_empty() {
        return out;
    }

    let view = src.as_view();
    let size = kernel.size();
    let radius = kernel.radius();
    let weights = kernel.weights();
    let dst = out.data_mut();

    for y in 0..h {
        let rows_inside = y >= radius && y + radius < h;
        for x in 0..w {
            let inside = rows_inside && x >= radius && x + radius < w;
            let (mut acc_r, mut acc_g, mut acc_b) = (0.0f32, 0.0f32, 0.0f32);

            for (k, &kv) in weights.iter().enumerate() {
                let nx = x as isize + (k % size) as isize - radius as isize;
                let ny = y as isize + (k / size) as isize - radius as isize;
                let px = if inside {
                    // SAFETY: `inside` guarantees the full kernel footprint
                    // around `(x, y)` lies within `[0, w) x [0, h)`.
                    unsafe { *view.get_unchecked(nx as usize, ny as usize) }
                } else {
                    neighbor(&view, nx, ny, &border)
                };
                acc_r += kv * f32::from(px.r);
                acc_g += kv * f32::from(px.g);
                acc_b += kv * f32::from(px.b);
            }

            let idx = y * w + x;
            dst[idx] = Rgba::new(
                clamp_channel(acc_r),
                clamp_channel(acc_g),
                clamp_channel(acc_b),
                src.data()[idx].a,
            );
        }
    }

    out
}

fn neighbor(view: &ImageView<'_, Rgba>, x: isize, y: isize, border: &BorderMode<Rgba>) -> Rgba {
    match (
        map_index(x, view.width(), border),
        map_index(y, view.height(), border),
    ) {
        // SAFETY: `map_index` returns indices in `[0, len)`.
        (Some(mx), Some(my)) => unsafe { *view.get_unchecked(mx, my) },
        _ => match border {
            BorderMode::Constant(v) => *v,
            BorderMode::Clamp | BorderMode::Wrap => Rgba::default(),
        },
    }
}

#[cfg(test)]
mod tests {
    use dm_core::{BorderMode, Image, Rgba};

    use crate::conv2d::convolve_rgba;
    use crate::kernels2d::Kernel2D;

    fn gray_row(values: &[u8]) -> Image<Rgba> {
        let data = values.iter().map(|&v| Rgba::new(v, v, v, 200)).collect();
        Image::from_vec(values.len(), 1, data).expect("valid image")
    }

    #[test]
    fn identity_kernel_copies_pixels() {
        let src = gray_row(&[1, 2, 3, 4]);
        let k = Kernel2D::new(vec![1.0]).expect("1x1 kernel");

        let out = convolve_rgba(&src, &k, BorderMode::Clamp);
        assert_eq!(out, src);
    }

    #[test]
    fn box_blur_border_modes() {
        let src = gray_row(&[30, 60, 90]);
        let k = Kernel2D::new(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0])
            .expect("3x3 kernel");

        let clamp = convolve_rgba(&src, &k, BorderMode::Clamp);
        let red: Vec<u8> = clamp.data().iter().map(|p| p.r).collect();
        assert_eq!(red, vec![120, 180, 240]);

        let zero = convolve_rgba(&src, &k, BorderMode::Constant(Rgba::default()));
        let red: Vec<u8> = zero.data().iter().map(|p| p.r).collect();
        assert_eq!(red, vec![90, 180, 150]);

        let wrap = convolve_rgba(&src, &k, BorderMode::Wrap);
        let red: Vec<u8> = wrap.data().iter().map(|p| p.r).collect();
        assert_eq!(red, vec![180, 180, 180]);
    }

    #[test]
    fn alpha_is_preserved_and_output_saturates() {
        let src = gray_row(&[200, 200, 200]);
        let k = Kernel2D::new(vec![2.0]).expect("1x1 kernel");

        let out = convolve_rgba(&src, &k, BorderMode::Clamp);
        assert!(out.data().iter().all(|p| p.r == 255 && p.a == 200));
    }

    #[test]
    fn flat_image_has_no_edges() {
        let src = Image::new_fill(9, 7, Rgba::new(137, 137, 137, 255));
        let k = Kernel2D::laplacian(5).expect("odd size");

        for border in [BorderMode::Clamp, BorderMode::Wrap] {
            let out = convolve_rgba(&src, &k, border);
            assert!(out.data().iter().all(|p| p.r == 0 && p.g == 0 && p.b == 0));
        }
    }

    #[test]
    fn empty_image_stays_empty() {
        let src = Image::<Rgba>::from_vec(0, 3, Vec::new()).expect("empty image");
        let k = Kernel2D::box_blur(3).expect("odd size");

        let out = convolve_rgba(&src, &k, BorderMode::Clamp);
        assert_eq!(out.width(), 0);
        assert_eq!(out.height(), 3);
    }
}
