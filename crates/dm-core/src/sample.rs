use crate::border::{BorderMode, map_index};
use crate::image::ImageView;

/// Nearest-pixel lookup; integer coordinates are pixel centers.
pub fn sample_nearest<T: Copy>(img: &ImageView<'_, T>, x: f64, y: f64, border: BorderMode<T>) -> T {
    let xi = x.round() as isize;
    let yi = y.round() as isize;

    if img.width() == 0 || img.height() == 0 {
        if let BorderMode::Constant(v) = border {
            return v;
        }
        panic!("cannot sample an empty image with non-constant border");
    }

    let (Some(mx), Some(my)) = (
        map_index(xi, img.width(), &border),
        map_index(yi, img.height(), &border),
    ) else {
        let BorderMode::Constant(v) = border else {
            unreachable!("clamp and wrap map every index of a non-empty axis");
        };
        return v;
    };

    // SAFETY: `map_index` returns indices in `[0, len)`.
    unsafe { *img.get_unchecked(mx, my) }
}
