use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dm_core::{BorderMode, Image, Rgba, RgbaImage};
use dm_edge::{Kernel2D, convolve_rgba, extract_feature_points};

fn build_disc(width: usize, height: usize) -> RgbaImage {
    let cx = 0.5 * width as f32;
    let cy = 0.5 * height as f32;
    let r2 = (0.3 * width.min(height) as f32).powi(2);

    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            data.push(if dx * dx + dy * dy <= r2 {
                Rgba::opaque(230, 180, 40)
            } else {
                Rgba::opaque(20, 30, 90)
            });
        }
    }

    Image::from_vec(width, height, data).expect("valid image")
}

fn bench_box_blur(c: &mut Criterion) {
    let img = build_disc(640, 480);
    let kernel = Kernel2D::box_blur(5).expect("odd size");

    c.bench_function("box_blur5_rgba_640x480", |b| {
        b.iter(|| {
            let out = convolve_rgba(black_box(&img), black_box(&kernel), BorderMode::Clamp);
            black_box(out.width());
        });
    });
}

fn bench_feature_points(c: &mut Criterion) {
    let img = build_disc(640, 480);

    c.bench_function("feature_points_640x480", |b| {
        b.iter(|| {
            let pts = extract_feature_points(black_box(&img), 5, 5, 50).expect("valid kernels");
            black_box(pts.len());
        });
    });
}

criterion_group!(benches, bench_box_blur, bench_feature_points);
criterion_main!(benches);
