use dm_core::{Rgba, RgbaImage, clamp_channel};

/// Rec. 709 luma weights.
pub const LUMA_R: f32 = 0.2126;
pub const LUMA_G: f32 = 0.7152;
pub const LUMA_B: f32 = 0.0722;

/// Per-pixel luminance broadcast to R, G and B; alpha forced opaque.
pub fn grayscale(src: &RgbaImage) -> RgbaImage {
    src.map(|px| {
        let l = clamp_channel(
            LUMA_R * f32::from(px.r) + LUMA_G * f32::from(px.g) + LUMA_B * f32::from(px.b),
        );
        Rgba::opaque(l, l, l)
    })
}
