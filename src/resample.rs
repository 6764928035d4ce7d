//! Bilinear resampling.
//!
//! Used by callers to undo the aspect distortion the remapper introduces:
//! a packed image is a third as wide as its source, so scaling the height
//! by the same factor keeps the perceived aspect ratio. The routine is a
//! general-purpose resize and does not know about subpixel packing.

use crate::pixel::{PixelGrid, Rgba};

/// Resizes `src` to `dst_width x dst_height` with bilinear filtering.
///
/// Destination pixel centers map back into source pixel-center space and
/// clamp at the edges, so no sample reads out of bounds. A zero-sized
/// destination yields an empty grid; a zero-sized source fills the
/// destination with transparent black.
pub fn resize_bilinear(src: &PixelGrid, dst_width: usize, dst_height: usize) -> PixelGrid {
    let mut out = PixelGrid::filled(dst_width, dst_height, Rgba::new(0, 0, 0, 0));
    if src.is_empty() || out.is_empty() {
        return out;
    }

    let src_width = src.width();
    let src_height = src.height();
    let scale_x = src_width as f32 / dst_width as f32;
    let scale_y = src_height as f32 / dst_height as f32;
    let pixels = src.pixels();

    for (dst_y, dst_row) in out.rows_mut().enumerate() {
        let src_y = src_coord(dst_y, src_height, scale_y);
        // Coordinates are clamped non-negative, so truncation is floor.
        let y0 = src_y as usize;
        let y1 = (y0 + 1).min(src_height - 1);
        let fy = src_y - y0 as f32;

        for (dst_x, out_pixel) in dst_row.iter_mut().enumerate() {
            let src_x = src_coord(dst_x, src_width, scale_x);
            let x0 = src_x as usize;
            let x1 = (x0 + 1).min(src_width - 1);
            let fx = src_x - x0 as f32;

            let top = lerp(
                channels(pixels[y0 * src_width + x0]),
                channels(pixels[y0 * src_width + x1]),
                fx,
            );
            let bottom = lerp(
                channels(pixels[y1 * src_width + x0]),
                channels(pixels[y1 * src_width + x1]),
                fx,
            );
            let blended = lerp(top, bottom, fy);
            *out_pixel = Rgba::new(
                (blended[0] + 0.5) as u8,
                (blended[1] + 0.5) as u8,
                (blended[2] + 0.5) as u8,
                (blended[3] + 0.5) as u8,
            );
        }
    }
    out
}

/// Pixel-center position of destination index `i` in source space.
fn src_coord(i: usize, src_len: usize, scale: f32) -> f32 {
    let max = (src_len - 1) as f32;
    ((i as f32 + 0.5) * scale - 0.5).clamp(0.0, max)
}

fn channels(pixel: Rgba<u8>) -> [f32; 4] {
    [
        f32::from(pixel.r),
        f32::from(pixel.g),
        f32::from(pixel.b),
        f32::from(pixel.a),
    ]
}

fn lerp(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
    core::array::from_fn(|i| a[i] + (b[i] - a[i]) * t)
}
