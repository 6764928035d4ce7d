//! Image encoding.

use alloc::format;
use alloc::vec::Vec;

use crate::pixel::PixelGrid;
use crate::SublumaError;

/// Encode an RGBA8 grid as a PNG.
///
/// # Errors
///
/// Returns [`SublumaError::InvalidInput`] for zero-sized grids (PNG has no
/// representation for them) and for dimensions beyond the format's 32-bit
/// range.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, SublumaError> {
    if grid.is_empty() {
        return Err(SublumaError::InvalidInput(format!(
            "cannot encode a {}x{} image as PNG",
            grid.width(),
            grid.height()
        )));
    }
    if u32::try_from(grid.width()).is_err() || u32::try_from(grid.height()).is_err() {
        return Err(SublumaError::InvalidInput(format!(
            "{}x{} exceeds the PNG dimension range",
            grid.width(),
            grid.height()
        )));
    }
    crate::codecs::png::encode_rgba8(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Rgba, OPAQUE};
    use crate::DecodeRequest;
    use alloc::vec::Vec;

    #[test]
    fn round_trip_through_png_bytes() {
        let pixels: Vec<Rgba<u8>> = (0..24u32)
            .map(|i| Rgba::new((i * 11) as u8, (i * 7) as u8, (i * 3) as u8, 255 - i as u8))
            .collect();
        let grid = PixelGrid::new(pixels, 6, 4).unwrap();

        let data = encode_png(&grid).unwrap();
        assert!(data.starts_with(&crate::info::PNG_SIGNATURE));

        let output = DecodeRequest::new(&data).decode().unwrap();
        assert_eq!(output.grid, grid);
        assert!(output.info.has_alpha);
    }

    #[test]
    fn zero_sized_grids_are_rejected() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let grid = PixelGrid::filled(w, h, Rgba::new(0, 0, 0, OPAQUE));
            assert!(matches!(
                encode_png(&grid),
                Err(SublumaError::InvalidInput(_))
            ));
        }
    }
}
