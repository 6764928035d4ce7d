//! Owned RGBA pixel grid.
//!
//! The grid is the currency of every operation in this crate: decoding
//! produces one, the remapper consumes one and allocates another, encoding
//! serializes one. Pixels are typed `rgb::Rgba<u8>` throughout.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

pub use rgb::Rgba;

use crate::error::SublumaError;

/// Fully opaque alpha.
pub const OPAQUE: u8 = 255;

/// Owned rectangular RGBA8 buffer.
///
/// Rows are tightly packed with no stride padding; pixel `(x, y)` lives at
/// index `y * width + x`. Zero-width and zero-height grids are valid and
/// hold no pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<Rgba<u8>>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Wraps an existing pixel vec with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`SublumaError::InvalidInput`] if `pixels.len()` is not
    /// exactly `width * height`.
    pub fn new(pixels: Vec<Rgba<u8>>, width: usize, height: usize) -> Result<Self, SublumaError> {
        let expected = width.checked_mul(height).ok_or_else(|| {
            SublumaError::InvalidInput(format!("{width}x{height} pixel count overflows usize"))
        })?;
        if pixels.len() != expected {
            return Err(SublumaError::InvalidInput(format!(
                "buffer holds {} pixels but {width}x{height} needs {expected}",
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Allocates a grid with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Rgba<u8>) -> Self {
        Self {
            pixels: vec![fill; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba<u8>] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba<u8>] {
        &mut self.pixels
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[Rgba<u8>] {
        assert!(y < self.height, "row {y} out of range for height {}", self.height);
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Iterates rows top to bottom. Yields nothing for empty grids.
    pub fn rows(&self) -> core::slice::ChunksExact<'_, Rgba<u8>> {
        // max(1) keeps the chunk size legal for zero-width grids, whose
        // backing vec is empty anyway.
        self.pixels.chunks_exact(self.width.max(1))
    }

    pub fn rows_mut(&mut self) -> core::slice::ChunksExactMut<'_, Rgba<u8>> {
        let width = self.width.max(1);
        self.pixels.chunks_exact_mut(width)
    }

    /// Consumes the grid, returning the backing vec.
    pub fn into_vec(self) -> Vec<Rgba<u8>> {
        self.pixels
    }
}

impl fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PixelGrid({}x{})", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_length_mismatch() {
        let result = PixelGrid::new(vec![Rgba::new(0, 0, 0, OPAQUE); 5], 2, 3);
        assert!(matches!(result, Err(SublumaError::InvalidInput(_))));
    }

    #[test]
    fn filled_fills_every_pixel() {
        let fill = Rgba::new(10, 20, 30, OPAQUE);
        let grid = PixelGrid::filled(4, 2, fill);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert!(grid.pixels().iter().all(|&p| p == fill));
    }

    #[test]
    fn zero_size_grids_are_valid() {
        for (w, h) in [(0, 0), (0, 3), (3, 0)] {
            let grid = PixelGrid::new(Vec::new(), w, h).unwrap();
            assert!(grid.is_empty());
            assert_eq!(grid.rows().count(), 0);
        }
    }

    #[test]
    fn rows_walk_top_to_bottom() {
        let pixels: Vec<Rgba<u8>> = (0..6).map(|i| Rgba::new(i, 0, 0, OPAQUE)).collect();
        let grid = PixelGrid::new(pixels, 3, 2).unwrap();
        let rows: Vec<&[Rgba<u8>]> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].r, 0);
        assert_eq!(rows[1][2].r, 5);
        assert_eq!(grid.row(1), rows[1]);
    }

    #[test]
    fn debug_prints_dimensions() {
        let grid = PixelGrid::filled(3, 1, Rgba::new(0, 0, 0, OPAQUE));
        assert_eq!(format!("{grid:?}"), "PixelGrid(3x1)");
    }
}
