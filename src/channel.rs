//! Subpixel channel addressing.
//!
//! Display subpixels run left to right as red, green, blue. The remapper
//! uses that ordering to decide which channel of a packed pixel carries
//! the luma for a given source column.

use crate::pixel::Rgba;

/// One of the three color channels of an RGBA pixel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subpixel {
    Red,
    Green,
    Blue,
}

impl Subpixel {
    /// All three subpixels in display order.
    pub const ALL: [Subpixel; 3] = [Subpixel::Red, Subpixel::Green, Subpixel::Blue];

    /// The subpixel that carries column `x` of the unpacked image.
    ///
    /// Column 0 maps to red, 1 to green, 2 to blue, then the cycle repeats.
    pub fn from_column(x: usize) -> Subpixel {
        match x % 3 {
            0 => Subpixel::Red,
            1 => Subpixel::Green,
            _ => Subpixel::Blue,
        }
    }

    /// Reads this channel out of a pixel.
    pub fn of(self, pixel: Rgba<u8>) -> u8 {
        match self {
            Subpixel::Red => pixel.r,
            Subpixel::Green => pixel.g,
            Subpixel::Blue => pixel.b,
        }
    }

    /// Writes `value` into this channel of `pixel`.
    pub fn store(self, pixel: &mut Rgba<u8>, value: u8) {
        match self {
            Subpixel::Red => pixel.r = value,
            Subpixel::Green => pixel.g = value,
            Subpixel::Blue => pixel.b = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::OPAQUE;

    #[test]
    fn columns_cycle_through_channels() {
        assert_eq!(Subpixel::from_column(0), Subpixel::Red);
        assert_eq!(Subpixel::from_column(1), Subpixel::Green);
        assert_eq!(Subpixel::from_column(2), Subpixel::Blue);
        assert_eq!(Subpixel::from_column(3), Subpixel::Red);
        assert_eq!(Subpixel::from_column(7), Subpixel::Green);
    }

    #[test]
    fn store_then_read_back() {
        let mut pixel = Rgba::new(0, 0, 0, OPAQUE);
        for (i, subpixel) in Subpixel::ALL.into_iter().enumerate() {
            subpixel.store(&mut pixel, 10 * (i as u8 + 1));
        }
        assert_eq!(pixel, Rgba::new(10, 20, 30, OPAQUE));
        assert_eq!(Subpixel::Green.of(pixel), 20);
    }
}
