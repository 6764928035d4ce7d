//! Luma weighting.

use crate::pixel::Rgba;

/// Channel weights for the luma sum.
///
/// The three weights are expected to sum to 1.0; the computed luma is
/// clamped to the 8-bit range regardless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumaWeights {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Rec. 709 weights, the default for modern sRGB content.
pub const REC_709: LumaWeights = LumaWeights {
    r: 0.2126,
    g: 0.7152,
    b: 0.0722,
};

/// Rec. 601 weights, matching legacy SDTV-era conversions.
pub const REC_601: LumaWeights = LumaWeights {
    r: 0.299,
    g: 0.587,
    b: 0.114,
};

impl Default for LumaWeights {
    fn default() -> Self {
        REC_709
    }
}

impl LumaWeights {
    /// Weighted luma of one pixel, rounded to the nearest 8-bit value.
    ///
    /// Alpha does not participate.
    pub fn luma(&self, pixel: Rgba<u8>) -> u8 {
        let sum = self.r * f32::from(pixel.r)
            + self.g * f32::from(pixel.g)
            + self.b * f32::from(pixel.b);
        // Round half up without `f32::round`, which needs std.
        (sum.clamp(0.0, 255.0) + 0.5) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::OPAQUE;

    #[test]
    fn rec601_primaries() {
        assert_eq!(REC_601.luma(Rgba::new(255, 0, 0, OPAQUE)), 76);
        assert_eq!(REC_601.luma(Rgba::new(0, 255, 0, OPAQUE)), 150);
        assert_eq!(REC_601.luma(Rgba::new(0, 0, 255, OPAQUE)), 29);
    }

    #[test]
    fn rec709_primaries() {
        assert_eq!(REC_709.luma(Rgba::new(255, 0, 0, OPAQUE)), 54);
        assert_eq!(REC_709.luma(Rgba::new(0, 255, 0, OPAQUE)), 182);
        assert_eq!(REC_709.luma(Rgba::new(0, 0, 255, OPAQUE)), 18);
    }

    #[test]
    fn extremes_stay_in_range() {
        assert_eq!(REC_709.luma(Rgba::new(0, 0, 0, OPAQUE)), 0);
        assert_eq!(REC_709.luma(Rgba::new(255, 255, 255, OPAQUE)), 255);
        assert_eq!(REC_601.luma(Rgba::new(255, 255, 255, 0)), 255);
    }

    #[test]
    fn gray_is_identity() {
        // Equal channels with weights summing to 1 must reproduce the level.
        for level in [0u8, 1, 127, 128, 200, 254, 255] {
            let gray = Rgba::new(level, level, level, OPAQUE);
            assert_eq!(REC_709.luma(gray), level);
            assert_eq!(REC_601.luma(gray), level);
        }
    }
}
