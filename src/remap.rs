//! Subpixel remapping transforms.
//!
//! The forward transform packs each run of three source columns into one
//! output pixel, one luma sample per channel, mimicking an LCD subpixel
//! layout at one third the width. The two reverse transforms undo the
//! spatial packing, rendering each channel back out as its own column
//! either as grayscale or tinted in the channel's own color.
//!
//! All three transforms are pure: they read the input grid, allocate a
//! fresh output grid, and return it. They cannot fail, and they accept
//! zero-sized grids.

use crate::channel::Subpixel;
use crate::pixel::{PixelGrid, Rgba, OPAQUE};
use crate::weights::LumaWeights;

/// Alpha policy for [`Remapper::expand_to_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaMode {
    /// Every emitted pixel is fully opaque.
    #[default]
    Opaque,
    /// Each emitted pixel inherits its source pixel's alpha.
    Preserve,
}

/// Configured remapper.
///
/// ```
/// use subluma::{PixelGrid, Remapper, Rgba, OPAQUE};
///
/// let input = PixelGrid::filled(6, 4, Rgba::new(200, 120, 40, OPAQUE));
/// let packed = Remapper::new().compress(&input);
/// assert_eq!((packed.width(), packed.height()), (2, 4));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Remapper {
    weights: LumaWeights,
    alpha: AlphaMode,
}

impl Remapper {
    /// Remapper with Rec. 709 weights and opaque output alpha.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the luma weights used by [`compress`](Self::compress).
    pub fn with_weights(mut self, weights: LumaWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the alpha policy used by [`expand_to_color`](Self::expand_to_color).
    pub fn with_alpha(mut self, alpha: AlphaMode) -> Self {
        self.alpha = alpha;
        self
    }

    /// Packs a full-color grid into its subpixel form.
    ///
    /// Output is `ceil(width / 3) x height`. The luma of source column `x`
    /// lands in channel `x % 3` of output pixel `x / 3`; when the width is
    /// not a multiple of three the last output pixel's unfed channels stay
    /// 0. Source alpha is ignored and every output pixel is opaque.
    pub fn compress(&self, input: &PixelGrid) -> PixelGrid {
        let mut output = PixelGrid::filled(
            input.width().div_ceil(3),
            input.height(),
            Rgba::new(0, 0, 0, OPAQUE),
        );
        for (src_row, dst_row) in input.rows().zip(output.rows_mut()) {
            for (x, &pixel) in src_row.iter().enumerate() {
                let luma = self.weights.luma(pixel);
                Subpixel::from_column(x).store(&mut dst_row[x / 3], luma);
            }
        }
        output
    }

    /// Unpacks a subpixel grid, rendering each channel as a gray column.
    ///
    /// Output is `3 * width x height`. Input pixel `x` becomes output
    /// columns `3x..3x + 3`, each a gray level equal to the R, G, and B
    /// channel respectively, fully opaque.
    pub fn expand_to_gray(&self, input: &PixelGrid) -> PixelGrid {
        let mut output = PixelGrid::filled(
            input.width() * 3,
            input.height(),
            Rgba::new(0, 0, 0, OPAQUE),
        );
        for (src_row, dst_row) in input.rows().zip(output.rows_mut()) {
            for (src, triplet) in src_row.iter().zip(dst_row.chunks_exact_mut(3)) {
                for (subpixel, out) in Subpixel::ALL.into_iter().zip(triplet) {
                    let level = subpixel.of(*src);
                    *out = Rgba::new(level, level, level, OPAQUE);
                }
            }
        }
        output
    }

    /// Unpacks a subpixel grid, tinting each emitted column in its own
    /// channel.
    ///
    /// Same spatial expansion as [`expand_to_gray`](Self::expand_to_gray),
    /// but the first emitted pixel carries the source R value in its R
    /// channel only, the second G in G only, the third B in B only. Alpha
    /// follows the configured [`AlphaMode`].
    pub fn expand_to_color(&self, input: &PixelGrid) -> PixelGrid {
        let mut output = PixelGrid::filled(
            input.width() * 3,
            input.height(),
            Rgba::new(0, 0, 0, OPAQUE),
        );
        for (src_row, dst_row) in input.rows().zip(output.rows_mut()) {
            for (src, triplet) in src_row.iter().zip(dst_row.chunks_exact_mut(3)) {
                let alpha = match self.alpha {
                    AlphaMode::Opaque => OPAQUE,
                    AlphaMode::Preserve => src.a,
                };
                for (subpixel, out) in Subpixel::ALL.into_iter().zip(triplet) {
                    let mut pixel = Rgba::new(0, 0, 0, alpha);
                    subpixel.store(&mut pixel, subpixel.of(*src));
                    *out = pixel;
                }
            }
        }
        output
    }
}
