//! # subluma
//!
//! Subpixel image remapper. The forward transform packs each run of three
//! source columns into one pixel, carrying the columns' luma values in the
//! R, G, and B channels, the way an LCD panel lays its subpixels out. The
//! reverse transforms unpack such an image back to three times the width,
//! either as grayscale or tinted per channel.
//!
//! The PNG adapter is feature-gated. The core transforms work on plain
//! pixel grids and need neither std nor any container format:
//!
//! ```toml
//! [dependencies]
//! subluma = { version = "0.1", default-features = false }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use subluma::{PixelGrid, Remapper, Rgba, OPAQUE, REC_601};
//!
//! let input = PixelGrid::new(
//!     vec![
//!         Rgba::new(255, 0, 0, OPAQUE),
//!         Rgba::new(0, 255, 0, OPAQUE),
//!         Rgba::new(0, 0, 255, OPAQUE),
//!     ],
//!     3,
//!     1,
//! )?;
//!
//! let remapper = Remapper::new().with_weights(REC_601);
//! let packed = remapper.compress(&input);
//! assert_eq!(packed.pixels(), &[Rgba::new(76, 150, 29, OPAQUE)]);
//!
//! let unpacked = remapper.expand_to_gray(&packed);
//! assert_eq!((unpacked.width(), unpacked.height()), (3, 1));
//! # Ok::<(), subluma::SublumaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod channel;
mod error;
mod limits;
mod pixel;
mod remap;
mod resample;
mod weights;

#[cfg(feature = "png")]
mod codecs;
#[cfg(feature = "png")]
mod decode;
#[cfg(feature = "png")]
mod encode;
#[cfg(feature = "png")]
mod info;

pub use channel::Subpixel;
pub use error::SublumaError;
pub use limits::Limits;
pub use pixel::{PixelGrid, Rgba, OPAQUE};
pub use remap::{AlphaMode, Remapper};
pub use resample::resize_bilinear;
pub use weights::{LumaWeights, REC_601, REC_709};

#[cfg(feature = "png")]
pub use decode::{DecodeOutput, DecodeRequest};
#[cfg(feature = "png")]
pub use encode::encode_png;
#[cfg(feature = "png")]
pub use info::{probe, ImageInfo};
