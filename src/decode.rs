//! Image decoding.

use crate::info::PNG_SIGNATURE;
use crate::pixel::PixelGrid;
use crate::{ImageInfo, Limits, SublumaError};

/// Decoded image output.
#[derive(Debug)]
pub struct DecodeOutput {
    /// Decoded RGBA8 pixel grid.
    pub grid: PixelGrid,
    /// Metadata from the container header.
    pub info: ImageInfo,
}

impl DecodeOutput {
    /// Image width in pixels (convenience accessor).
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Image height in pixels (convenience accessor).
    pub fn height(&self) -> usize {
        self.grid.height()
    }
}

/// Image decode request builder.
///
/// Every decode lands in an RGBA8 [`PixelGrid`] regardless of how the
/// container stores its pixels.
///
/// # Example
///
/// ```no_run
/// use subluma::DecodeRequest;
///
/// let data: &[u8] = &[]; // your image bytes
/// let output = DecodeRequest::new(data).decode()?;
/// println!("{}x{}", output.width(), output.height());
/// # Ok::<(), subluma::SublumaError>(())
/// ```
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    /// Create a new decode request.
    ///
    /// The container format is detected from magic bytes.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Set resource limits, checked after the header is read and before
    /// pixels are allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the image to pixels.
    pub fn decode(self) -> Result<DecodeOutput, SublumaError> {
        if !self.data.starts_with(&PNG_SIGNATURE) {
            return Err(SublumaError::UnrecognizedFormat);
        }
        crate::codecs::png::decode(self.data, self.limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Rgba, OPAQUE};

    #[test]
    fn builder_pattern() {
        let limits = Limits::none();
        let request = DecodeRequest::new(b"test").with_limits(&limits);
        assert!(request.limits.is_some());
    }

    #[test]
    fn unrecognized_format_error() {
        let result = DecodeRequest::new(b"not an image").decode();
        assert!(matches!(result, Err(SublumaError::UnrecognizedFormat)));
    }

    #[test]
    fn limits_are_enforced_before_allocation() {
        let grid = PixelGrid::filled(16, 16, Rgba::new(0, 0, 0, OPAQUE));
        let data = crate::encode_png(&grid).unwrap();

        let limits = Limits {
            max_pixels: Some(100),
            ..Default::default()
        };
        let result = DecodeRequest::new(&data).with_limits(&limits).decode();
        assert!(matches!(result, Err(SublumaError::LimitExceeded(_))));

        let relaxed = Limits {
            max_pixels: Some(1000),
            ..Default::default()
        };
        let output = DecodeRequest::new(&data).with_limits(&relaxed).decode().unwrap();
        assert_eq!((output.width(), output.height()), (16, 16));
    }
}
