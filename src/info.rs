//! Image metadata probing without full decode.

use crate::SublumaError;

/// Metadata read from a container header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    /// Stored width in pixels.
    pub width: u32,
    /// Stored height in pixels.
    pub height: u32,
    /// Stored bits per channel.
    pub bit_depth: u8,
    /// Whether the stored color type carries an alpha channel.
    pub has_alpha: bool,
}

/// PNG file signature.
pub(crate) const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Probe image metadata without decoding pixels.
///
/// Reads dimensions, bit depth, and alpha presence from the container
/// header. Input that does not start with a recognized signature is
/// [`SublumaError::UnrecognizedFormat`].
pub fn probe(data: &[u8]) -> Result<ImageInfo, SublumaError> {
    if !data.starts_with(&PNG_SIGNATURE) {
        return Err(SublumaError::UnrecognizedFormat);
    }
    crate::codecs::png::probe(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{PixelGrid, Rgba, OPAQUE};

    #[test]
    fn unrecognized_format() {
        let result = probe(b"not an image");
        assert!(matches!(result, Err(SublumaError::UnrecognizedFormat)));
    }

    #[test]
    fn truncated_header_is_a_codec_error() {
        let result = probe(&PNG_SIGNATURE);
        assert!(matches!(result, Err(SublumaError::Codec { .. })));
    }

    #[test]
    fn probe_reads_header_fields() {
        let grid = PixelGrid::filled(5, 2, Rgba::new(1, 2, 3, OPAQUE));
        let data = crate::encode_png(&grid).unwrap();

        let info = probe(&data).unwrap();
        assert_eq!(info.width, 5);
        assert_eq!(info.height, 2);
        assert_eq!(info.bit_depth, 8);
        assert!(info.has_alpha);
    }
}
