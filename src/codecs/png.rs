//! PNG codec adapter using the png crate.
//!
//! Note: this module requires std due to the png crate's use of std::io
//! traits. Every decode is normalized to RGBA8 so the transforms only ever
//! see one pixel layout.

extern crate std;

use std::io::Cursor;

use alloc::vec::Vec;

use crate::pixel::{PixelGrid, Rgba, OPAQUE};
use crate::{DecodeOutput, ImageInfo, Limits, SublumaError};

fn header_info(info: &png::Info<'_>) -> ImageInfo {
    ImageInfo {
        width: info.width,
        height: info.height,
        bit_depth: info.bit_depth as u8,
        has_alpha: matches!(
            info.color_type,
            png::ColorType::Rgba | png::ColorType::GrayscaleAlpha
        ),
    }
}

/// Probe PNG metadata without decoding pixels.
pub(crate) fn probe(data: &[u8]) -> Result<ImageInfo, SublumaError> {
    let decoder = png::Decoder::new(Cursor::new(data));
    let reader = decoder.read_info().map_err(SublumaError::from_codec)?;
    Ok(header_info(reader.info()))
}

/// Decode PNG of any color type to RGBA8 pixels.
pub(crate) fn decode(data: &[u8], limits: Option<&Limits>) -> Result<DecodeOutput, SublumaError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    // Expand indexed and low-bit-depth data, strip 16-bit to 8.
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info().map_err(SublumaError::from_codec)?;
    let info = header_info(reader.info());

    if let Some(limits) = limits {
        limits
            .check_dimensions(u64::from(info.width), u64::from(info.height))
            .map_err(|reason| SublumaError::LimitExceeded(reason.into()))?;
    }

    let buffer_size = reader.output_buffer_size().ok_or_else(|| {
        SublumaError::InvalidInput("cannot determine PNG output buffer size".into())
    })?;
    if let Some(limits) = limits {
        limits
            .check_memory(buffer_size as u64)
            .map_err(|reason| SublumaError::LimitExceeded(reason.into()))?;
    }

    let mut raw_pixels = alloc::vec![0u8; buffer_size];
    let output_info = reader
        .next_frame(&mut raw_pixels)
        .map_err(SublumaError::from_codec)?;
    raw_pixels.truncate(output_info.buffer_size());

    let (decoded_color_type, _bit_depth) = reader.output_color_type();
    let w = info.width as usize;
    let h = info.height as usize;

    let pixels: Vec<Rgba<u8>> = match decoded_color_type {
        png::ColorType::Rgba => {
            let rgba: &[Rgba<u8>] = bytemuck::cast_slice(&raw_pixels);
            rgba.to_vec()
        }
        png::ColorType::Rgb => raw_pixels
            .chunks_exact(3)
            .map(|rgb| Rgba {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
                a: OPAQUE,
            })
            .collect(),
        png::ColorType::GrayscaleAlpha => raw_pixels
            .chunks_exact(2)
            .map(|ga| Rgba {
                r: ga[0],
                g: ga[0],
                b: ga[0],
                a: ga[1],
            })
            .collect(),
        png::ColorType::Grayscale => raw_pixels
            .iter()
            .map(|&g| Rgba {
                r: g,
                g,
                b: g,
                a: OPAQUE,
            })
            .collect(),
        // EXPAND turns indexed data into RGB/RGBA before it reaches here.
        png::ColorType::Indexed => {
            return Err(SublumaError::InvalidInput(
                "indexed PNG was not expanded by the decoder".into(),
            ));
        }
    };

    Ok(DecodeOutput {
        grid: PixelGrid::new(pixels, w, h)?,
        info,
    })
}

/// Encode RGBA8 pixels to PNG.
pub(crate) fn encode_rgba8(grid: &PixelGrid) -> Result<Vec<u8>, SublumaError> {
    let width = grid.width() as u32;
    let height = grid.height() as u32;
    let bytes: &[u8] = bytemuck::cast_slice(grid.pixels());

    let mut output = Vec::new();
    let mut encoder = png::Encoder::new(&mut output, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().map_err(SublumaError::from_codec)?;
    writer
        .write_image_data(bytes)
        .map_err(SublumaError::from_codec)?;
    drop(writer);

    Ok(output)
}
