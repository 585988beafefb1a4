//! Portable Float Map decoder and encoder (internal).
//!
//! PFM is a minimal lossless format: three whitespace-delimited ASCII tokens
//! (`PF`, `<width> <height>`, `<scale>`), then raw 32-bit little-endian
//! float triples, rows stored bottom to top. The scale token's sign declares
//! byte order (negative = little-endian); its magnitude is ignored.
//!
//! Use the top-level [`crate::decode_pfm`], [`crate::encode_pfm`], or the
//! request builders.

pub(crate) mod decode;
pub(crate) mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::decode::DecodeOutput;
use crate::error::HdrError;
use crate::info::ImageFormat;
use crate::limits::Limits;

/// Parsed PFM header.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PfmHeader {
    pub width: u32,
    pub height: u32,
    /// Scale/byte-order token. Always negative here (little-endian data);
    /// the magnitude is carried but never applied to pixel values.
    pub scale: f32,
}

/// Decode PFM data to f32 RGB triples, top-to-bottom rows.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, HdrError> {
    let (header, offset) = decode::parse_header(data)?;
    let out_bytes = (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|px| px.checked_mul(3 * size_of::<f32>()))
        .ok_or(HdrError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height, out_bytes)?;
    }
    stop.check()?;
    let body = data.get(offset..).ok_or(HdrError::UnexpectedEof)?;
    let pixels = decode::decode_pixels(body, &header, stop)?;
    Ok(DecodeOutput::new(
        pixels,
        header.width,
        header.height,
        ImageFormat::Pfm,
        None,
    ))
}

/// Encode f32 RGB triples as a complete PFM file.
pub(crate) fn encode(
    pixels: &[f32],
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, HdrError> {
    encode::encode_pfm(pixels, width, height, stop)
}
