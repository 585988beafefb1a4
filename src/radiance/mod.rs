//! Radiance HDR (RGBE) decoder and encoder (internal).
//!
//! A `.hdr`/`.pic` file is an ASCII header (signature, metadata lines, blank
//! separator, resolution line) followed by `height` run-length encoded
//! scanlines, each four byte planes of shared-exponent RGBE pixels.
//!
//! Use the top-level [`crate::decode_radiance`], [`crate::encode_radiance`],
//! or the request builders.

pub(crate) mod decode;
pub(crate) mod encode;
mod rle;

use alloc::string::String;
use alloc::vec::Vec;
use enough::Stop;

use crate::decode::DecodeOutput;
use crate::error::HdrError;
use crate::info::ImageFormat;
use crate::limits::Limits;

/// Parsed Radiance header. Immutable once parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct RadianceHeader {
    pub width: u32,
    pub height: u32,
    /// Value of the GAMMA line, if present.
    pub gamma: Option<f32>,
    /// Value of the EXPOSURE line, if present.
    pub exposure: Option<f32>,
    /// Chromaticity descriptor (8 numbers as text), carried verbatim and
    /// never interpreted.
    pub primaries: Option<String>,
    /// Whether a `FORMAT=32-bit_rle_rgbe` line was seen (or, on encode,
    /// whether RLE scanlines are requested).
    pub run_length_encoded: bool,
}

impl RadianceHeader {
    /// Rec.2020 chromaticities, the default PRIMARIES descriptor on encode.
    pub const REC2020_PRIMARIES: &'static str =
        "0.708 0.292 0.170 0.797 0.131 0.046 0.3127 0.3290";

    /// Header with default metadata: no gamma/exposure, Rec.2020 primaries,
    /// RLE scanlines.
    pub fn new(width: u32, height: u32) -> Self {
        RadianceHeader {
            width,
            height,
            gamma: None,
            exposure: None,
            primaries: Some(String::from(Self::REC2020_PRIMARIES)),
            run_length_encoded: true,
        }
    }
}

// ── Cursor for reading from &[u8] ───────────────────────────────────

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], HdrError> {
        let end = self.pos.checked_add(N).ok_or(HdrError::UnexpectedEof)?;
        let bytes = self.data.get(self.pos..end).ok_or(HdrError::UnexpectedEof)?;
        self.pos = end;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub(crate) fn read_slice(&mut self, n: usize) -> Result<&'a [u8], HdrError> {
        let end = self.pos.checked_add(n).ok_or(HdrError::UnexpectedEof)?;
        let bytes = self.data.get(self.pos..end).ok_or(HdrError::UnexpectedEof)?;
        self.pos = end;
        Ok(bytes)
    }
}

// ── Entry points (called from DecodeRequest / EncodeRequest) ────────

/// Decode Radiance HDR data to f32 RGB triples, top-to-bottom rows.
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
        ImageFormat::Radiance,
        Some(header),
    ))
}

/// Encode f32 RGB triples as a complete Radiance HDR file.
pub(crate) fn encode(
    pixels: &[f32],
    header: &RadianceHeader,
    stop: &dyn Stop,
) -> Result<Vec<u8>, HdrError> {
    let width = header.width as usize;
    let height = header.height as usize;
    if width == 0 || height == 0 {
        return Err(HdrError::InvalidHeader("zero image dimensions".into()));
    }
    let expected = width
        .checked_mul(height)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(HdrError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    if pixels.len() < expected {
        return Err(HdrError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }
    if !header.run_length_encoded {
        return Err(HdrError::UnsupportedVariant(
            "raw (non-RLE) scanline encoding".into(),
        ));
    }
    rle::check_width(header.width)?;
    stop.check()?;

    let mut out = encode::emit_header(header);
    // RLE rarely expands; the uncompressed plane size is a fair guess
    out.reserve(width * height * 4);
    encode::encode_pixels(&mut out, &pixels[..expected], width, height, stop)?;
    Ok(out)
}
