//! Radiance HDR decoder: header parse and scanline decode loop.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

use super::{Cursor, RadianceHeader, rle};
use crate::error::HdrError;
use crate::rgbe::Rgbe;

/// Pull the next non-blank `\n`-terminated header line.
///
/// Running out of input before a newline means the header never reached its
/// resolution line, which is a header error rather than a short read.
fn next_line<'a>(data: &'a [u8], pos: &mut usize) -> Result<&'a str, HdrError> {
    loop {
        let start = *pos;
        let len = data
            .get(start..)
            .and_then(|rest| rest.iter().position(|&b| b == b'\n'))
            .ok_or_else(|| HdrError::InvalidHeader("truncated header".into()))?;
        *pos = start + len + 1;
        if len == 0 {
            continue;
        }
        return core::str::from_utf8(&data[start..start + len])
            .map_err(|_| HdrError::InvalidHeader("non-ASCII header line".into()));
    }
}

fn parse_tag_f32(text: &str, tag: &str) -> Result<f32, HdrError> {
    let value: f32 = text
        .trim()
        .parse()
        .map_err(|_| HdrError::InvalidHeader(format!("bad {tag} value {text:?}")))?;
    if !(value > 0.0 && value.is_finite()) {
        return Err(HdrError::InvalidHeader(format!(
            "{tag} value {value} is not a positive finite number"
        )));
    }
    Ok(value)
}

/// Decimal digits only; no sign, no surrounding whitespace.
fn parse_dim(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Tokenize the fixed resolution grammar `-Y <height> +X <width>`.
fn parse_resolution(line: &str) -> Option<(u32, u32)> {
    let rest = line.strip_prefix("-Y ")?;
    let (height_text, rest) = rest.split_once(' ')?;
    let width_text = rest.strip_prefix("+X ")?;
    Some((parse_dim(width_text)?, parse_dim(height_text)?))
}

/// Parse the ASCII header, returning it with the offset of the first
/// scanline byte.
pub(crate) fn parse_header(data: &[u8]) -> Result<(RadianceHeader, usize), HdrError> {
    let mut pos = 0;

    let signature = next_line(data, &mut pos)?;
    if signature != "#?RADIANCE" && signature != "#?RGBE" {
        return Err(HdrError::InvalidHeader(format!(
            "unknown signature {signature:?}"
        )));
    }

    // accumulate fields until the resolution line freezes the header
    let mut gamma = None;
    let mut exposure = None;
    let mut primaries = None;
    let mut run_length_encoded = false;
    loop {
        let line = next_line(data, &mut pos)?;
        if let Some(rest) = line.strip_prefix("PRIMARIES=") {
            primaries = Some(String::from(rest.trim()));
        } else if let Some(rest) = line.strip_prefix("FORMAT=") {
            if rest != "32-bit_rle_rgbe" {
                return Err(HdrError::InvalidHeader(format!(
                    "unsupported FORMAT value {rest:?}"
                )));
            }
            run_length_encoded = true;
        } else if let Some(rest) = line.strip_prefix("GAMMA=") {
            gamma = Some(parse_tag_f32(rest, "GAMMA")?);
        } else if let Some(rest) = line.strip_prefix("EXPOSURE=") {
            exposure = Some(parse_tag_f32(rest, "EXPOSURE")?);
        } else if let Some((width, height)) = parse_resolution(line) {
            if width == 0 || height == 0 {
                return Err(HdrError::InvalidHeader(format!(
                    "zero dimension in resolution line {line:?}"
                )));
            }
            let header = RadianceHeader {
                width,
                height,
                gamma,
                exposure,
                primaries,
                run_length_encoded,
            };
            return Ok((header, pos));
        } else {
            return Err(HdrError::InvalidHeader(format!(
                "unrecognized header line {line:?}"
            )));
        }
    }
}

/// Decode `height` RLE scanlines to f32 RGB triples, top-to-bottom rows.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &RadianceHeader,
    stop: &dyn Stop,
) -> Result<Vec<f32>, HdrError> {
    rle::check_width(header.width)?;
    let width = header.width as usize;
    let height = header.height as usize;

    let mut cursor = Cursor::new(data);
    let mut planes = vec![0u8; width * 4];
    let mut out = Vec::with_capacity(width * height * 3);
    for row in 0..height {
        if row % 16 == 0 {
            stop.check()?;
        }
        rle::decode_scanline(&mut cursor, width, &mut planes)?;
        for i in 0..width {
            let quad = Rgbe::from([
                planes[i],
                planes[i + width],
                planes[i + 2 * width],
                planes[i + 3 * width],
            ]);
            out.extend_from_slice(&quad.to_rgb());
        }
    }
    Ok(out)
}
