//! Radiance HDR encoder: header emission and scanline packing.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

use super::{RadianceHeader, rle};
use crate::error::HdrError;
use crate::rgbe::Rgbe;

/// Emit the ASCII header in the fixed order: signature, optional GAMMA and
/// EXPOSURE, optional PRIMARIES, mandatory FORMAT line, blank separator,
/// resolution line.
pub(crate) fn emit_header(header: &RadianceHeader) -> Vec<u8> {
    let mut text = String::from("#?RADIANCE\n");
    if let Some(gamma) = header.gamma {
        text.push_str(&format!("GAMMA={gamma}\n"));
    }
    if let Some(exposure) = header.exposure {
        text.push_str(&format!("EXPOSURE={exposure}\n"));
    }
    if let Some(primaries) = &header.primaries {
        if !primaries.is_empty() {
            text.push_str(&format!("PRIMARIES={primaries}\n"));
        }
    }
    text.push_str("FORMAT=32-bit_rle_rgbe\n\n");
    text.push_str(&format!("-Y {} +X {}\n", header.height, header.width));
    text.into_bytes()
}

/// Convert each row to four RGBE byte planes and append its RLE scanline.
///
/// `pixels` must hold exactly `width * height` triples; width bounds and the
/// RLE flag are validated by the caller.
pub(crate) fn encode_pixels(
    out: &mut Vec<u8>,
    pixels: &[f32],
    width: usize,
    height: usize,
    stop: &dyn Stop,
) -> Result<(), HdrError> {
    debug_assert_eq!(pixels.len(), width * height * 3);

    let mut planes = vec![0u8; width * 4];
    for (row, row_pixels) in pixels.chunks_exact(width * 3).enumerate() {
        if row % 16 == 0 {
            stop.check()?;
        }
        for (i, px) in row_pixels.chunks_exact(3).enumerate() {
            let quad = Rgbe::from_rgb([px[0], px[1], px[2]])?;
            planes[i] = quad.r;
            planes[i + width] = quad.g;
            planes[i + 2 * width] = quad.b;
            planes[i + 3 * width] = quad.e;
        }
        rle::encode_scanline(&planes, width, out);
    }
    Ok(())
}
