//! PFM encoder.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::HdrError;

/// Encode f32 RGB triples as PFM: three-token header, then rows written
/// bottom to top as raw little-endian floats. Lossless.
pub(crate) fn encode_pfm(
    pixels: &[f32],
    width: u32,
    height: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, HdrError> {
    let w = width as usize;
    let h = height as usize;
    if w == 0 || h == 0 {
        return Err(HdrError::InvalidHeader("zero image dimensions".into()));
    }
    let expected = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(3))
        .ok_or(HdrError::DimensionsTooLarge { width, height })?;
    if pixels.len() < expected {
        return Err(HdrError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }

    let header = format!("PF\n{width} {height}\n-1.0\n");
    let body_bytes = expected
        .checked_mul(size_of::<f32>())
        .ok_or(HdrError::DimensionsTooLarge { width, height })?;
    let mut out = Vec::with_capacity(header.len().saturating_add(body_bytes));
    out.extend_from_slice(header.as_bytes());

    let row_samples = w * 3;
    for row in (0..h).rev() {
        if row % 16 == 0 {
            stop.check()?;
        }
        let start = row * row_samples;
        for &sample in &pixels[start..start + row_samples] {
            out.extend_from_slice(&sample.to_le_bytes());
        }
    }
    Ok(out)
}
