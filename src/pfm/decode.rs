//! PFM decoder: token-scanned header, bottom-to-top float body.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

use super::PfmHeader;
use crate::error::HdrError;

fn is_pfm_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Pull the next whitespace-delimited token.
///
/// The token must be closed by exactly one whitespace byte, which is
/// consumed; a token running into end of input is a header error.
fn next_token<'a>(data: &'a [u8], pos: &mut usize) -> Result<&'a str, HdrError> {
    while *pos < data.len() && is_pfm_space(data[*pos]) {
        *pos += 1;
    }
    let start = *pos;
    while *pos < data.len() && !is_pfm_space(data[*pos]) {
        *pos += 1;
    }
    let token = &data[start..*pos];
    if token.is_empty() {
        return Err(HdrError::InvalidHeader("missing PFM header token".into()));
    }
    if *pos >= data.len() {
        return Err(HdrError::InvalidHeader(
            "PFM header token not closed by whitespace".into(),
        ));
    }
    *pos += 1;
    core::str::from_utf8(token)
        .map_err(|_| HdrError::InvalidHeader("non-ASCII PFM header token".into()))
}

fn parse_dim(text: &str) -> Result<u32, HdrError> {
    let bad = || HdrError::InvalidHeader(format!("bad PFM dimension {text:?}"));
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    let value: u32 = text.parse().map_err(|_| bad())?;
    if value == 0 {
        return Err(HdrError::InvalidHeader(format!(
            "zero PFM dimension {text:?}"
        )));
    }
    Ok(value)
}

/// Parse the three-token header, returning it with the offset of the first
/// pixel byte.
pub(crate) fn parse_header(data: &[u8]) -> Result<(PfmHeader, usize), HdrError> {
    let mut pos = 0;

    match next_token(data, &mut pos)? {
        "PF" => {}
        "Pf" => {
            return Err(HdrError::UnsupportedVariant("grayscale PFM".into()));
        }
        other => {
            return Err(HdrError::InvalidHeader(format!("bad PFM magic {other:?}")));
        }
    }

    let width = parse_dim(next_token(data, &mut pos)?)?;
    let height = parse_dim(next_token(data, &mut pos)?)?;

    let scale_text = next_token(data, &mut pos)?;
    let scale: f32 = scale_text
        .parse()
        .map_err(|_| HdrError::InvalidHeader(format!("bad PFM scale {scale_text:?}")))?;
    // negative asserts little-endian storage; NaN fails this check too
    if !(scale < 0.0) {
        return Err(HdrError::InvalidHeader(format!(
            "PFM scale {scale} is not negative (big-endian data is unsupported)"
        )));
    }

    Ok((
        PfmHeader {
            width,
            height,
            scale,
        },
        pos,
    ))
}

/// Read the raw float body. Rows run bottom to top in the file; the output
/// buffer is assembled top to bottom.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &PfmHeader,
    stop: &dyn Stop,
) -> Result<Vec<f32>, HdrError> {
    let width = header.width as usize;
    let height = header.height as usize;
    let row_samples = width * 3;
    let expected_bytes = row_samples
        .checked_mul(height)
        .and_then(|samples| samples.checked_mul(size_of::<f32>()))
        .ok_or(HdrError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    if data.len() < expected_bytes {
        return Err(HdrError::UnexpectedEof);
    }

    let mut out = vec![0f32; row_samples * height];
    for (file_row, bytes) in data[..expected_bytes]
        .chunks_exact(row_samples * size_of::<f32>())
        .enumerate()
    {
        if file_row % 16 == 0 {
            stop.check()?;
        }
        let dest_row = height - 1 - file_row;
        let dest = &mut out[dest_row * row_samples..(dest_row + 1) * row_samples];
        for (sample, le) in dest.iter_mut().zip(bytes.chunks_exact(4)) {
            *sample = f32::from_le_bytes([le[0], le[1], le[2], le[3]]);
        }
    }
    Ok(out)
}
