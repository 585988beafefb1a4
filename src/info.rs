use crate::error::HdrError;
use crate::{pfm, radiance};

/// Image format detected from magic bytes.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Radiance HDR (`#?RADIANCE` / `#?RGBE`), RLE-compressed RGBE scanlines.
    Radiance,
    /// Portable Float Map (`PF`), raw little-endian floats.
    Pfm,
}

/// Image metadata probed from the header without decoding pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl ImageInfo {
    /// Probe format and dimensions from the start of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, HdrError> {
        let format = sniff(data)?;
        let (width, height) = match format {
            ImageFormat::Radiance => {
                let (header, _) = radiance::decode::parse_header(data)?;
                (header.width, header.height)
            }
            ImageFormat::Pfm => {
                let (header, _) = pfm::decode::parse_header(data)?;
                (header.width, header.height)
            }
        };
        Ok(ImageInfo {
            width,
            height,
            format,
        })
    }
}

/// Decide which decoder handles `data` from its magic bytes. Grayscale PFM
/// sniffs as [`ImageFormat::Pfm`] and is rejected by the header parse.
pub(crate) fn sniff(data: &[u8]) -> Result<ImageFormat, HdrError> {
    if data.starts_with(b"#?") {
        Ok(ImageFormat::Radiance)
    } else if data.starts_with(b"PF") || data.starts_with(b"Pf") {
        Ok(ImageFormat::Pfm)
    } else {
        Err(HdrError::UnrecognizedFormat)
    }
}
