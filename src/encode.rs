use alloc::string::String;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::HdrError;
use crate::info::ImageFormat;
use crate::radiance::RadianceHeader;
use crate::{pfm, radiance};

/// Encode request builder.
///
/// Input is always linear RGB f32 triples, row-major, top to bottom,
/// `width * height` of them.
#[derive(Clone, Debug)]
pub struct EncodeRequest {
    format: ImageFormat,
    gamma: Option<f32>,
    exposure: Option<f32>,
    primaries: Option<String>,
    run_length_encoded: bool,
}

impl EncodeRequest {
    /// Radiance HDR with default metadata: no GAMMA/EXPOSURE lines,
    /// Rec.2020 primaries, RLE scanlines.
    pub fn radiance() -> Self {
        Self {
            format: ImageFormat::Radiance,
            gamma: None,
            exposure: None,
            primaries: Some(String::from(RadianceHeader::REC2020_PRIMARIES)),
            run_length_encoded: true,
        }
    }

    /// Radiance HDR carrying metadata from a previously parsed header,
    /// for re-encoding a decoded image. Dimensions still come from the
    /// `encode` call.
    pub fn radiance_from(header: &RadianceHeader) -> Self {
        Self {
            format: ImageFormat::Radiance,
            gamma: header.gamma,
            exposure: header.exposure,
            primaries: header.primaries.clone(),
            run_length_encoded: header.run_length_encoded,
        }
    }

    /// PFM (lossless raw floats). The metadata builders have no effect on
    /// this format.
    pub fn pfm() -> Self {
        Self {
            format: ImageFormat::Pfm,
            gamma: None,
            exposure: None,
            primaries: None,
            run_length_encoded: true,
        }
    }

    /// Emit a `GAMMA=` header line (Radiance).
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Emit an `EXPOSURE=` header line (Radiance).
    pub fn with_exposure(mut self, exposure: f32) -> Self {
        self.exposure = Some(exposure);
        self
    }

    /// Replace the `PRIMARIES=` descriptor; `None` omits the line (Radiance).
    pub fn with_primaries(mut self, primaries: Option<String>) -> Self {
        self.primaries = primaries;
        self
    }

    /// Radiance raw scanlines are not implemented; passing `false` makes
    /// `encode` fail with [`HdrError::UnsupportedVariant`] instead of
    /// silently writing RLE.
    pub fn with_run_length_encoding(mut self, rle: bool) -> Self {
        self.run_length_encoded = rle;
        self
    }

    pub fn encode(
        &self,
        pixels: &[f32],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, HdrError> {
        match self.format {
            ImageFormat::Radiance => {
                let header = RadianceHeader {
                    width,
                    height,
                    gamma: self.gamma,
                    exposure: self.exposure,
                    primaries: self.primaries.clone(),
                    run_length_encoded: self.run_length_encoded,
                };
                radiance::encode(pixels, &header, &stop)
            }
            ImageFormat::Pfm => pfm::encode(pixels, width, height, &stop),
        }
    }
}
