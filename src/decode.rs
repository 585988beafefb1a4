use alloc::vec::Vec;
use enough::Stop;

use crate::error::HdrError;
use crate::info::{self, ImageFormat};
use crate::limits::Limits;
use crate::radiance::RadianceHeader;
use crate::{pfm, radiance};

/// Decoded image: linear RGB f32 triples, row-major, top to bottom.
#[derive(Clone, Debug)]
pub struct DecodeOutput {
    pixels: Vec<f32>,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    header: Option<RadianceHeader>,
}

impl DecodeOutput {
    /// Access the pixel data: `width * height * 3` floats.
    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<f32> {
        self.pixels
    }

    /// Header metadata when the input was a Radiance file.
    pub fn radiance_header(&self) -> Option<&RadianceHeader> {
        self.header.as_ref()
    }

    pub(crate) fn new(
        pixels: Vec<f32>,
        width: u32,
        height: u32,
        format: ImageFormat,
        header: Option<RadianceHeader>,
    ) -> Self {
        Self {
            pixels,
            width,
            height,
            format,
            header,
        }
    }

    /// Zero-copy view of the pixel data as typed RGB pixels.
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> &[rgb::RGB<f32>] {
        use rgb::AsPixels as _;
        self.pixels.as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed RGB pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGB<f32>> {
        imgref::ImgRef::new(self.as_rgb(), self.width as usize, self.height as usize)
    }
}

/// Decode request builder.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Apply resource limits before any allocation.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode, dispatching on magic bytes.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, HdrError> {
        match info::sniff(self.data)? {
            ImageFormat::Radiance => radiance::decode(self.data, self.limits, &stop),
            ImageFormat::Pfm => pfm::decode(self.data, self.limits, &stop),
        }
    }
}
