//! # zenhdr
//!
//! Radiance HDR (RGBE) and Portable Float Map (PFM) codec for linear-light
//! floating-point RGB images.
//!
//! ## Supported Formats
//!
//! - **Radiance HDR** (`.hdr`, `.pic`) — ASCII header, then run-length
//!   encoded scanlines of shared-exponent RGBE pixels. Quantizes each
//!   channel to an 8-bit mantissa under a shared exponent; a non-zero color
//!   round-trips within 2⁻⁸ relative error per channel, and exact black is
//!   preserved exactly.
//! - **PFM** (`.pfm`) — three-token ASCII header, then raw little-endian
//!   f32 triples with rows stored bottom to top. Lossless.
//!
//! ## Non-Goals
//!
//! - Grayscale (`Pf`) and big-endian PFM
//! - Radiance raw (non-RLE) scanlines, required for widths outside
//!   [8, 32767] — rejected explicitly, never silently degraded
//! - Color management: GAMMA/EXPOSURE/PRIMARIES metadata is carried
//!   verbatim, never applied to pixel values
//!
//! ## Usage
//!
//! ```no_run
//! use zenhdr::{DecodeRequest, EncodeRequest, ImageInfo};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your .hdr or .pfm bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data).unwrap();
//! println!("{}x{} {:?}", info.width, info.height, info.format);
//!
//! // Decode to f32 RGB triples, top-to-bottom rows
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//!
//! // Re-encode losslessly as PFM
//! let pfm = EncodeRequest::pfm()
//!     .encode(decoded.pixels(), decoded.width, decoded.height, Unstoppable)?;
//! # Ok::<(), zenhdr::HdrError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod info;
mod limits;
mod rgbe;

mod pfm;
mod radiance;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::HdrError;
pub use info::{ImageFormat, ImageInfo};
pub use limits::Limits;
pub use pfm::PfmHeader;
pub use radiance::RadianceHeader;
pub use rgbe::Rgbe;

use alloc::vec::Vec;

/// Decode any supported format, dispatching on magic bytes.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, HdrError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode Radiance HDR data.
pub fn decode_radiance(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, HdrError> {
    radiance::decode(data, None, &stop)
}

/// Decode PFM data.
pub fn decode_pfm(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, HdrError> {
    pfm::decode(data, None, &stop)
}

/// Encode as Radiance HDR with default metadata.
pub fn encode_radiance(
    pixels: &[f32],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<Vec<u8>, HdrError> {
    EncodeRequest::radiance().encode(pixels, width, height, stop)
}

/// Encode as PFM.
pub fn encode_pfm(
    pixels: &[f32],
    width: u32,
    height: u32,
    stop: impl Stop,
) -> Result<Vec<u8>, HdrError> {
    EncodeRequest::pfm().encode(pixels, width, height, stop)
}
