use alloc::string::String;
use enough::StopReason;

/// Errors from Radiance HDR / PFM decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HdrError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} samples, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// Channel value the shared-exponent encoding cannot represent
    /// (negative, NaN, infinite, or magnitude requiring an exponent
    /// outside [1, 255]). Rejected before any byte truncation.
    #[error("pixel value {value} is not representable as RGBE")]
    UnencodablePixel { value: f32 },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for HdrError {
    fn from(r: StopReason) -> Self {
        HdrError::Cancelled(r)
    }
}
