use alloc::format;

use crate::error::HdrError;

/// Resource limits applied on the decode path before any allocation.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes allocated for the decoded float buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check header dimensions and the resulting output allocation.
    pub(crate) fn check(&self, width: u32, height: u32, out_bytes: usize) -> Result<(), HdrError> {
        let (w, h) = (u64::from(width), u64::from(height));
        if let Some(max) = self.max_width {
            if w > max {
                return Err(HdrError::LimitExceeded(format!(
                    "width {w} exceeds limit {max}"
                )));
            }
        }
        if let Some(max) = self.max_height {
            if h > max {
                return Err(HdrError::LimitExceeded(format!(
                    "height {h} exceeds limit {max}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            if w * h > max_px {
                return Err(HdrError::LimitExceeded(format!(
                    "pixel count {} exceeds limit {max_px}",
                    w * h
                )));
            }
        }
        if let Some(max_mem) = self.max_memory_bytes {
            if out_bytes as u64 > max_mem {
                return Err(HdrError::LimitExceeded(format!(
                    "allocation {out_bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
