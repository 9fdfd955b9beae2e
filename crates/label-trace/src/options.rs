use crate::flatten::DEFAULT_CURVE_SEGMENTS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Luminance below which a pixel counts as foreground
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Settings for one trace request
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct TraceOptions {
    pub threshold: u8,
    /// Line segments per cubic curve
    pub curve_segments: usize,
    /// Convert raster rows (y down) into sheet space (y up)
    pub flip_y: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            curve_segments: DEFAULT_CURVE_SEGMENTS,
            flip_y: true,
        }
    }
}
