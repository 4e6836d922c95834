//! Touch samples decoded from a kernel event log.
//!
//! Coordinates stay in raw device pixels exactly as the touch controller
//! reported them; no normalization or flipping happens here.

use serde::{Deserialize, Serialize};

/// Kernel timestamp in fractional seconds, as printed by `getevent -t`.
pub type TimestampSecs = f64;

/// A single committed touch sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// Raw `ABS_MT_POSITION_X` value.
    pub x: i64,
    /// Raw `ABS_MT_POSITION_Y` value.
    pub y: i64,
    /// Timestamp of the `SYN_REPORT` that committed this sample.
    #[serde(rename = "t")]
    pub timestamp_secs: TimestampSecs,
}

impl TouchPoint {
    pub fn new(x: i64, y: i64, timestamp_secs: TimestampSecs) -> Self {
        Self {
            x,
            y,
            timestamp_secs,
        }
    }

    /// Signed seconds from `earlier` to `self`. Negative when the log clock
    /// went backwards.
    pub fn secs_since(&self, earlier: &TouchPoint) -> f64 {
        self.timestamp_secs - earlier.timestamp_secs
    }
}
