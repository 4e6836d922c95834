//! Single-pass state machine pairing axis updates with their commit marker.

use touchmap_common::error::{TouchmapError, TouchmapResult};
use touchmap_touch_model::point::TouchPoint;

use crate::line::{match_line, parse_hex_value, Axis};
use crate::timestamp::extract_timestamp;

/// Counters collected while scanning a log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines_scanned: usize,
    pub x_updates: usize,
    pub y_updates: usize,
    pub sync_markers: usize,
    /// Commit markers that arrived with at least one axis missing.
    pub incomplete_samples: usize,
    /// Axis updates still pending when the input ended.
    pub trailing_updates_dropped: usize,
    pub points: usize,
}

/// Parser state carried from one line to the next.
///
/// `pending_x`/`pending_y` hold the last value seen for each axis since the
/// previous `SYN_REPORT`; both are cleared by every commit marker whether or
/// not a point was emitted.
#[derive(Debug, Default)]
pub struct EventLineParser {
    pending_x: Option<i64>,
    pending_y: Option<i64>,
    line_no: usize,
    stats: ParseStats,
}

impl EventLineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line. Returns the committed point, if this line
    /// completed one.
    pub fn feed_line(&mut self, line: &str) -> TouchmapResult<Option<TouchPoint>> {
        self.line_no += 1;
        self.stats.lines_scanned += 1;

        let matched = match_line(line);

        if let Some((axis, token)) = matched.axis {
            let value = parse_hex_value(self.line_no, token)?;
            match axis {
                Axis::X => {
                    self.pending_x = Some(value);
                    self.stats.x_updates += 1;
                }
                Axis::Y => {
                    self.pending_y = Some(value);
                    self.stats.y_updates += 1;
                }
            }
        }

        if !matched.sync {
            return Ok(None);
        }

        self.stats.sync_markers += 1;
        let pending = (self.pending_x.take(), self.pending_y.take());

        match pending {
            (Some(x), Some(y)) => {
                let timestamp = extract_timestamp(line)
                    .ok_or_else(|| TouchmapError::malformed_timestamp(self.line_no, line.trim()))?;
                self.stats.points += 1;
                Ok(Some(TouchPoint::new(x, y, timestamp)))
            }
            (None, None) => Ok(None),
            _ => {
                self.stats.incomplete_samples += 1;
                tracing::trace!(line = self.line_no, "SYN_REPORT with a single axis pending");
                Ok(None)
            }
        }
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// End of input: any pending axis values are dropped.
    pub fn finish(mut self) -> ParseStats {
        let dropped = usize::from(self.pending_x.is_some()) + usize::from(self.pending_y.is_some());
        if dropped > 0 {
            tracing::debug!(dropped, "Discarding axis updates without a commit marker");
        }
        self.stats.trailing_updates_dropped = dropped;
        self.stats
    }
}
