//! Recognition of the event lines the parser cares about.

use touchmap_common::error::{TouchmapError, TouchmapResult};

pub const POSITION_X_MARKER: &str = "ABS_MT_POSITION_X";
pub const POSITION_Y_MARKER: &str = "ABS_MT_POSITION_Y";
pub const SYN_REPORT_MARKER: &str = "SYN_REPORT";

/// Multi-touch axis carried by a coordinate line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// What a single log line contributes to the current sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineMatch<'a> {
    /// Axis update with its raw hex token.
    pub axis: Option<(Axis, &'a str)>,
    /// Whether the line is a commit marker.
    pub sync: bool,
}

impl LineMatch<'_> {
    pub fn is_ignored(&self) -> bool {
        self.axis.is_none() && !self.sync
    }
}

/// Classify `line`. The axis check and the sync check are independent, so a
/// line carrying both is reported as both.
pub fn match_line(line: &str) -> LineMatch<'_> {
    let axis = if line.contains(POSITION_X_MARKER) {
        Some(Axis::X)
    } else if line.contains(POSITION_Y_MARKER) {
        Some(Axis::Y)
    } else {
        None
    };

    LineMatch {
        axis: axis.map(|a| (a, line.split_whitespace().last().unwrap_or_default())),
        sync: line.contains(SYN_REPORT_MARKER),
    }
}

/// Decode a base-16 coordinate token such as `000002a3` or `0x2a3`.
pub fn parse_hex_value(line_no: usize, token: &str) -> TouchmapResult<i64> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TouchmapError::malformed_coordinate(line_no, token));
    }

    i64::from_str_radix(digits, 16).map_err(|_| TouchmapError::malformed_coordinate(line_no, token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_position_lines() {
        let m = match_line("[  1.000000] /dev/input/event2: EV_ABS ABS_MT_POSITION_X 000002a3");
        assert_eq!(m.axis, Some((Axis::X, "000002a3")));
        assert!(!m.sync);

        let m = match_line("/dev/input/event2: 0003 ABS_MT_POSITION_Y    00000b1c   ");
        assert_eq!(m.axis, Some((Axis::Y, "00000b1c")));
    }

    #[test]
    fn recognizes_sync_lines() {
        let m = match_line("[  1.000000] /dev/input/event2: EV_SYN SYN_REPORT 00000000");
        assert!(m.sync);
        assert!(m.axis.is_none());
    }

    #[test]
    fn other_lines_are_ignored() {
        assert!(match_line("[  1.0] /dev/input/event2: EV_ABS ABS_MT_TRACKING_ID 0000a1b2").is_ignored());
        assert!(match_line("add device 1: /dev/input/event2").is_ignored());
        assert!(match_line("").is_ignored());
    }

    #[test]
    fn hex_values_decode() {
        assert_eq!(parse_hex_value(1, "000002a3").unwrap(), 0x2a3);
        assert_eq!(parse_hex_value(1, "0x1F").unwrap(), 31);
        assert_eq!(parse_hex_value(1, "ffffffff").unwrap(), 0xffff_ffff);
    }

    #[test]
    fn bad_hex_is_fatal_with_line_number() {
        let err = parse_hex_value(7, "12g4").unwrap_err();
        assert!(matches!(
            err,
            TouchmapError::MalformedCoordinate { line: 7, ref token } if token == "12g4"
        ));
        assert!(parse_hex_value(1, "0x").is_err());
        assert!(parse_hex_value(1, "-1").is_err());
    }
}
