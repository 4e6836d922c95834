//! Touchmap getevent Parser
//!
//! Turns an Android `getevent -lt` text dump into an ordered stream of
//! [`TouchPoint`]s. Only three kinds of lines matter:
//!
//! ```text
//! [   24917.093128] /dev/input/event2: EV_ABS  ABS_MT_POSITION_X  000002a3
//! [   24917.093128] /dev/input/event2: EV_ABS  ABS_MT_POSITION_Y  00000b1c
//! [   24917.093128] /dev/input/event2: EV_SYN  SYN_REPORT         00000000
//! ```
//!
//! Axis values are buffered until the `SYN_REPORT` that commits them;
//! everything else in the log is skipped.

pub mod line;
pub mod parser;
pub mod timestamp;

use std::path::Path;

use touchmap_common::error::{TouchmapError, TouchmapResult};
use touchmap_touch_model::point::TouchPoint;

pub use parser::{EventLineParser, ParseStats};

/// Points extracted from a whole log, with scan statistics.
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    pub points: Vec<TouchPoint>,
    pub stats: ParseStats,
}

impl ParsedLog {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Lazy adapter yielding committed points from a line iterator.
///
/// Stops after the first error.
pub struct TouchPoints<I> {
    lines: I,
    parser: EventLineParser,
    failed: bool,
}

impl<I> TouchPoints<I> {
    /// Consume the adapter and return the scan statistics so far.
    pub fn finish(self) -> ParseStats {
        self.parser.finish()
    }
}

impl<'a, I> Iterator for TouchPoints<I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = TouchmapResult<TouchPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for line in self.lines.by_ref() {
            match self.parser.feed_line(line) {
                Ok(Some(point)) => return Some(Ok(point)),
                Ok(None) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

/// Wrap a line iterator into a lazy point stream.
pub fn touch_points<'a, I>(lines: I) -> TouchPoints<I::IntoIter>
where
    I: IntoIterator<Item = &'a str>,
{
    TouchPoints {
        lines: lines.into_iter(),
        parser: EventLineParser::new(),
        failed: false,
    }
}

/// Parse every line, collecting points and statistics.
pub fn parse_lines<'a, I>(lines: I) -> TouchmapResult<ParsedLog>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stream = touch_points(lines);
    let points = stream.by_ref().collect::<TouchmapResult<Vec<_>>>()?;
    let stats = stream.finish();

    tracing::debug!(
        lines = stats.lines_scanned,
        points = stats.points,
        incomplete = stats.incomplete_samples,
        dropped = stats.trailing_updates_dropped,
        "Parsed getevent log"
    );

    Ok(ParsedLog { points, stats })
}

/// Parse log content already held in memory.
pub fn parse_log(content: &str) -> TouchmapResult<ParsedLog> {
    parse_lines(content.lines())
}

/// Read the whole file and parse it.
pub fn parse_file(path: &Path) -> TouchmapResult<ParsedLog> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TouchmapError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => TouchmapError::Io(e),
    })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "Loaded touch log");
    parse_log(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TWO_TAPS: &str = "\
add device 1: /dev/input/event2
  name:     \"fts\"
[   10.000000] /dev/input/event2: EV_ABS       ABS_MT_TRACKING_ID   00000001
[   10.000000] /dev/input/event2: EV_ABS       ABS_MT_POSITION_X    00000100
[   10.000000] /dev/input/event2: EV_ABS       ABS_MT_POSITION_Y    00000200
[   10.000000] /dev/input/event2: EV_SYN       SYN_REPORT           00000000
[   10.016000] /dev/input/event2: EV_ABS       ABS_MT_POSITION_X    00000101
[   10.016000] /dev/input/event2: EV_ABS       ABS_MT_POSITION_Y    00000201
[   10.016000] /dev/input/event2: EV_SYN       SYN_REPORT           00000000
[   10.020000] /dev/input/event2: EV_ABS       ABS_MT_TRACKING_ID   ffffffff
[   10.020000] /dev/input/event2: EV_SYN       SYN_REPORT           00000000
";

    #[test]
    fn parses_sample_log() {
        let parsed = parse_log(TWO_TAPS).unwrap();
        assert_eq!(
            parsed.points,
            vec![
                TouchPoint::new(0x100, 0x200, 10.0),
                TouchPoint::new(0x101, 0x201, 10.016),
            ]
        );
        assert_eq!(parsed.stats.sync_markers, 3);
        assert_eq!(parsed.stats.lines_scanned, 9);
        assert_eq!(parsed.stats.incomplete_samples, 0);
    }

    #[test]
    fn unterminated_sample_is_dropped() {
        let log = format!("{TWO_TAPS}[   11.0] EV_ABS ABS_MT_POSITION_X 00000300\n[   11.0] EV_ABS ABS_MT_POSITION_Y 00000400\n");
        let parsed = parse_log(&log).unwrap();
        assert_eq!(parsed.points.len(), 2);
        assert!(parsed.points.iter().all(|p| p.x != 0x300));
        assert_eq!(parsed.stats.trailing_updates_dropped, 2);
    }

    #[test]
    fn unrecognized_input_yields_nothing() {
        let parsed = parse_log("hello\nworld\n\n").unwrap();
        assert!(parsed.is_empty());
        assert_eq!(parsed.stats.lines_scanned, 3);
    }

    #[test]
    fn lazy_stream_stops_after_error() {
        let lines = [
            "ABS_MT_POSITION_X zz",
            "[ 1.0] ABS_MT_POSITION_X 00000001",
            "[ 1.0] ABS_MT_POSITION_Y 00000001",
            "[ 1.0] SYN_REPORT",
        ];
        let mut stream = touch_points(lines);
        assert!(matches!(
            stream.next(),
            Some(Err(TouchmapError::MalformedCoordinate { line: 1, .. }))
        ));
        assert!(stream.next().is_none());
    }

    #[test]
    fn missing_file_maps_to_file_not_found() {
        let path = std::env::temp_dir().join("touchmap-no-such-log.txt");
        let err = parse_file(&path).unwrap_err();
        assert!(matches!(err, TouchmapError::FileNotFound { .. }));
    }

    #[test]
    fn parse_file_reads_from_disk() {
        let path = std::env::temp_dir().join(format!("touchmap-parse-{}.txt", std::process::id()));
        std::fs::write(&path, TWO_TAPS).unwrap();
        let parsed = parse_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(parsed.points.len(), 2);
    }

    fn render_sample(x: i64, y: i64, t: f64) -> String {
        format!(
            "[{t:>12.6}] /dev/input/event2: EV_ABS ABS_MT_POSITION_X {x:08x}\n\
             [{t:>12.6}] /dev/input/event2: EV_ABS ABS_MT_POSITION_Y {y:08x}\n\
             [{t:>12.6}] /dev/input/event2: EV_SYN SYN_REPORT 00000000\n"
        )
    }

    proptest! {
        #[test]
        fn every_complete_sample_is_emitted_in_order(
            samples in prop::collection::vec((0i64..4096, 0i64..4096, 0u32..1_000_000), 0..40)
        ) {
            let mut t = 0.0;
            let mut expected = Vec::new();
            let mut log = String::new();
            for (x, y, step_us) in samples {
                t += step_us as f64 / 1_000_000.0;
                let rendered = render_sample(x, y, t);
                let ts = format!("{t:.6}").parse::<f64>().unwrap();
                expected.push(TouchPoint::new(x, y, ts));
                log.push_str(&rendered);
            }

            let parsed = parse_log(&log).unwrap();
            prop_assert_eq!(parsed.points, expected);
        }
    }
}
