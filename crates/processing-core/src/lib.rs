//! Touchmap Processing Core
//!
//! Turns a parsed touch point stream into labelled gestures:
//! - **Segmentation:** split the stream wherever the time gap exceeds a threshold
//! - **Classification:** flag gestures shorter than a duration threshold as ghosts
//! - **Summary:** reduce the labelled gestures to point and group counts
//!
//! This crate is pure computation: no I/O and no knowledge of how the
//! result is drawn.

pub mod classify;
pub mod segment;
pub mod summary;

use touchmap_common::config::AnalysisConfig;
use touchmap_touch_model::gesture::ClassifiedGesture;
use touchmap_touch_model::point::TouchPoint;

pub use classify::GhostClassifier;
pub use segment::GestureSegmenter;
pub use summary::TouchSummary;

/// Labelled gestures plus their summary.
#[derive(Debug, Clone, Default)]
pub struct TouchAnalysis {
    pub gestures: Vec<ClassifiedGesture>,
    pub summary: TouchSummary,
}

/// Segmenter and classifier wired together.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchAnalyzer {
    segmenter: GestureSegmenter,
    classifier: GhostClassifier,
}

impl TouchAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            segmenter: GestureSegmenter::new(config.gesture_gap_secs),
            classifier: GhostClassifier::new(config.ghost_duration_secs),
        }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Segment, classify, and summarize `points`.
    pub fn analyze<I>(&self, points: I) -> TouchAnalysis
    where
        I: IntoIterator<Item = TouchPoint>,
    {
        let gestures = self.segmenter.segment(points);
        let gestures = self.classifier.classify_all(gestures);
        let summary = TouchSummary::from_gestures(&gestures);

        tracing::info!(
            points = summary.total_points,
            gestures = summary.gesture_count,
            ghost_gestures = summary.ghost_gestures,
            "Gesture analysis complete"
        );

        TouchAnalysis { gestures, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzer_uses_configured_thresholds() {
        let config = AnalysisConfig {
            gesture_gap_secs: 0.2,
            ghost_duration_secs: 0.1,
        };
        let analyzer = TouchAnalyzer::new(&config);

        let points = vec![
            TouchPoint::new(0, 0, 0.0),
            TouchPoint::new(0, 0, 0.15),
            TouchPoint::new(0, 0, 0.5),
        ];
        let analysis = analyzer.analyze(points);
        assert_eq!(analysis.summary.gesture_count, 2);
        assert!(!analysis.gestures[0].is_ghost());
        assert!(analysis.gestures[1].is_ghost());
    }

    #[test]
    fn empty_stream_is_not_an_error() {
        let analysis = TouchAnalyzer::with_defaults().analyze(Vec::new());
        assert!(analysis.gestures.is_empty());
        assert!(analysis.summary.is_empty());
    }
}
