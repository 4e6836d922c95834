//! Duration-based ghost touch classification.

use touchmap_common::config::DEFAULT_GHOST_DURATION_SECS;
use touchmap_touch_model::gesture::{Classification, ClassifiedGesture, Gesture};

/// Labels gestures shorter than a fixed duration as ghosts.
#[derive(Debug, Clone, Copy)]
pub struct GhostClassifier {
    ghost_duration_secs: f64,
}

impl Default for GhostClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_GHOST_DURATION_SECS)
    }
}

impl GhostClassifier {
    pub fn new(ghost_duration_secs: f64) -> Self {
        Self {
            ghost_duration_secs,
        }
    }

    /// Label a single gesture from its own first and last timestamps.
    pub fn classify(&self, gesture: &Gesture) -> Classification {
        if gesture.duration_secs() < self.ghost_duration_secs {
            Classification::Ghost
        } else {
            Classification::Human
        }
    }

    /// Label every gesture, attaching its position in the sequence.
    pub fn classify_all(&self, gestures: Vec<Gesture>) -> Vec<ClassifiedGesture> {
        gestures
            .into_iter()
            .enumerate()
            .map(|(index, gesture)| {
                let classification = self.classify(&gesture);
                tracing::debug!(
                    index,
                    points = gesture.len(),
                    duration_secs = gesture.duration_secs(),
                    %classification,
                    "Classified gesture"
                );
                ClassifiedGesture {
                    index,
                    gesture,
                    classification,
                }
            })
            .collect()
    }
}
