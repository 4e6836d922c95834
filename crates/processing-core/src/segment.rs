//! Time-gap gesture segmentation.
//!
//! Consecutive points stay in one gesture while the gap between them is at
//! most `gap_secs`. A larger gap closes the open gesture and starts a new one.
//! A negative gap (the log clock stepped backwards) also starts a new gesture,
//! so the points inside any gesture are never out of time order.

use touchmap_common::config::DEFAULT_GESTURE_GAP_SECS;
use touchmap_touch_model::gesture::Gesture;
use touchmap_touch_model::point::TouchPoint;

/// Splits an ordered point stream into gestures.
#[derive(Debug, Clone, Copy)]
pub struct GestureSegmenter {
    gap_secs: f64,
}

impl Default for GestureSegmenter {
    fn default() -> Self {
        Self::new(DEFAULT_GESTURE_GAP_SECS)
    }
}

impl GestureSegmenter {
    pub fn new(gap_secs: f64) -> Self {
        Self { gap_secs }
    }

    /// Whether `next` must start a new gesture after `prev`.
    pub fn is_boundary(&self, prev: &TouchPoint, next: &TouchPoint) -> bool {
        let gap = next.secs_since(prev);
        gap > self.gap_secs || gap < 0.0
    }

    /// Group `points` into gestures. Every input point lands in exactly one
    /// gesture, in input order. No points means no gestures.
    pub fn segment<I>(&self, points: I) -> Vec<Gesture>
    where
        I: IntoIterator<Item = TouchPoint>,
    {
        let mut gestures = Vec::new();
        let mut open: Option<Gesture> = None;

        for point in points {
            open = Some(match open.take() {
                None => Gesture::start(point),
                Some(mut gesture) => {
                    let last = *gesture.last();
                    if self.is_boundary(&last, &point) {
                        if point.timestamp_secs < last.timestamp_secs {
                            tracing::warn!(
                                from = last.timestamp_secs,
                                to = point.timestamp_secs,
                                "Timestamp went backwards; starting a new gesture"
                            );
                        }
                        gestures.push(gesture);
                        Gesture::start(point)
                    } else {
                        gesture.push(point);
                        gesture
                    }
                }
            });
        }

        gestures.extend(open);
        gestures
    }
}
