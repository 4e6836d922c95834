//! Aggregate counts over classified gestures.

use serde::Serialize;
use touchmap_touch_model::gesture::ClassifiedGesture;

/// Point and gesture totals split by classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TouchSummary {
    pub total_points: usize,
    pub gesture_count: usize,
    pub ghost_gestures: usize,
    pub ghost_points: usize,
    pub human_points: usize,
}

impl TouchSummary {
    pub fn from_gestures(gestures: &[ClassifiedGesture]) -> Self {
        gestures
            .iter()
            .fold(Self::default(), |mut acc, classified| {
                let points = classified.gesture.len();
                acc.total_points += points;
                acc.gesture_count += 1;
                if classified.is_ghost() {
                    acc.ghost_gestures += 1;
                    acc.ghost_points += points;
                } else {
                    acc.human_points += points;
                }
                acc
            })
    }

    /// Share of points that belong to ghost gestures, in percent.
    pub fn ghost_percentage(&self) -> f64 {
        if self.total_points == 0 {
            return 0.0;
        }
        self.ghost_points as f64 / self.total_points as f64 * 100.0
    }

    pub fn is_empty(&self) -> bool {
        self.total_points == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchmap_touch_model::gesture::{Classification, Gesture};
    use touchmap_touch_model::point::TouchPoint;

    fn classified(index: usize, n: usize, classification: Classification) -> ClassifiedGesture {
        let points = (0..n).map(|i| TouchPoint::new(0, 0, i as f64)).collect();
        ClassifiedGesture {
            index,
            gesture: Gesture::from_points(points).unwrap(),
            classification,
        }
    }

    #[test]
    fn empty_summary() {
        let summary = TouchSummary::from_gestures(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.ghost_percentage(), 0.0);
    }

    #[test]
    fn counts_split_by_label() {
        let gestures = vec![
            classified(0, 3, Classification::Ghost),
            classified(1, 6, Classification::Human),
            classified(2, 1, Classification::Ghost),
        ];
        let summary = TouchSummary::from_gestures(&gestures);
        assert_eq!(summary.total_points, 10);
        assert_eq!(summary.gesture_count, 3);
        assert_eq!(summary.ghost_gestures, 2);
        assert_eq!(summary.ghost_points, 4);
        assert_eq!(summary.human_points, 6);
        assert!((summary.ghost_percentage() - 40.0).abs() < 1e-9);
    }
}
