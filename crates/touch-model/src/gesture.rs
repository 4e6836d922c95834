//! Gesture groups and their ghost/human classification.

use serde::{Deserialize, Serialize};

use crate::point::TouchPoint;

/// Label attached to a gesture once segmentation has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Deliberate contact.
    Human,
    /// Spurious, driver or hardware induced burst.
    Ghost,
}

impl Classification {
    pub fn is_ghost(self) -> bool {
        matches!(self, Self::Ghost)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Ghost => "ghost",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A temporally contiguous, non-empty run of touch points in log order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gesture {
    points: Vec<TouchPoint>,
}

impl Gesture {
    /// Open a gesture with its first point.
    pub fn start(first: TouchPoint) -> Self {
        Self {
            points: vec![first],
        }
    }

    /// Build a gesture from existing points. Returns `None` for an empty list.
    pub fn from_points(points: Vec<TouchPoint>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self { points })
        }
    }

    /// Append the next point in arrival order.
    pub fn push(&mut self, point: TouchPoint) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[TouchPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<TouchPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the gesture holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &TouchPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &TouchPoint {
        &self.points[self.points.len() - 1]
    }

    /// Seconds between the first and last point; zero for a single tap.
    pub fn duration_secs(&self) -> f64 {
        self.last().secs_since(self.first())
    }
}

/// A gesture with its label and its zero-based position in the log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedGesture {
    pub index: usize,
    pub gesture: Gesture,
    pub classification: Classification,
}

impl ClassifiedGesture {
    pub fn is_ghost(&self) -> bool {
        self.classification.is_ghost()
    }

    pub fn points(&self) -> &[TouchPoint] {
        self.gesture.points()
    }
}
