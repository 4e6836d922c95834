//! Touchmap Touch Model
//!
//! Data contracts shared by the parser, the gesture pipeline, and the
//! renderer:
//! - **TouchPoint:** one committed `(x, y, t)` sample in raw device pixels
//! - **Gesture:** a non-empty, time-ordered run of points
//! - **Classification:** the ghost/human label attached after segmentation

pub mod gesture;
pub mod point;

pub use gesture::*;
pub use point::*;
