//! Touchmap Render Engine
//!
//! Draws classified gestures as a portrait touch map:
//!
//! ```text
//! raw (x, y) ── flip ──> plot (x, H - y) ── scale ──> raster pixel
//!                                                          │
//!  gesture index ── palette[i % len] ── alpha blend ──> colour
//!  classification ── human: filled + path / ghost: hollow ──> marker
//!                                                          ▼
//!                                                  touch_map_colored.png
//! ```
//!
//! Colour cycling lives here only; the processing crates never see the
//! palette.

pub mod palette;
pub mod plot;
pub mod transform;

pub use palette::Palette;
pub use plot::TouchMapRenderer;
pub use transform::PlotTransform;
