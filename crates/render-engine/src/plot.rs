//! Touch map raster rendering.

use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_hollow_circle_mut, draw_hollow_rect_mut, draw_line_segment_mut,
};
use imageproc::rect::Rect;
use touchmap_common::config::{RenderConfig, ScreenConfig};
use touchmap_common::error::{TouchmapError, TouchmapResult};
use touchmap_touch_model::gesture::ClassifiedGesture;

use crate::palette::{blend, Palette};
use crate::transform::PlotTransform;

/// Dark chart background.
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Screen outline.
pub const FRAME: Rgb<u8> = Rgb([90, 90, 90]);

/// Draws classified gestures onto a portrait canvas sized like the screen.
///
/// Human gestures are filled markers joined by their path; ghost gestures
/// are hollow markers with a centre dot and no path.
#[derive(Debug, Clone)]
pub struct TouchMapRenderer {
    transform: PlotTransform,
    palette: Palette,
    point_radius: i32,
    point_alpha: f64,
    draw_paths: bool,
}

impl TouchMapRenderer {
    pub fn new(screen: &ScreenConfig, render: &RenderConfig) -> TouchmapResult<Self> {
        if !render.scale.is_finite() || render.scale <= 0.0 {
            return Err(TouchmapError::config(format!(
                "render scale must be positive, got {}",
                render.scale
            )));
        }
        Ok(Self {
            transform: PlotTransform::new(screen, render.scale),
            palette: Palette::from_hex(&render.palette)?,
            point_radius: render.point_radius.max(1) as i32,
            point_alpha: render.point_alpha,
            draw_paths: render.draw_paths,
        })
    }

    /// Colour used for the gesture at `index`, already blended over the background.
    pub fn gesture_color(&self, index: usize) -> Rgb<u8> {
        blend(self.palette.color_for(index), BACKGROUND, self.point_alpha)
    }

    pub fn render(&self, gestures: &[ClassifiedGesture]) -> RgbImage {
        let (width, height) = self.transform.canvas_size();
        let mut img: RgbImage = ImageBuffer::from_pixel(width, height, BACKGROUND);
        draw_hollow_rect_mut(&mut img, Rect::at(0, 0).of_size(width, height), FRAME);

        let mut off_screen = 0usize;
        for classified in gestures {
            let color = self.gesture_color(classified.index);
            let pixels: Vec<(f32, f32)> = classified
                .points()
                .iter()
                .inspect(|p| {
                    if !self.transform.in_bounds(p) {
                        off_screen += 1;
                    }
                })
                .map(|p| self.transform.to_pixel(p))
                .collect();

            let centers = pixels
                .iter()
                .filter_map(|&px| self.transform.marker_center(px, self.point_radius));

            if classified.is_ghost() {
                for center in centers {
                    draw_hollow_circle_mut(&mut img, center, self.point_radius, color);
                    draw_filled_circle_mut(&mut img, center, 1, color);
                }
            } else {
                if self.draw_paths {
                    for pair in pixels.windows(2) {
                        if let Some((start, end)) = self.transform.clip_segment(pair[0], pair[1]) {
                            draw_line_segment_mut(&mut img, start, end, color);
                        }
                    }
                }
                for center in centers {
                    draw_filled_circle_mut(&mut img, center, self.point_radius, color);
                }
            }
        }

        if off_screen > 0 {
            tracing::warn!(off_screen, "Points outside the configured screen were clipped");
        }
        tracing::debug!(width, height, gestures = gestures.len(), "Rendered touch map");
        img
    }

    /// Write `img` as PNG.
    pub fn save(&self, img: &RgbImage, path: &Path) -> TouchmapResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        img.save_with_format(path, ImageFormat::Png).map_err(|e| {
            TouchmapError::render(format!("failed to write {}: {e}", path.display()))
        })?;
        tracing::info!(path = %path.display(), "Saved touch map");
        Ok(())
    }

    pub fn render_to_file(&self, gestures: &[ClassifiedGesture], path: &Path) -> TouchmapResult<()> {
        let img = self.render(gestures);
        self.save(&img, path)
    }
}
