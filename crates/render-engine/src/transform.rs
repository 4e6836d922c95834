//! Device coordinates to plot space to raster pixels.
//!
//! Plot space has its origin bottom-left like a chart: `y_plot = height - y`.
//! Raster space has its origin top-left and is scaled by `scale`.

use touchmap_common::config::ScreenConfig;
use touchmap_touch_model::point::TouchPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotTransform {
    screen_width: f64,
    screen_height: f64,
    scale: f64,
}

impl PlotTransform {
    pub fn new(screen: &ScreenConfig, scale: f64) -> Self {
        Self {
            screen_width: screen.width as f64,
            screen_height: screen.height as f64,
            scale,
        }
    }

    /// Output image size, never smaller than 1x1.
    pub fn canvas_size(&self) -> (u32, u32) {
        let w = (self.screen_width * self.scale).round().max(1.0) as u32;
        let h = (self.screen_height * self.scale).round().max(1.0) as u32;
        (w, h)
    }

    /// Raw device point to plot coordinates with the Y axis flipped.
    pub fn to_plot(&self, point: &TouchPoint) -> (f64, f64) {
        (point.x as f64, self.screen_height - point.y as f64)
    }

    /// Plot coordinates to raster pixel coordinates.
    pub fn plot_to_pixel(&self, (px, py): (f64, f64)) -> (f32, f32) {
        (
            (px * self.scale) as f32,
            ((self.screen_height - py) * self.scale) as f32,
        )
    }

    pub fn to_pixel(&self, point: &TouchPoint) -> (f32, f32) {
        self.plot_to_pixel(self.to_plot(point))
    }

    /// Integer marker centre, or `None` when a marker of `radius` around
    /// `pixel` cannot touch the canvas.
    pub fn marker_center(&self, (x, y): (f32, f32), radius: i32) -> Option<(i32, i32)> {
        let (w, h) = self.canvas_size();
        let r = radius as f32;
        if x < -r || y < -r || x > w as f32 + r || y > h as f32 + r {
            return None;
        }
        Some((x.round() as i32, y.round() as i32))
    }

    /// Clip the segment `a`-`b` to the canvas (Liang-Barsky). `None` when
    /// no part of it is visible.
    pub fn clip_segment(
        &self,
        a: (f32, f32),
        b: (f32, f32),
    ) -> Option<((f32, f32), (f32, f32))> {
        let (w, h) = self.canvas_size();
        let (x_max, y_max) = (w as f64 - 1.0, h as f64 - 1.0);
        let (x0, y0) = (a.0 as f64, a.1 as f64);
        let dx = b.0 as f64 - x0;
        let dy = b.1 as f64 - y0;

        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;
        for (p, q) in [(-dx, x0), (dx, x_max - x0), (-dy, y0), (dy, y_max - y0)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t_enter = t_enter.max(r);
            } else {
                t_exit = t_exit.min(r);
            }
            if t_enter > t_exit {
                return None;
            }
        }

        let at = |t: f64| ((x0 + t * dx) as f32, (y0 + t * dy) as f32);
        Some((at(t_enter), at(t_exit)))
    }

    /// Whether the point lies on the configured screen.
    pub fn in_bounds(&self, point: &TouchPoint) -> bool {
        let x = point.x as f64;
        let y = point.y as f64;
        (0.0..=self.screen_width).contains(&x) && (0.0..=self.screen_height).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel7() -> PlotTransform {
        PlotTransform::new(
            &ScreenConfig {
                width: 1440,
                height: 3120,
            },
            0.5,
        )
    }

    #[test]
    fn canvas_is_scaled_portrait() {
        assert_eq!(pixel7().canvas_size(), (720, 1560));
    }

    #[test]
    fn plot_space_flips_y() {
        let t = pixel7();
        assert_eq!(t.to_plot(&TouchPoint::new(100, 0, 0.0)), (100.0, 3120.0));
        assert_eq!(t.to_plot(&TouchPoint::new(100, 3120, 0.0)), (100.0, 0.0));
    }

    #[test]
    fn top_of_screen_is_top_row() {
        let t = pixel7();
        assert_eq!(t.to_pixel(&TouchPoint::new(0, 0, 0.0)), (0.0, 0.0));
        assert_eq!(t.to_pixel(&TouchPoint::new(1440, 3120, 0.0)), (720.0, 1560.0));
        assert_eq!(t.to_pixel(&TouchPoint::new(720, 1560, 0.0)), (360.0, 780.0));
    }

    #[test]
    fn far_markers_are_skipped() {
        let t = pixel7();
        assert_eq!(t.marker_center((360.4, 780.6), 4), Some((360, 781)));
        assert_eq!(t.marker_center((-3.0, 10.0), 4), Some((-3, 10)));
        assert_eq!(t.marker_center((-5.0, 10.0), 4), None);
        assert_eq!(t.marker_center((2.1e9, 2.1e9), 4), None);
    }

    #[test]
    fn segments_are_clipped_to_canvas() {
        let t = pixel7();
        let inside = ((10.0, 10.0), (20.0, 30.0));
        assert_eq!(t.clip_segment(inside.0, inside.1), Some(inside));

        let ((x0, y0), (x1, y1)) = t.clip_segment((100.0, 100.0), (2.1e9, 100.0)).unwrap();
        assert_eq!((x0, y0), (100.0, 100.0));
        assert_eq!((x1, y1), (719.0, 100.0));

        assert_eq!(t.clip_segment((-10.0, -10.0), (-5.0, 2.1e9)), None);
        assert_eq!(t.clip_segment((2.0e9, 2.0e9), (2.1e9, 2.1e9)), None);
    }

    #[test]
    fn bounds_check() {
        let t = pixel7();
        assert!(t.in_bounds(&TouchPoint::new(1440, 3120, 0.0)));
        assert!(!t.in_bounds(&TouchPoint::new(1441, 10, 0.0)));
        assert!(!t.in_bounds(&TouchPoint::new(10, -1, 0.0)));
    }
}
