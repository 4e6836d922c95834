//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{TouchmapError, TouchmapResult};

/// Maximum gap between two touch samples that still belong to one gesture.
pub const DEFAULT_GESTURE_GAP_SECS: f64 = 0.5;

/// Gestures shorter than this are classified as ghost touches.
pub const DEFAULT_GHOST_DURATION_SECS: f64 = 0.05;

/// Pixel 7 Pro panel resolution.
pub const DEFAULT_SCREEN_WIDTH: u32 = 1440;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 3120;

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gesture segmentation and classification thresholds.
    pub analysis: AnalysisConfig,

    /// Device screen geometry.
    pub screen: ScreenConfig,

    /// Image output settings.
    pub render: RenderConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Thresholds for the gesture pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest time gap (seconds) between consecutive points of one gesture.
    pub gesture_gap_secs: f64,

    /// Gestures lasting less than this (seconds) are ghosts.
    pub ghost_duration_secs: f64,
}

/// Screen dimensions in raw device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

/// Raster output parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Where the image is written.
    pub output_path: PathBuf,

    /// Output pixels per screen pixel.
    pub scale: f64,

    /// Marker radius in output pixels.
    pub point_radius: u32,

    /// Marker opacity over the background, in [0.0, 1.0].
    pub point_alpha: f64,

    /// Connect consecutive points of human gestures.
    pub draw_paths: bool,

    /// `#RRGGBB` colours cycled by gesture index.
    pub palette: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "touchmap=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            gesture_gap_secs: DEFAULT_GESTURE_GAP_SECS,
            ghost_duration_secs: DEFAULT_GHOST_DURATION_SECS,
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("touch_map_colored.png"),
            scale: 0.5,
            point_radius: 4,
            point_alpha: 0.7,
            draw_paths: true,
            palette: [
                "#FF5733", "#33FF57", "#3357FF", "#FF33A1", "#A133FF", "#33FFA1", "#FFFF33",
                "#FF8C33", "#33FFF3", "#F333FF",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, or defaults when no file
    /// exists there. A file that exists but is invalid is an error.
    pub fn load() -> TouchmapResult<Self> {
        let config_path = config_file_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> TouchmapResult<Self> {
        if !path.exists() {
            return Err(TouchmapError::config(format!(
                "config file {} does not exist",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pipeline cannot work with.
    pub fn validate(&self) -> TouchmapResult<()> {
        let analysis = &self.analysis;
        if !analysis.gesture_gap_secs.is_finite() || analysis.gesture_gap_secs < 0.0 {
            return Err(TouchmapError::config(format!(
                "gesture_gap_secs must be a non-negative number, got {}",
                analysis.gesture_gap_secs
            )));
        }
        if !analysis.ghost_duration_secs.is_finite() || analysis.ghost_duration_secs < 0.0 {
            return Err(TouchmapError::config(format!(
                "ghost_duration_secs must be a non-negative number, got {}",
                analysis.ghost_duration_secs
            )));
        }
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(TouchmapError::config(format!(
                "screen dimensions must be non-zero, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }

        let render = &self.render;
        if !render.scale.is_finite() || render.scale <= 0.0 {
            return Err(TouchmapError::config(format!(
                "render scale must be positive, got {}",
                render.scale
            )));
        }
        if !(0.0..=1.0).contains(&render.point_alpha) {
            return Err(TouchmapError::config(format!(
                "point_alpha must be within [0, 1], got {}",
                render.point_alpha
            )));
        }
        if render.palette.is_empty() {
            return Err(TouchmapError::config("palette must contain at least one colour"));
        }
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("touchmap").join("config.json")
}
