use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, DEFAULT_MOUSE_SENSITIVITY, DEFAULT_MOVEMENT_SPEED};
use crate::input::{SpeedLimits, MAX_SPEED_MULTIPLIER, MIN_SPEED_MULTIPLIER, SCROLL_SPEED_STEP};
use crate::projection::{ProjectionMode, ProjectionSettings};
use crate::traits::WindowDimensions;

pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 800;

/// Everything the viewport needs to start up
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub projection: ProjectionSettings,
    pub input: InputConfig,
    pub initial_projection: ProjectionMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Viewport".to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    pub fn dimensions(&self) -> WindowDimensions {
        WindowDimensions::new(self.width, self.height)
    }
}

/// Initial camera pose and tuning. World up is always +Y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Initial look direction; normalized on load
    pub front: Vec3,
    /// Field of view in degrees
    pub zoom: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.5, 5.5, 10.0),
            front: Vec3::new(0.0, -0.5, -2.0),
            zoom: 80.0,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }
}

impl CameraConfig {
    pub fn build(&self) -> Camera {
        Camera::looking_along(self.position, self.front)
            .with_zoom(self.zoom)
            .with_movement_speed(self.movement_speed)
            .with_mouse_sensitivity(self.mouse_sensitivity)
    }
}

/// Scroll-driven speed multiplier tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub scroll_step: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            scroll_step: SCROLL_SPEED_STEP,
            min_speed: MIN_SPEED_MULTIPLIER,
            max_speed: MAX_SPEED_MULTIPLIER,
        }
    }
}

impl InputConfig {
    pub fn speed_limits(&self) -> SpeedLimits {
        // A reversed range would make clamp panic
        let (min, max) = if self.min_speed <= self.max_speed {
            (self.min_speed, self.max_speed)
        } else {
            log::warn!(
                "min_speed {} exceeds max_speed {}, swapping",
                self.min_speed,
                self.max_speed
            );
            (self.max_speed, self.min_speed)
        };
        SpeedLimits {
            scroll_step: self.scroll_step,
            min,
            max,
        }
    }
}

impl ViewConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid viewport config")
    }

    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize viewport config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_viewport_constants() {
        let config = ViewConfig::default();
        assert_eq!(config.window.dimensions(), WindowDimensions::new(1000, 800));
        assert_eq!(config.camera.zoom, 80.0);
        assert_eq!(config.projection, ProjectionSettings::default());
        assert_eq!(config.initial_projection, ProjectionMode::Perspective);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = ViewConfig::from_json(
            r#"{ "window": { "title": "Scene" }, "camera": { "zoom": 60.0 }, "initial_projection": "orthographic" }"#,
        )
        .unwrap();

        assert_eq!(config.window.title, "Scene");
        assert_eq!(config.window.width, WINDOW_WIDTH);
        assert_eq!(config.camera.zoom, 60.0);
        assert_eq!(config.camera.position, Vec3::new(0.5, 5.5, 10.0));
        assert_eq!(config.initial_projection, ProjectionMode::Orthographic);
    }

    #[test]
    fn json_roundtrip_preserves_config() {
        let config = ViewConfig::default();
        let parsed = ViewConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ViewConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn missing_path_yields_defaults() {
        assert_eq!(ViewConfig::load(None).unwrap(), ViewConfig::default());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ViewConfig::load(Some(Path::new("/nonexistent/viewport.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/viewport.json"));
    }

    #[test]
    fn reversed_speed_range_is_swapped() {
        let input = InputConfig {
            scroll_step: 0.1,
            min_speed: 4.0,
            max_speed: 0.5,
        };
        let limits = input.speed_limits();
        assert_eq!((limits.min, limits.max), (0.5, 4.0));
    }

    #[test]
    fn camera_config_builds_normalized_front() {
        let camera = CameraConfig::default().build();
        assert!((camera.front().length() - 1.0).abs() < 1e-5);
        assert_eq!(camera.zoom(), 80.0);
        assert_eq!(camera.position(), Vec3::new(0.5, 5.5, 10.0));
    }

    #[test]
    fn camera_basis_is_y_up_whatever_the_json_says() {
        let config = ViewConfig::from_json(
            r#"{ "camera": { "front": [0.0, 0.0, 1.0], "world_up": [0.0, 0.0, 1.0] } }"#,
        )
        .unwrap();
        let camera = config.camera.build();

        assert_eq!(camera.world_up(), Vec3::Y);
        assert!(camera.front().abs_diff_eq(Vec3::Z, 1e-5));
        assert!(camera.right().abs_diff_eq(Vec3::NEG_X, 1e-5));
        assert!(camera.up().abs_diff_eq(Vec3::Y, 1e-5));
    }
}
