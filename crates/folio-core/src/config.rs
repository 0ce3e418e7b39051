//! Scene configuration.
//!
//! Every field falls back to the named constants in [`crate::constants`], so a
//! partial JSON document only overrides what it mentions.

use crate::constants::*;
use crate::choreographer::Waypoint;
use glam::Vec3;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("popup {0} duration must be positive")]
    ZeroDuration(&'static str),
    #[error("popup layout {0} must be finite and positive")]
    BadLayout(&'static str),
    #[error("camera {0} is out of range")]
    BadCamera(&'static str),
    #[error("waypoint {index} ({label}) has non-finite coordinates")]
    BadWaypoint { index: usize, label: String },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PopupLayout {
    pub width: f32,
    pub height: f32,
    pub offset: f32,
    pub header_height: f32,
    pub margin: f32,
}

impl Default for PopupLayout {
    fn default() -> Self {
        Self {
            width: POPUP_WIDTH,
            height: POPUP_HEIGHT,
            offset: POPUP_OFFSET,
            header_height: HEADER_HEIGHT,
            margin: VIEWPORT_MARGIN,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    pub grace_ms: u64,
    pub animation_ms: u64,
    pub layout: PopupLayout,
}

impl PopupConfig {
    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            grace_ms: POPUP_GRACE_MS,
            animation_ms: POPUP_ANIMATION_MS,
            layout: PopupLayout::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub popup: PopupConfig,
    pub camera: CameraConfig,
    pub waypoints: Vec<Waypoint>,
    pub api_base_url: String,
    pub scene_selector: String,
    pub popup_element_id: String,
    pub canvas_id: String,
    pub resume_url: Option<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let waypoints = DEFAULT_WAYPOINTS
            .iter()
            .enumerate()
            .map(|(i, p)| Waypoint::new(Vec3::from_array(*p), CAMERA_LOOK_AT, format!("stop-{i}")))
            .collect();
        Self {
            popup: PopupConfig::default(),
            camera: CameraConfig::default(),
            waypoints,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            scene_selector: DEFAULT_SCENE_SELECTOR.to_string(),
            popup_element_id: DEFAULT_POPUP_ELEMENT_ID.to_string(),
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            resume_url: None,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.popup.grace_ms == 0 {
            return Err(ConfigError::ZeroDuration("grace"));
        }
        if self.popup.animation_ms == 0 {
            return Err(ConfigError::ZeroDuration("animation"));
        }
        let l = &self.popup.layout;
        for (name, v) in [("width", l.width), ("height", l.height)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ConfigError::BadLayout(name));
            }
        }
        for (name, v) in [
            ("offset", l.offset),
            ("header_height", l.header_height),
            ("margin", l.margin),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::BadLayout(name));
            }
        }
        let c = &self.camera;
        if !(c.fov_deg > 0.0 && c.fov_deg < 180.0) {
            return Err(ConfigError::BadCamera("fov"));
        }
        if !(c.near > 0.0 && c.far > c.near) {
            return Err(ConfigError::BadCamera("clip planes"));
        }
        for (index, w) in self.waypoints.iter().enumerate() {
            if !w.is_finite() {
                return Err(ConfigError::BadWaypoint {
                    index,
                    label: w.label.clone(),
                });
            }
        }
        Ok(())
    }
}
