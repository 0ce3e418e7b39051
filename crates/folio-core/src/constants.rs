use glam::Vec3;

// Shared scene/interaction tuning constants used by the core and the web frontend.

// Popup timing (milliseconds)
pub const POPUP_GRACE_MS: u64 = 250; // hide delay after the pointer leaves object and popup
pub const POPUP_ANIMATION_MS: u64 = 200; // exit animation length before unmount

// Popup layout (CSS pixels)
pub const POPUP_WIDTH: f32 = 350.0;
pub const POPUP_HEIGHT: f32 = 400.0;
pub const POPUP_OFFSET: f32 = 0.0; // gap between object footprint and popup edge
pub const HEADER_HEIGHT: f32 = 80.0; // reserved band for the page header
pub const VIEWPORT_MARGIN: f32 = 20.0;

// Camera intrinsics
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, 2.5, 0.0);

// Scroll path through the waiting room, first to last
pub const DEFAULT_WAYPOINTS: [[f32; 3]; 4] = [
    [-20.0, 15.0, -25.0],
    [-15.0, 12.0, -10.0],
    [-10.0, 10.0, 0.0],
    [-5.0, 8.0, 5.0],
];

// Content summaries (characters)
pub const SUMMARY_PREVIEW_CHARS: usize = 120;
pub const SUMMARY_CUT_CHARS: usize = 100;
pub const EXPERIENCE_PREVIEW_CHARS: usize = 200;

// Host wiring defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_SCENE_SELECTOR: &str = ".scene-section";
pub const DEFAULT_POPUP_ELEMENT_ID: &str = "hover-popup";
pub const DEFAULT_CANVAS_ID: &str = "scene-canvas";
