// DOM hooks and styling shared by the web frontend.

// Optional JSON overrides for `SceneConfig`
pub const CONFIG_SCRIPT_ID: &str = "scene-config";

// Popup element styling
pub const POPUP_VISIBLE_CLASS: &str = "visible";
pub const STYLE_DISPLAY_SHOWN: &str = "block";
pub const STYLE_DISPLAY_HIDDEN: &str = "none";

// Content API paths (relative to `api_base_url`)
pub const PROJECTS_PATH: &str = "/projects";
pub const EXPERIENCES_PATH: &str = "/experiences";
