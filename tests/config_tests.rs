// Host-side tests for scene configuration parsing and validation.

use folio_core::*;
use glam::Vec3;

#[test]
fn defaults_validate() {
    let cfg = SceneConfig::default();
    assert_eq!(cfg.validate(), Ok(()));
    assert_eq!(cfg.waypoints.len(), DEFAULT_WAYPOINTS.len());
    assert_eq!(cfg.waypoints[0].label, "stop-0");
    assert_eq!(cfg.popup.grace().as_millis(), 250);
    assert_eq!(cfg.popup.animation().as_millis(), 200);
}

#[test]
fn partial_json_overrides_only_what_it_names() {
    let cfg: SceneConfig =
        serde_json::from_str(r#"{ "popup": { "grace_ms": 400, "layout": { "width": 300 } } }"#)
            .expect("parse");
    assert_eq!(cfg.popup.grace_ms, 400);
    assert_eq!(cfg.popup.animation_ms, POPUP_ANIMATION_MS);
    assert_eq!(cfg.popup.layout.width, 300.0);
    assert_eq!(cfg.popup.layout.height, POPUP_HEIGHT);
    assert_eq!(cfg.camera, CameraConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.validate(), Ok(()));
}

#[test]
fn waypoints_accept_camel_and_snake_look_at() {
    let cfg: SceneConfig = serde_json::from_str(
        r#"{ "waypoints": [
            { "position": [0, 1, 2], "lookAt": [0, 0, 0], "label": "door" },
            { "position": [3, 4, 5], "look_at": [1, 1, 1] }
        ] }"#,
    )
    .expect("parse");
    assert_eq!(cfg.waypoints.len(), 2);
    assert_eq!(cfg.waypoints[0].position, Vec3::new(0.0, 1.0, 2.0));
    assert_eq!(cfg.waypoints[0].label, "door");
    assert_eq!(cfg.waypoints[1].look_at, Vec3::ONE);
    assert_eq!(cfg.waypoints[1].label, "");
}

#[test]
fn zero_durations_are_rejected() {
    let mut cfg = SceneConfig::default();
    cfg.popup.grace_ms = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::ZeroDuration("grace")));
    cfg.popup.grace_ms = 250;
    cfg.popup.animation_ms = 0;
    assert_eq!(cfg.validate(), Err(ConfigError::ZeroDuration("animation")));
}

#[test]
fn bad_layout_and_camera_are_rejected() {
    let mut cfg = SceneConfig::default();
    cfg.popup.layout.width = f32::NAN;
    assert_eq!(cfg.validate(), Err(ConfigError::BadLayout("width")));

    let mut cfg = SceneConfig::default();
    cfg.popup.layout.margin = -1.0;
    assert_eq!(cfg.validate(), Err(ConfigError::BadLayout("margin")));

    let mut cfg = SceneConfig::default();
    cfg.camera.fov_deg = 180.0;
    assert_eq!(cfg.validate(), Err(ConfigError::BadCamera("fov")));

    let mut cfg = SceneConfig::default();
    cfg.camera.far = cfg.camera.near;
    assert_eq!(cfg.validate(), Err(ConfigError::BadCamera("clip planes")));
}

#[test]
fn non_finite_waypoint_is_named_in_error() {
    let mut cfg = SceneConfig::default();
    cfg.waypoints[2].look_at.y = f32::INFINITY;
    let err = cfg.validate().expect_err("should fail");
    assert_eq!(
        err,
        ConfigError::BadWaypoint {
            index: 2,
            label: "stop-2".into()
        }
    );
    assert!(err.to_string().contains("stop-2"));
}
