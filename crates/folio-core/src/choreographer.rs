//! Scroll progress to camera pose.
//!
//! Progress `t` in \[0, 1\] is split evenly across the `N - 1` segments of the
//! waypoint path; each segment is traversed with a cubic ease-in-out. Position
//! and look-at are interpolated independently.

use crate::state::CameraPose;
use glam::Vec3;
use serde::Deserialize;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Waypoint {
    pub position: Vec3,
    #[serde(rename = "lookAt", alias = "look_at")]
    pub look_at: Vec3,
    #[serde(default)]
    pub label: String,
}

impl Waypoint {
    pub fn new(position: Vec3, look_at: Vec3, label: impl Into<String>) -> Self {
        Self {
            position,
            look_at,
            label: label.into(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.look_at.is_finite()
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            look_at: self.look_at,
        }
    }
}

/// `u < 0.5 ? 4u³ : 1 − (−2u + 2)³ / 2`, input clamped to \[0, 1\].
#[inline]
pub fn ease_in_out_cubic(u: f32) -> f32 {
    let u = u.clamp(0.0, 1.0);
    if u < 0.5 {
        4.0 * u * u * u
    } else {
        1.0 - (-2.0 * u + 2.0).powi(3) / 2.0
    }
}

/// Segment index and clamped local fraction for progress `t` over `n` waypoints.
///
/// Paths with fewer than two waypoints have no segments and map to `(0, 0.0)`.
#[inline]
pub fn segment_for(t: f32, n: usize) -> (usize, f32) {
    if n < 2 {
        return (0, 0.0);
    }
    let segments = (n - 1) as f32;
    let index = ((t * segments).floor().max(0.0) as usize).min(n - 2);
    let u = ((t - index as f32 / segments) * segments).clamp(0.0, 1.0);
    (index, u)
}

#[derive(Clone, Debug, Default)]
pub struct CameraChoreographer {
    waypoints: SmallVec<[Waypoint; 4]>,
}

impl CameraChoreographer {
    /// Builds the path, dropping waypoints with non-finite coordinates.
    pub fn new(waypoints: impl IntoIterator<Item = Waypoint>) -> Self {
        let mut kept = SmallVec::new();
        for (i, w) in waypoints.into_iter().enumerate() {
            if w.is_finite() {
                kept.push(w);
            } else {
                log::warn!("[camera] dropping waypoint {} ({}): non-finite", i, w.label);
            }
        }
        if kept.len() < 2 {
            log::warn!("[camera] {} usable waypoint(s); camera will not move", kept.len());
        }
        Self { waypoints: kept }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Pose for progress `t`. `None` only when there are no waypoints at all,
    /// in which case the caller keeps whatever camera it already has.
    pub fn pose(&self, t: f32) -> Option<CameraPose> {
        let n = self.waypoints.len();
        let first = self.waypoints.first()?;
        if n == 1 {
            return Some(first.pose());
        }
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        if t <= 0.0 {
            return Some(first.pose());
        }
        if t >= 1.0 {
            return Some(self.waypoints[n - 1].pose());
        }
        let (index, u) = segment_for(t, n);
        let from = &self.waypoints[index];
        let to = &self.waypoints[index + 1];
        let eased = ease_in_out_cubic(u);
        // Endpoints are returned verbatim so lerp rounding never leaves the path.
        if eased <= 0.0 {
            return Some(from.pose());
        }
        if eased >= 1.0 {
            return Some(to.pose());
        }
        Some(CameraPose {
            position: from.position.lerp(to.position, eased),
            look_at: from.look_at.lerp(to.look_at, eased),
        })
    }
}
