//! Ray construction, ray/box intersection and screen-space projection.

use crate::state::{Camera, Viewport};
use glam::{Vec2, Vec3, Vec4};

/// Axis-aligned box in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Finite and non-inverted on every axis. Flat boxes are allowed.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Pixel rectangle in viewport space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenBounds {
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.top + self.height * 0.5
    }
}

#[inline]
/// Compute a world-space ray through a viewport pixel.
///
/// - `camera`: current camera (eye, look-at, intrinsics)
/// - `viewport`: render surface rectangle the pixel is measured in
/// - `px`, `py`: pointer position in the same space as `viewport`
///
/// Returns `None` for non-finite input or a degenerate viewport.
pub fn screen_to_world_ray(camera: &Camera, viewport: &Viewport, px: f32, py: f32) -> Option<Ray> {
    if !(px.is_finite() && py.is_finite() && viewport.is_usable()) {
        return None;
    }
    let ndc_x = 2.0 * (px - viewport.left) / viewport.width - 1.0;
    let ndc_y = 1.0 - 2.0 * (py - viewport.top) / viewport.height;
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    if p_far.w.abs() < f32::EPSILON {
        return None;
    }
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let dir = (p1 - camera.eye).normalize_or_zero();
    if dir == Vec3::ZERO || !dir.is_finite() {
        return None;
    }
    Some(Ray {
        origin: camera.eye,
        dir,
    })
}

/// Slab test. Returns the entry parameter along `ray`, clamped to zero when
/// the origin is already inside the box.
pub fn ray_aabb(ray: &Ray, bounds: &Aabb) -> Option<f32> {
    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.dir[axis];
        let (min, max) = (bounds.min[axis], bounds.max[axis]);
        if d.abs() < 1e-8 {
            if o < min || o > max {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t1 = (min - o) * inv;
        let mut t2 = (max - o) * inv;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }
        t_min = t_min.max(t1);
        t_max = t_max.min(t2);
        if t_max < t_min {
            return None;
        }
    }
    Some(t_min)
}

/// Project a world point to viewport pixels. `None` if behind the camera.
pub fn project_point(camera: &Camera, viewport: &Viewport, p: Vec3) -> Option<Vec2> {
    let clip = camera.view_projection() * p.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    let x = viewport.left + (ndc.x + 1.0) * 0.5 * viewport.width;
    let y = viewport.top + (1.0 - ndc.y) * 0.5 * viewport.height;
    Some(Vec2::new(x, y))
}

/// Enclosing pixel rectangle of the box's eight projected corners.
///
/// Corners behind the camera are ignored; `None` when no corner is in front.
pub fn project_bounds(camera: &Camera, viewport: &Viewport, bounds: &Aabb) -> Option<ScreenBounds> {
    let mut lo = Vec2::splat(f32::INFINITY);
    let mut hi = Vec2::splat(f32::NEG_INFINITY);
    let mut any = false;
    for corner in bounds.corners() {
        if let Some(p) = project_point(camera, viewport, corner) {
            lo = lo.min(p);
            hi = hi.max(p);
            any = true;
        }
    }
    any.then(|| ScreenBounds::from_edges(lo.x, lo.y, hi.x, hi.y))
}
