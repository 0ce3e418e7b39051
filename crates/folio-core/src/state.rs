//! Camera and viewport state shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The renderer owns the
//! real camera; the core keeps a mirror that the choreographer writes and the
//! interaction tracker reads to build rays and project bounds.

use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(fov_deg: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 6.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: fov_deg.to_radians(),
            znear,
            zfar,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn apply_pose(&mut self, pose: &CameraPose) {
        self.eye = pose.position;
        self.target = pose.look_at;
    }
}

/// Eye position and look-at point produced by the choreographer each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    /// Flat `[eye.xyz, look_at.xyz]` layout handed to the JS renderer.
    pub fn to_array(&self) -> [f32; 6] {
        let packed = [self.position, self.look_at];
        let flat: &[f32] = bytemuck::cast_slice(&packed);
        let mut out = [0.0; 6];
        out.copy_from_slice(flat);
        out
    }
}

/// Render surface rectangle in viewport (CSS pixel) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
