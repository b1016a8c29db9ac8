//! Perspective camera with a pointer-following tilt.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera. The tilt is a small X/Y rotation eased
/// toward the smoothed pointer each tick.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub tilt: Vec2,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_Z),
            tilt: Vec2::ZERO,
            aspect: aspect.max(f32::EPSILON),
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        let world = Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.tilt.y)
            * Mat4::from_rotation_x(self.tilt.x);
        world.inverse()
    }

    /// Ease the tilt toward a target derived from the smoothed pointer's
    /// offset from the viewport center. Targets stay within half the tilt
    /// range on each axis.
    pub fn ease_toward_pointer(
        &mut self,
        smooth_x: f32,
        smooth_y: f32,
        viewport_w: f32,
        viewport_h: f32,
    ) {
        let target_y = (smooth_x / viewport_w.max(1.0) - 0.5) * CAMERA_TILT_RANGE;
        let target_x = (smooth_y / viewport_h.max(1.0) - 0.5) * CAMERA_TILT_RANGE;
        self.tilt.y += (target_y - self.tilt.y) * CAMERA_EASE;
        self.tilt.x += (target_x - self.tilt.x) * CAMERA_EASE;
    }
}
