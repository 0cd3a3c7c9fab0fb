// Camera description and world-to-screen projection.
//
// Kept free of platform APIs so both the renderer and the DOM label writer
// derive their matrices from the same numbers.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
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
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to CSS pixels in a `width` x `height` viewport.
    ///
    /// Returns the pixel position and the view-space depth (distance in front
    /// of the eye), or `None` for points behind the near plane.
    pub fn project(&self, world: Vec3, width: f32, height: f32) -> Option<(Vec2, f32)> {
        let view = self.view_matrix() * world.extend(1.0);
        let depth = -view.z;
        if depth <= self.znear {
            return None;
        }
        let clip: Vec4 = self.projection_matrix() * view;
        if clip.w.abs() < 1e-6 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let sx = (ndc.x * 0.5 + 0.5) * width;
        let sy = (1.0 - (ndc.y * 0.5 + 0.5)) * height;
        Some((Vec2::new(sx, sy), depth))
    }
}
