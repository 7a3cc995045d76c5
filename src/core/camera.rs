use super::constants::{
    CAMERA_EASE_X, CAMERA_EASE_Y, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_START,
};
use super::input::PointerOffset;
use glam::{Mat4, Vec3};

/// Perspective camera that always looks at a fixed target.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_START),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_degrees: CAMERA_FOV_DEG,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl CameraRig {
    pub fn with_aspect(aspect: f32) -> Self {
        Self {
            aspect,
            ..Self::default()
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// One step of exponential smoothing toward the pointer target.
    ///
    /// X follows the pointer slowly, Y follows the inverted pointer quickly.
    pub fn ease_toward(&mut self, pointer: PointerOffset) {
        self.eye.x += (pointer.x - self.eye.x) * CAMERA_EASE_X;
        self.eye.y += (-pointer.y - self.eye.y) * CAMERA_EASE_Y;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn projection_matrix(&self) -> Mat4 {
        // tan() is periodic, so oversized angles wrap the same way a browser engine does.
        Mat4::perspective_rh(
            self.fovy_degrees.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit vector from eye to target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }
}
