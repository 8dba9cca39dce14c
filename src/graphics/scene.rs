//! Cube transform state
//!
//! Pure CPU-side half of the renderer: the accumulated rotation angle and
//! the model/view/projection matrices derived from it. Kept free of GPU
//! handles so the whole transform pipeline is testable without a device.

use glam::{Mat4, Vec3};

/// Rotation applied per rendered frame, in degrees.
pub const ANGLE_STEP_DEG: f32 = 1.0;

/// Vertical field of view for the projection, in degrees.
pub const FOV_Y_DEG: f32 = 45.0;

/// Near clip plane distance.
pub const Z_NEAR: f32 = 0.1;

/// Far clip plane distance.
pub const Z_FAR: f32 = 10.0;

/// Fixed camera position. The camera never moves, so the view matrix is
/// computed once at construction rather than on every resize.
pub const EYE: Vec3 = Vec3::new(0.0, 0.0, 2.0);

/// Transform state for the rotating cube.
///
/// `advance` is the only mutation the render path performs; `resize` only
/// touches the projection. Matrices are recomputed deterministically from
/// the current angle and viewport, never accumulated in place.
#[derive(Debug, Clone)]
pub struct CubeScene {
    angle_deg: f32,
    view: Mat4,
    projection: Mat4,
}

impl CubeScene {
    pub fn new() -> Self {
        Self {
            angle_deg: 0.0,
            view: Mat4::look_at_rh(EYE, Vec3::ZERO, Vec3::Y),
            projection: Mat4::IDENTITY,
        }
    }

    /// Recompute the projection for a new viewport.
    ///
    /// Zero dimensions are clamped to 1 so a minimized window cannot
    /// produce a NaN aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        let aspect = width as f32 / height as f32;
        self.projection = Mat4::perspective_rh(FOV_Y_DEG.to_radians(), aspect, Z_NEAR, Z_FAR);
    }

    /// Step the rotation by one frame and return the new model matrix.
    ///
    /// The angle grows without bound; the rotation wraps through the
    /// trigonometric functions rather than an explicit modulo.
    pub fn advance(&mut self) -> Mat4 {
        self.angle_deg += ANGLE_STEP_DEG;
        self.model()
    }

    /// Model matrix: pure Y-axis rotation by the current angle.
    pub fn model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.angle_deg.to_radians())
    }

    /// Combined transform: projection * (view * model).
    pub fn mvp(&self) -> Mat4 {
        self.projection * (self.view * self.model())
    }

    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }
}

impl Default for CubeScene {
    fn default() -> Self {
        Self::new()
    }
}
