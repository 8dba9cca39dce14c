//! Integration test for the cube transform pipeline
//!
//! Exercises the full CPU side of a frame — resize, per-frame rotation,
//! and MVP composition — against reference formulas, without a GPU.

use glam::{Mat4, Vec3, Vec4};
use spincube::graphics::scene::{self, CubeScene, ANGLE_STEP_DEG, FOV_Y_DEG, Z_FAR, Z_NEAR};

fn assert_mat_approx_eq(a: Mat4, b: Mat4, tolerance: f32) {
    for (i, (x, y)) in a
        .to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .enumerate()
    {
        assert!(
            (x - y).abs() < tolerance,
            "element {} differs: {} vs {}",
            i,
            x,
            y
        );
    }
}

/// Reference right-handed perspective matrix with zero-to-one depth,
/// written out from the formula rather than taken from glam.
fn reference_perspective(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (0.5 * fov_y_deg.to_radians()).tan();
    let r = far / (near - far);
    Mat4::from_cols(
        Vec4::new(f / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, f, 0.0, 0.0),
        Vec4::new(0.0, 0.0, r, -1.0),
        Vec4::new(0.0, 0.0, r * near, 0.0),
    )
}

#[test]
fn test_projection_matches_reference_formula() {
    for (w, h) in [(800u32, 600u32), (1920, 1080), (640, 480), (333, 777)] {
        let mut scene = CubeScene::new();
        scene.resize(w, h);

        let expected = reference_perspective(FOV_Y_DEG, w as f32 / h as f32, Z_NEAR, Z_FAR);
        assert_mat_approx_eq(scene.projection(), expected, 1e-5);
    }
}

#[test]
fn test_projection_is_deterministic() {
    let mut a = CubeScene::new();
    let mut b = CubeScene::new();
    a.resize(1024, 768);
    b.resize(1024, 768);
    assert_eq!(a.projection(), b.projection());
}

#[test]
fn test_view_is_fixed_camera() {
    let scene = CubeScene::new();
    let expected = Mat4::look_at_rh(scene::EYE, Vec3::ZERO, Vec3::Y);
    assert_mat_approx_eq(scene.view(), expected, 1e-6);

    // The camera sits on +Z looking at the origin: a point at the origin
    // lands 2 units down the view-space -Z axis.
    let origin_in_view = scene.view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((origin_in_view.z - -2.0).abs() < 1e-6);
}

#[test]
fn test_angle_after_n_frames() {
    let mut scene = CubeScene::new();
    scene.resize(800, 600);

    let n = 360;
    for _ in 0..n {
        scene.advance();
    }

    assert!((scene.angle_deg() - n as f32 * ANGLE_STEP_DEG).abs() < 1e-3);

    // 360 one-degree steps come back around to the identity rotation
    assert_mat_approx_eq(scene.model(), Mat4::IDENTITY, 1e-4);
}

#[test]
fn test_mvp_is_projection_times_view_times_model() {
    let mut scene = CubeScene::new();
    scene.resize(800, 600);

    for _ in 0..17 {
        scene.advance();
    }

    let reconstructed = scene.projection() * (scene.view() * scene.model());
    assert_mat_approx_eq(scene.mvp(), reconstructed, 1e-5);
}

#[test]
fn test_first_frame_scenario() {
    // Resize(800,600) then one frame: angle 1.0, model = rotateY(1 degree)
    let mut scene = CubeScene::new();
    scene.resize(800, 600);

    let model = scene.advance();
    assert_eq!(scene.angle_deg(), 1.0);
    assert_mat_approx_eq(model, Mat4::from_rotation_y(1.0f32.to_radians()), 1e-6);

    // The cube's front face stays in front of the near plane
    let front_center = scene.mvp() * Vec4::new(0.0, 0.0, 0.5, 1.0);
    assert!(front_center.w > 0.0);
}

#[test]
fn test_resize_does_not_touch_rotation() {
    let mut scene = CubeScene::new();
    scene.resize(800, 600);
    for _ in 0..30 {
        scene.advance();
    }

    let model_before = scene.model();
    scene.resize(1280, 720);
    assert_eq!(scene.model(), model_before);
    assert_eq!(scene.angle_deg(), 30.0);
}
