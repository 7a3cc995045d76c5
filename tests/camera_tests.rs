// Host-side tests for camera easing and projection.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod input {
    include!("../src/core/input.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}

use camera::*;
use constants::*;
use glam::Vec3;
use input::PointerOffset;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn default_pose_matches_constants() {
    let cam = CameraRig::default();
    assert_eq!(cam.eye, Vec3::from_array(CAMERA_START));
    assert_eq!(cam.target, Vec3::ZERO);
    assert_eq!(cam.znear, CAMERA_NEAR);
    assert_eq!(cam.zfar, CAMERA_FAR);
}

#[test]
fn x_eases_slowly_toward_pointer() {
    let mut cam = CameraRig::default();
    cam.eye.x = 0.0;
    cam.ease_toward(PointerOffset { x: 2.0, y: 0.0 });
    assert!(approx(cam.eye.x, 0.1));
}

#[test]
fn y_eases_quickly_toward_inverted_pointer() {
    let mut cam = CameraRig::default();
    cam.eye.y = 0.0;
    cam.ease_toward(PointerOffset { x: 0.0, y: 2.0 });
    assert!(approx(cam.eye.y, -1.0));
}

#[test]
fn easing_leaves_z_untouched_and_converges() {
    let mut cam = CameraRig::default();
    let target = PointerOffset { x: 3.0, y: -1.0 };
    for _ in 0..500 {
        cam.ease_toward(target);
    }
    assert!(approx(cam.eye.x, 3.0));
    assert!(approx(cam.eye.y, 1.0));
    assert_eq!(cam.eye.z, CAMERA_START[2]);
}

#[test]
fn oversized_fov_wraps_like_its_reduced_angle() {
    let wide = CameraRig::with_aspect(1.5);
    let mut reduced = CameraRig::with_aspect(1.5);
    reduced.fovy_degrees = 100.0;
    let a = wide.projection_matrix().to_cols_array();
    let b = reduced.projection_matrix().to_cols_array();
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < 1e-3, "{} vs {}", x, y);
    }
}

#[test]
fn origin_projects_inside_clip_space() {
    let mut cam = CameraRig::with_aspect(16.0 / 9.0);
    cam.look_at(Vec3::ZERO);
    let clip = cam.view_proj() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.w > 0.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn invalid_aspect_is_ignored() {
    let mut cam = CameraRig::with_aspect(2.0);
    cam.set_aspect(0.0);
    cam.set_aspect(f32::NAN);
    assert_eq!(cam.aspect, 2.0);
}

#[test]
fn forward_points_at_target() {
    let cam = CameraRig::default();
    let f = cam.forward();
    assert!(approx(f.length(), 1.0));
    let expected = (Vec3::ZERO - cam.eye).normalize();
    assert!(approx(f.dot(expected), 1.0));
}
