// Host-side tests for pointer/scroll/time state and the camera tilt.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/state.rs"]
mod state;
#[path = "../src/camera.rs"]
mod camera;

use camera::Camera;
use constants::*;
use glam::Vec3;
use state::*;

#[test]
fn pointer_smoothing_closes_a_fixed_fraction_per_tick() {
    let mut pointer = PointerState::default();
    pointer.set(100.0, 40.0);
    pointer.smooth_step();
    assert!((pointer.smooth_x - 100.0 * POINTER_SMOOTHING).abs() < 1e-6);
    assert!((pointer.smooth_y - 40.0 * POINTER_SMOOTHING).abs() < 1e-6);
}

#[test]
fn pointer_smoothing_converges_to_raw_position() {
    let mut pointer = PointerState::default();
    pointer.set(640.0, 360.0);
    for _ in 0..400 {
        pointer.smooth_step();
    }
    assert!((pointer.smooth_x - 640.0).abs() < 0.1);
    assert!((pointer.smooth_y - 360.0).abs() < 0.1);
}

#[test]
fn time_accumulates_in_fixed_steps() {
    let mut state = EffectState::default();
    for _ in 0..3 {
        state.tick_time();
    }
    assert!((state.time - 3.0 * TIME_STEP).abs() < 1e-6);
}

#[test]
fn camera_tilt_eases_toward_pointer_offset() {
    let mut cam = Camera::new(16.0 / 9.0);
    // Pointer at the far corner: targets sit at half the tilt range.
    cam.ease_toward_pointer(1920.0, 1080.0, 1920.0, 1080.0);
    let expected = 0.5 * CAMERA_TILT_RANGE * CAMERA_EASE;
    assert!((cam.tilt.y - expected).abs() < 1e-6);
    assert!((cam.tilt.x - expected).abs() < 1e-6);

    for _ in 0..2000 {
        cam.ease_toward_pointer(1920.0, 1080.0, 1920.0, 1080.0);
    }
    assert!((cam.tilt.y - 0.5 * CAMERA_TILT_RANGE).abs() < 1e-3);
    assert!(cam.tilt.y.abs() <= 0.5 * CAMERA_TILT_RANGE + 1e-6);
}

#[test]
fn camera_tilt_decays_when_pointer_centers() {
    let mut cam = Camera::new(16.0 / 9.0);
    cam.tilt.x = 0.04;
    cam.tilt.y = -0.03;
    let mut prev = (cam.tilt.x.abs(), cam.tilt.y.abs());
    for _ in 0..50 {
        cam.ease_toward_pointer(960.0, 540.0, 1920.0, 1080.0);
        let now = (cam.tilt.x.abs(), cam.tilt.y.abs());
        assert!(now.0 <= prev.0);
        assert!(now.1 <= prev.1);
        prev = now;
    }
}

#[test]
fn view_matrix_maps_camera_position_to_origin() {
    let cam = Camera::new(16.0 / 9.0);
    let at_eye = cam.view_matrix().transform_point3(Vec3::new(0.0, 0.0, CAMERA_Z));
    assert!(at_eye.length() < 1e-4);

    let proj = cam.projection_matrix();
    assert!(proj.is_finite());
}
