// Host-side tests for the scene state (spiral + depth-layered squares).
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/scene.rs"]
mod scene;

use constants::*;
use glam::{Vec2, Vec3};
use rand::prelude::*;
use scene::*;

#[test]
fn grid_has_fixed_cardinality_and_layout() {
    let mut rng = StdRng::seed_from_u64(1);
    let squares = build_space_grid(&mut rng);
    assert_eq!(squares.len(), SQUARE_COUNT);

    let half = (GRID_SIZE / 2) as f32;
    let farthest = GRID_BASE_DEPTH - (GRID_DEPTH_LAYERS - 1) as f32 * GRID_SPACING;
    for sq in &squares {
        assert!(sq.position.x >= -half * GRID_SPACING);
        assert!(sq.position.x <= (half - 1.0) * GRID_SPACING);
        assert!(sq.position.y >= -half * GRID_SPACING);
        assert!(sq.position.y <= (half - 1.0) * GRID_SPACING);
        assert!(sq.position.z <= GRID_BASE_DEPTH);
        assert!(sq.position.z >= farthest);
        assert_eq!(sq.position.z, sq.initial_z);
        assert!(sq.speed >= SQUARE_SPEED_MIN);
        assert!(sq.speed < SQUARE_SPEED_MIN + SQUARE_SPEED_SPAN);
        assert_eq!(sq.opacity, SQUARE_BASE_OPACITY);
    }
}

#[test]
fn square_recycles_to_exact_initial_depth() {
    let mut sq = SpaceSquare {
        position: Vec3::new(0.0, 0.0, GRID_BASE_DEPTH),
        initial_z: GRID_BASE_DEPTH,
        speed: 0.12,
        opacity: SQUARE_BASE_OPACITY,
        tilt: Vec2::ZERO,
    };

    let mut recycled = false;
    let mut prev_z = sq.position.z;
    for _ in 0..600 {
        sq.advance();
        assert!(sq.position.z <= SQUARE_RECYCLE_Z);
        if sq.position.z < prev_z {
            // The only way z decreases is the recycle snap-back.
            assert_eq!(sq.position.z, GRID_BASE_DEPTH);
            recycled = true;
        }
        prev_z = sq.position.z;
    }
    assert!(recycled, "square never recycled");
}

#[test]
fn square_opacity_is_clamped_depth_fade() {
    assert_eq!(square_opacity(0.0), SQUARE_OPACITY_MAX);
    assert_eq!(square_opacity(SQUARE_FADE_DIVISOR), SQUARE_OPACITY_MIN);
    assert_eq!(square_opacity(-SQUARE_FADE_DIVISOR), SQUARE_OPACITY_MIN);
    assert!((square_opacity(30.0) - 0.25).abs() < 1e-6);
    // Decreasing with distance once out of the near clamp.
    assert!(square_opacity(-30.0) > square_opacity(-35.0));
}

#[test]
fn square_advance_refreshes_opacity_and_drifts() {
    let mut sq = SpaceSquare {
        position: Vec3::new(0.0, 0.0, -30.0),
        initial_z: -30.0,
        speed: 0.1,
        opacity: SQUARE_BASE_OPACITY,
        tilt: Vec2::ZERO,
    };
    sq.advance();
    assert_eq!(sq.opacity, square_opacity(sq.position.z));
    assert_eq!(sq.tilt.x, SQUARE_DRIFT_PER_FRAME);
    assert_eq!(sq.tilt.y, SQUARE_DRIFT_PER_FRAME);
}

#[test]
fn spiral_spins_and_wobbles_around_base_tilt() {
    let mut spiral = Spiral::new();
    spiral.advance(0.0, 0.0);
    assert!((spiral.rotation.y - SPIRAL_SPIN_PER_FRAME).abs() < 1e-7);
    assert!((spiral.rotation.x - SPIRAL_BASE_TILT).abs() < 1e-6);
    assert_eq!(spiral.scale, Vec3::ONE);

    let mut time = 0.0;
    for _ in 0..500 {
        time += TIME_STEP;
        spiral.advance(time, 0.0);
        assert!(spiral.rotation.x >= SPIRAL_BASE_TILT - SPIRAL_WOBBLE_AMPLITUDE - 1e-6);
        assert!(spiral.rotation.x <= SPIRAL_BASE_TILT + SPIRAL_WOBBLE_AMPLITUDE + 1e-6);
    }
    // Y keeps accumulating, one fixed step per frame.
    assert!((spiral.rotation.y - 501.0 * SPIRAL_SPIN_PER_FRAME).abs() < 1e-4);
}

#[test]
fn scroll_stretches_y_and_squashes_x_z() {
    let mut spiral = Spiral::new();
    // sin(scroll * 0.001) == 1 at scroll = pi/2 * 1000.
    let scroll = std::f32::consts::FRAC_PI_2 / SCROLL_DISTORTION_RATE;
    spiral.advance(0.0, scroll);
    assert!((spiral.scale.y - (1.0 + SCROLL_DISTORTION_AMPLITUDE)).abs() < 1e-3);
    assert!((spiral.scale.x - (1.0 - SCROLL_DISTORTION_AMPLITUDE * 0.5)).abs() < 1e-3);
    assert!((spiral.scale.z - spiral.scale.x).abs() < 1e-6);
}

#[test]
fn scene_advance_moves_every_square_forward() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut state = SceneState::new(&mut rng);
    let before: Vec<f32> = state.squares.iter().map(|s| s.position.z).collect();
    state.advance(0.0, 0.0);
    for (sq, prev) in state.squares.iter().zip(before) {
        assert!((sq.position.z - (prev + sq.speed)).abs() < 1e-6);
    }
}
