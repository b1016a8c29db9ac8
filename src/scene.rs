//! Per-frame scene state: the rotating centerpiece and the infinite grid of
//! depth-layered squares. Rendering-library objects live in `render`; this
//! module keeps plain per-instance records so the animation logic stays
//! host-testable.

use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// The centerpiece torus knot: rotation plus a scroll-driven stretch.
#[derive(Clone, Copy, Debug)]
pub struct Spiral {
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Spiral {
    pub fn new() -> Self {
        Self {
            rotation: Vec3::new(SPIRAL_BASE_TILT, 0.0, 0.0),
            scale: Vec3::ONE,
        }
    }

    /// Spin on Y, stretch with scroll, wobble on X with elapsed time.
    pub fn advance(&mut self, time: f32, scroll_y: f32) {
        self.rotation.y += SPIRAL_SPIN_PER_FRAME;

        let distortion =
            (scroll_y * SCROLL_DISTORTION_RATE).sin() * SCROLL_DISTORTION_AMPLITUDE;
        self.scale.y = 1.0 + distortion;
        self.scale.x = 1.0 - distortion * 0.5;
        self.scale.z = 1.0 - distortion * 0.5;

        self.rotation.x =
            SPIRAL_BASE_TILT + (time * SPIRAL_WOBBLE_RATE).sin() * SPIRAL_WOBBLE_AMPLITUDE;
    }
}

impl Default for Spiral {
    fn default() -> Self {
        Self::new()
    }
}

/// Opacity of a square at depth `z`: nearer is denser, clamped both ways.
pub fn square_opacity(z: f32) -> f32 {
    (1.0 - z.abs() / SQUARE_FADE_DIVISOR).clamp(SQUARE_OPACITY_MIN, SQUARE_OPACITY_MAX)
}

/// One wireframe square of the receding grid.
#[derive(Clone, Copy, Debug)]
pub struct SpaceSquare {
    pub position: Vec3,
    pub initial_z: f32,
    pub speed: f32,
    pub opacity: f32,
    pub tilt: Vec2,
}

impl SpaceSquare {
    /// Fly toward the viewer, recycle past the near threshold, refresh the
    /// depth fade, and keep up the slow rotational drift.
    pub fn advance(&mut self) {
        self.position.z += self.speed;
        if self.position.z > SQUARE_RECYCLE_Z {
            self.position.z = self.initial_z;
        }
        self.opacity = square_opacity(self.position.z);
        self.tilt.x += SQUARE_DRIFT_PER_FRAME;
        self.tilt.y += SQUARE_DRIFT_PER_FRAME;
    }
}

/// Build the full grid: GRID_SIZE x GRID_SIZE squares per layer, layers
/// stacked back from GRID_BASE_DEPTH, each square with its own speed.
pub fn build_space_grid(rng: &mut impl Rng) -> Vec<SpaceSquare> {
    let mut squares = Vec::with_capacity(SQUARE_COUNT);
    for layer in 0..GRID_DEPTH_LAYERS {
        for x in -GRID_SIZE / 2..GRID_SIZE / 2 {
            for y in -GRID_SIZE / 2..GRID_SIZE / 2 {
                let z = -(layer as f32) * GRID_SPACING + GRID_BASE_DEPTH;
                squares.push(SpaceSquare {
                    position: Vec3::new(
                        x as f32 * GRID_SPACING,
                        y as f32 * GRID_SPACING,
                        z,
                    ),
                    initial_z: z,
                    speed: SQUARE_SPEED_MIN + rng.gen::<f32>() * SQUARE_SPEED_SPAN,
                    opacity: SQUARE_BASE_OPACITY,
                    tilt: Vec2::ZERO,
                });
            }
        }
    }
    squares
}

/// Everything the renderer draws each frame.
pub struct SceneState {
    pub spiral: Spiral,
    pub squares: Vec<SpaceSquare>,
}

impl SceneState {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            spiral: Spiral::new(),
            squares: build_space_grid(rng),
        }
    }

    pub fn advance(&mut self, time: f32, scroll_y: f32) {
        self.spiral.advance(time, scroll_y);
        for sq in &mut self.squares {
            sq.advance();
        }
    }
}
