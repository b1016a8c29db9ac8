//! Shared mutable state for the effect.
//!
//! These types intentionally avoid referencing platform-specific APIs: the
//! event wiring writes into them, the frame driver reads and advances them,
//! and the host-side tests exercise them directly.

use crate::constants::*;

/// Raw and exponentially smoothed pointer position, in client pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub smooth_x: f32,
    pub smooth_y: f32,
}

impl PointerState {
    /// Record a new raw pointer position; smoothing catches up per tick.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// One smoothing step toward the raw position.
    pub fn smooth_step(&mut self) {
        self.smooth_x += (self.x - self.smooth_x) * POINTER_SMOOTHING;
        self.smooth_y += (self.y - self.smooth_y) * POINTER_SMOOTHING;
    }
}

/// Everything the input adapter and the frame driver share.
#[derive(Default, Clone, Copy, Debug)]
pub struct EffectState {
    pub pointer: PointerState,
    pub scroll_y: f32,
    pub time: f32,
}

impl EffectState {
    pub fn tick_time(&mut self) {
        self.time += TIME_STEP;
    }
}
