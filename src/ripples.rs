//! Expanding ripple rings spawned from pointer activity.

use crate::constants::*;
use smallvec::SmallVec;
use web_sys as web;

#[derive(Clone, Copy, Debug)]
pub struct Ripple {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub max_radius: f32,
    pub opacity: f32,
}

/// Decide whether a settled pointer move produces a ripple.
///
/// `roll` is a uniform sample in [0, 1); the event wiring feeds it from the
/// host's random source, tests feed it from a seeded generator.
pub fn should_spawn_on_settle(roll: f64) -> bool {
    roll < SETTLE_RIPPLE_CHANCE
}

/// Self-pruning ring collection: grows only via `spawn`, shrinks only when a
/// ring fades out during `advance`.
#[derive(Default)]
pub struct RippleField {
    pub ripples: SmallVec<[Ripple; 16]>,
}

impl RippleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, x: f32, y: f32) {
        self.ripples.push(Ripple {
            x,
            y,
            radius: 0.0,
            max_radius: RIPPLE_MAX_RADIUS,
            opacity: 1.0,
        });
    }

    /// Grow and fade every ring, dropping the ones that reached zero opacity
    /// in the same pass. Survivor order is preserved.
    pub fn advance(&mut self) {
        self.ripples.retain(|r| {
            r.radius += RIPPLE_GROWTH_PER_FRAME;
            r.opacity -= RIPPLE_FADE_PER_FRAME;
            r.opacity > 0.0
        });
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    /// Full repaint: clear the canvas, then stroke each surviving ring with
    /// a glow whose strength follows the ring's remaining opacity.
    pub fn draw(&self, ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
        ctx.clear_rect(0.0, 0.0, width, height);
        for r in &self.ripples {
            ctx.save();
            ctx.set_stroke_style_str(&format!(
                "rgba(255, 0, 110, {:.3})",
                r.opacity * RIPPLE_STROKE_ALPHA
            ));
            ctx.set_line_width(RIPPLE_LINE_WIDTH);
            ctx.set_shadow_blur(RIPPLE_GLOW_BLUR);
            ctx.set_shadow_color(&format!("rgba(255, 0, 110, {:.3})", r.opacity));
            ctx.begin_path();
            let _ = ctx.arc(
                r.x as f64,
                r.y as f64,
                r.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.stroke();
            ctx.restore();
        }
    }
}
