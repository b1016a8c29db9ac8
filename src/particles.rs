//! Drifting glow particles with mouse parallax, drawn on a 2D overlay canvas.

use crate::constants::*;
use rand::prelude::*;
use web_sys as web;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParticleColor {
    White,
    Pink,
}

impl ParticleColor {
    pub fn css(self) -> &'static str {
        match self {
            ParticleColor::White => PARTICLE_WHITE,
            ParticleColor::Pink => PARTICLE_PINK,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: ParticleColor,
    pub parallax_speed: f32,
}

/// How many particles a given viewport width gets.
pub fn particle_count_for_width(width: f32) -> usize {
    ((width / PARTICLE_PER_WIDTH_DIVISOR) as usize).min(PARTICLE_CAP)
}

/// Fixed-size particle collection; particles wrap at the edges, never die.
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let count = particle_count_for_width(width);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let color = if rng.gen::<f64>() < PARTICLE_WHITE_RATIO {
                ParticleColor::White
            } else {
                ParticleColor::Pink
            };
            particles.push(Particle {
                x: rng.gen::<f32>() * width,
                y: rng.gen::<f32>() * height,
                vx: (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_DRIFT_MAX,
                vy: (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_DRIFT_MAX,
                size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
                color,
                parallax_speed: PARTICLE_PARALLAX_MIN + rng.gen::<f32>() * PARTICLE_PARALLAX_SPAN,
            });
        }
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle by its own drift plus a parallax offset away
    /// from the viewport center, then wrap toroidally at the edges.
    pub fn advance(&mut self, smooth_x: f32, smooth_y: f32, width: f32, height: f32) {
        let dx = smooth_x - width / 2.0;
        let dy = smooth_y - height / 2.0;
        for p in &mut self.particles {
            p.x += p.vx + dx * p.parallax_speed * PARALLAX_DAMP;
            p.y += p.vy + dy * p.parallax_speed * PARALLAX_DAMP;

            // Toroidal wrap, not clamp or bounce.
            if p.x < 0.0 {
                p.x = width;
            } else if p.x > width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = height;
            } else if p.y > height {
                p.y = 0.0;
            }
        }
    }

    /// Full repaint: clear the canvas, then draw each particle as a filled
    /// circle with a soft glow in its own color.
    pub fn draw(&self, ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
        ctx.clear_rect(0.0, 0.0, width, height);
        for p in &self.particles {
            ctx.save();
            ctx.set_shadow_blur(PARTICLE_GLOW_BLUR);
            ctx.set_shadow_color(p.color.css());
            ctx.set_fill_style_str(p.color.css());
            ctx.begin_path();
            let _ = ctx.arc(
                p.x as f64,
                p.y as f64,
                p.size as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
            ctx.restore();
        }
    }
}
