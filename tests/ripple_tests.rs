// Host-side tests for the ripple manager.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/constants.rs"]
mod constants;
#[path = "../src/ripples.rs"]
mod ripples;

use constants::*;
use rand::prelude::*;
use ripples::*;

#[test]
fn spawn_starts_collapsed_and_opaque() {
    let mut field = RippleField::new();
    field.spawn(120.0, 80.0);
    assert_eq!(field.len(), 1);
    let r = &field.ripples[0];
    assert_eq!(r.x, 120.0);
    assert_eq!(r.y, 80.0);
    assert_eq!(r.radius, 0.0);
    assert_eq!(r.max_radius, RIPPLE_MAX_RADIUS);
    assert_eq!(r.opacity, 1.0);
}

#[test]
fn advance_grows_and_fades_by_fixed_steps() {
    let mut field = RippleField::new();
    field.spawn(0.0, 0.0);
    field.advance();
    assert_eq!(field.ripples[0].radius, RIPPLE_GROWTH_PER_FRAME);
    assert_eq!(field.ripples[0].opacity, 1.0 - RIPPLE_FADE_PER_FRAME);
    field.advance();
    assert_eq!(field.ripples[0].radius, 2.0 * RIPPLE_GROWTH_PER_FRAME);
}

#[test]
fn ripple_at_exactly_zero_opacity_is_dropped_same_pass() {
    let mut field = RippleField::new();
    field.ripples.push(Ripple {
        x: 0.0,
        y: 0.0,
        radius: 10.0,
        max_radius: RIPPLE_MAX_RADIUS,
        opacity: RIPPLE_FADE_PER_FRAME, // fades to exactly 0 this tick
    });
    field.advance();
    assert!(field.is_empty());
}

#[test]
fn ripple_just_above_threshold_survives() {
    let mut field = RippleField::new();
    field.ripples.push(Ripple {
        x: 0.0,
        y: 0.0,
        radius: 10.0,
        max_radius: RIPPLE_MAX_RADIUS,
        opacity: RIPPLE_FADE_PER_FRAME + 0.001,
    });
    field.advance();
    assert_eq!(field.len(), 1);
    assert!(field.ripples[0].opacity > 0.0);
}

#[test]
fn fresh_ripple_fades_out_after_67_ticks() {
    let mut field = RippleField::new();
    field.spawn(0.0, 0.0);
    let mut ticks = 0;
    while !field.is_empty() {
        field.advance();
        ticks += 1;
        assert!(ticks < 1000, "ripple never pruned");
    }
    // opacity 1.0 at -0.015/tick stays positive through tick 66.
    assert_eq!(ticks, 67);
}

#[test]
fn pruning_preserves_survivor_order() {
    let mut field = RippleField::new();
    for (x, opacity) in [(1.0, 0.5), (2.0, 0.01), (3.0, 0.8)] {
        field.ripples.push(Ripple {
            x,
            y: 0.0,
            radius: 0.0,
            max_radius: RIPPLE_MAX_RADIUS,
            opacity,
        });
    }
    field.advance();
    let xs: Vec<f32> = field.ripples.iter().map(|r| r.x).collect();
    assert_eq!(xs, vec![1.0, 3.0]);
}

#[test]
fn settle_spawn_threshold() {
    assert!(should_spawn_on_settle(0.0));
    assert!(should_spawn_on_settle(SETTLE_RIPPLE_CHANCE - 1e-9));
    assert!(!should_spawn_on_settle(SETTLE_RIPPLE_CHANCE));
    assert!(!should_spawn_on_settle(0.9));
}

#[test]
fn settle_spawn_rate_is_about_one_in_twenty() {
    let mut rng = StdRng::seed_from_u64(42);
    let rolls = 20_000;
    let spawned = (0..rolls)
        .filter(|_| should_spawn_on_settle(rng.gen::<f64>()))
        .count();
    let rate = spawned as f64 / rolls as f64;
    assert!(
        (rate - SETTLE_RIPPLE_CHANCE).abs() < 0.01,
        "observed rate {}",
        rate
    );
}
