//! Input adapter: translates pointer, click, scroll, and resize events into
//! shared-state updates and ripple spawns.

use crate::constants::*;
use crate::dom;
use crate::ripples::{should_spawn_on_settle, RippleField};
use crate::state::EffectState;
use crate::timer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct EventWiring {
    pub section: web::Element,
    pub state: Rc<RefCell<EffectState>>,
    pub ripples: Rc<RefCell<RippleField>>,
    pub gl_canvas: Option<web::HtmlCanvasElement>,
    pub particle_canvas: Option<web::HtmlCanvasElement>,
    pub ripple_canvas: Option<web::HtmlCanvasElement>,
}

pub fn wire_event_handlers(w: EventWiring) {
    wire_pointermove(&w);
    wire_click(&w);
    wire_scroll(&w);
    wire_resize(&w);
}

// Pointer moves over the section update the raw pointer immediately; a
// ripple is only considered after a quiet period, and a newer move cancels
// the pending consideration (debounce, not throttle).
fn wire_pointermove(w: &EventWiring) {
    let state = w.state.clone();
    let ripples = w.ripples.clone();
    let pending: Rc<RefCell<Option<timer::Delay>>> = Rc::new(RefCell::new(None));

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        state.borrow_mut().pointer.set(x, y);

        let ripples = ripples.clone();
        // Replacing the slot drops (cancels) any pending spawn from an
        // earlier move.
        *pending.borrow_mut() = timer::Delay::schedule(SETTLE_DELAY_MS, move || {
            if should_spawn_on_settle(js_sys::Math::random()) {
                ripples.borrow_mut().spawn(x, y);
            }
        });
    }) as Box<dyn FnMut(_)>);
    _ = w
        .section
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

// A click bursts three ripples at the same spot, staggered by independent
// one-shot timers.
fn wire_click(w: &EventWiring) {
    let ripples = w.ripples.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        for i in 0..CLICK_RIPPLE_COUNT {
            let ripples = ripples.clone();
            timer::fire_and_forget(i * CLICK_RIPPLE_SPACING_MS, move || {
                ripples.borrow_mut().spawn(x, y);
            });
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .section
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_scroll(w: &EventWiring) {
    let state = w.state.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            state.borrow_mut().scroll_y = window.scroll_y().unwrap_or(0.0) as f32;
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}

// Resize retunes the canvas backing stores; the renderer and camera pick up
// the new sizes on the next tick. Reassigning a 2D canvas size clears its
// pixels, which the full per-frame repaint makes irrelevant.
fn wire_resize(w: &EventWiring) {
    let gl_canvas = w.gl_canvas.clone();
    let particle_canvas = w.particle_canvas.clone();
    let ripple_canvas = w.ripple_canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Some(canvas) = &gl_canvas {
            dom::sync_render_canvas_size(canvas);
        }
        if let Some(canvas) = &particle_canvas {
            dom::sync_overlay_canvas_size(canvas);
        }
        if let Some(canvas) = &ripple_canvas {
            dom::sync_overlay_canvas_size(canvas);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
