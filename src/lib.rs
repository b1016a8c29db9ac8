#![cfg(target_arch = "wasm32")]
use crate::camera::Camera;
use crate::constants::*;
use crate::particles::ParticleField;
use crate::ripples::RippleField;
use crate::scene::SceneState;
use crate::state::EffectState;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod mesh;
mod particles;
mod render;
mod ripples;
mod scene;
mod state;
mod timer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("immersive section starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The effect is opt-in: without its root section the page stays untouched.
    let Some(section) = document.get_element_by_id(SECTION_ID) else {
        log::info!("#{} not present; effect disabled", SECTION_ID);
        return Ok(());
    };

    // Each layer is optional; a missing canvas just disables that layer.
    let gl_canvas = dom::canvas_by_id(&document, RENDER_CANVAS_ID);
    let particle_layer = dom::overlay_layer(&document, PARTICLE_CANVAS_ID);
    let ripple_layer = dom::overlay_layer(&document, RIPPLE_CANVAS_ID);

    if let Some(canvas) = &gl_canvas {
        dom::sync_render_canvas_size(canvas);
    }
    if let Some(layer) = &particle_layer {
        dom::sync_overlay_canvas_size(&layer.canvas);
    }
    if let Some(layer) = &ripple_layer {
        dom::sync_overlay_canvas_size(&layer.canvas);
    }

    let (vw, vh) = dom::viewport_size(&window);
    let mut rng = StdRng::from_entropy();

    let state = Rc::new(RefCell::new(EffectState::default()));
    let ripples = Rc::new(RefCell::new(RippleField::new()));
    let particles = ParticleField::new(vw, vh, &mut rng);
    let scene = SceneState::new(&mut rng);
    let camera = Camera::new(vw / vh.max(1.0));
    log::info!(
        "[scene] particles={} squares={} gl={} overlays={}/{}",
        particles.len(),
        scene.squares.len(),
        gl_canvas.is_some(),
        particle_layer.is_some(),
        ripple_layer.is_some()
    );

    let gpu = match &gl_canvas {
        Some(canvas) => frame::init_gpu(canvas).await,
        None => None,
    };

    events::wire_event_handlers(events::EventWiring {
        section,
        state: state.clone(),
        ripples: ripples.clone(),
        gl_canvas: gl_canvas.clone(),
        particle_canvas: particle_layer.as_ref().map(|l| l.canvas.clone()),
        ripple_canvas: ripple_layer.as_ref().map(|l| l.canvas.clone()),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        particles,
        ripples,
        scene,
        camera,
        gpu,
        gl_canvas,
        particle_layer,
        ripple_layer,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
