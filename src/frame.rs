//! The per-frame driver: one free-running tick that advances every animated
//! collection and issues the draw calls. Any missing handle skips only the
//! steps that depend on it; the loop itself never stops.

use crate::camera::Camera;
use crate::dom;
use crate::particles::ParticleField;
use crate::render;
use crate::ripples::RippleField;
use crate::scene::SceneState;
use crate::state::EffectState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<EffectState>>,
    pub particles: ParticleField,
    pub ripples: Rc<RefCell<RippleField>>,
    pub scene: SceneState,
    pub camera: Camera,

    pub gpu: Option<render::GpuState<'a>>,
    pub gl_canvas: Option<web::HtmlCanvasElement>,
    pub particle_layer: Option<dom::Overlay2d>,
    pub ripple_layer: Option<dom::Overlay2d>,
}

impl FrameContext<'_> {
    pub fn frame(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let (vw, vh) = dom::viewport_size(&window);

        let snapshot = {
            let mut st = self.state.borrow_mut();
            st.tick_time();
            st.pointer.smooth_step();
            *st
        };

        if let Some(layer) = &self.particle_layer {
            let w = layer.canvas.width().max(1) as f32;
            let h = layer.canvas.height().max(1) as f32;
            self.particles
                .advance(snapshot.pointer.smooth_x, snapshot.pointer.smooth_y, w, h);
            self.particles.draw(&layer.ctx, w as f64, h as f64);
        }

        if let Some(layer) = &self.ripple_layer {
            let mut ripples = self.ripples.borrow_mut();
            ripples.advance();
            ripples.draw(
                &layer.ctx,
                layer.canvas.width() as f64,
                layer.canvas.height() as f64,
            );
        }

        self.scene.advance(snapshot.time, snapshot.scroll_y);

        self.camera.aspect = vw / vh.max(1.0);
        self.camera.ease_toward_pointer(
            snapshot.pointer.smooth_x,
            snapshot.pointer.smooth_y,
            vw,
            vh,
        );

        if let (Some(gpu), Some(canvas)) = (&mut self.gpu, &self.gl_canvas) {
            gpu.resize_if_needed(canvas.width(), canvas.height());
            if let Err(e) = gpu.render(&self.scene, &self.camera) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
