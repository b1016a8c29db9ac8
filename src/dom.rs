use crate::constants::DEVICE_PIXEL_RATIO_CAP;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport size in CSS pixels, clamped to at least 1x1.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w.max(1.0) as f32, h.max(1.0) as f32)
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// A 2D overlay canvas plus its drawing context.
#[derive(Clone)]
pub struct Overlay2d {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

pub fn overlay_layer(document: &web::Document, id: &str) -> Option<Overlay2d> {
    let canvas = canvas_by_id(document, id)?;
    let ctx = context_2d(&canvas)?;
    Some(Overlay2d { canvas, ctx })
}

/// Size the render canvas backing store to the viewport, scaled by the
/// device pixel ratio capped at 2x.
pub fn sync_render_canvas_size(canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let dpr = window.device_pixel_ratio().min(DEVICE_PIXEL_RATIO_CAP);
        let (w, h) = viewport_size(&window);
        canvas.set_width(((w as f64 * dpr) as u32).max(1));
        canvas.set_height(((h as f64 * dpr) as u32).max(1));
    }
}

/// Size a 2D overlay canvas backing store to the viewport in CSS pixels.
/// Assigning width/height clears the canvas; the next frame repaints anyway.
pub fn sync_overlay_canvas_size(canvas: &web::HtmlCanvasElement) {
    if let Some(window) = web::window() {
        let (w, h) = viewport_size(&window);
        canvas.set_width((w as u32).max(1));
        canvas.set_height((h as u32).max(1));
    }
}
