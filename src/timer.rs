//! Cancellable delays over the host's timer queue.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A pending delayed action. Dropping the handle cancels the timer, so
/// replacing the handle in a slot is exactly the debounce "clear previous
/// timeout" step. Cancelling an already-fired timer is a harmless no-op.
pub struct Delay {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Delay {
    pub fn schedule(delay_ms: i32, mut action: impl FnMut() + 'static) -> Option<Delay> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(move || action()) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Delay {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Delay {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}

/// One-shot timer with no cancellation handle; the closure frees itself
/// after firing.
pub fn fire_and_forget(delay_ms: i32, action: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(action);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}
