use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handle to a running requestAnimationFrame loop.
///
/// Each renderer owns exactly one of these for its mounted lifetime.
/// Dropping the handle cancels the pending callback, so a detached loop can
/// never fire against a disposed drawing surface.
pub struct RafLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    // Keeps the tick closure alive for as long as the loop may fire.
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafLoop {
    /// Cancel the pending callback. Idempotent: the id is taken on the first
    /// call, so repeated cancels (or cancel followed by drop) are no-ops.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Schedule `frame` once per animation frame until it returns `false`.
///
/// Ambient loops (particle field, orb) return `true` forever; time-boxed
/// animations return `false` after drawing their terminal state and the loop
/// simply stops rescheduling.
pub fn start_loop(mut frame: impl FnMut() -> bool + 'static) -> RafLoop {
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_in_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_in_tick.set(None);
        if !frame() {
            return;
        }
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_in_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }
    RafLoop {
        raf_id,
        _tick: tick,
    }
}
