use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling requestAnimationFrame loop.
///
/// The loop calls `on_frame` once per display refresh until it is stopped or
/// dropped. Stopping cancels the pending frame request and releases the
/// callback, so no closure outlives its owner.
pub struct AnimationLoop {
    tick: TickSlot,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None::<i32>));
        let running = Rc::new(Cell::new(true));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            on_frame();
            if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
                match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => handle_tick.set(Some(id)),
                    Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut()>));

        let id = {
            let slot = tick.borrow();
            let cb = slot.as_ref().ok_or_else(|| anyhow!("frame callback missing"))?;
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow!("requestAnimationFrame: {:?}", e))?
        };
        handle.set(Some(id));

        Ok(Self {
            tick,
            handle,
            running,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&mut self) {
        self.running.set(false);
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // The callback holds a clone of `tick`; clearing the slot breaks the cycle.
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
