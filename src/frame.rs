use folio_core::{FrameClock, LoopControl, StopAction, SubscriptionId, Tick, TickEnd};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopInner {
    clock: RefCell<FrameClock>,
    handle: Cell<Option<i32>>,
    control: Cell<LoopControl>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopInner {
    fn control<R>(&self, f: impl FnOnce(&mut LoopControl) -> R) -> R {
        let mut ctl = self.control.get();
        let out = f(&mut ctl);
        self.control.set(ctl);
        out
    }

    /// Drop every subscriber and the rAF closure. wasm-bindgen defers freeing
    /// a closure dropped during its own call until that call returns.
    fn release(&self) {
        self.clock.borrow_mut().clear();
        drop(self.callback.borrow_mut().take());
        log::info!("[scene] frame loop stopped");
    }
}

/// `requestAnimationFrame` loop driving a [`FrameClock`]. Stopping cancels the
/// pending frame and drops every subscriber; a stop issued by a subscriber
/// takes effect when its tick returns.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(LoopInner {
                clock: RefCell::new(FrameClock::new()),
                handle: Cell::new(None),
                control: Cell::new(LoopControl::default()),
                callback: RefCell::new(None),
            }),
        }
    }

    pub fn subscribe(&self, callback: impl FnMut(&Tick) + 'static) -> SubscriptionId {
        self.inner.clock.borrow_mut().subscribe(callback)
    }

    pub fn start(&self) {
        if !self.inner.control(|c| c.start()) {
            return;
        }
        if self.inner.callback.borrow().is_none() {
            let weak: Weak<LoopInner> = Rc::downgrade(&self.inner);
            let closure = Closure::wrap(Box::new(move |_ts: f64| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if !inner.control(|c| c.begin_tick()) {
                    return;
                }
                inner.handle.set(None);
                inner.clock.borrow_mut().tick(Instant::now());
                match inner.control(|c| c.end_tick()) {
                    TickEnd::Continue => request_frame(&inner),
                    TickEnd::Release => inner.release(),
                    TickEnd::Idle => {}
                }
            }) as Box<dyn FnMut(f64)>);
            *self.inner.callback.borrow_mut() = Some(closure);
        }
        if !self.inner.control.get().in_tick() {
            request_frame(&self.inner);
        }
    }

    pub fn stop(&self) {
        let action = self.inner.control(|c| c.stop());
        if action == StopAction::None {
            return;
        }
        if let (Some(id), Some(w)) = (self.inner.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        if action == StopAction::ReleaseNow {
            self.inner.release();
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(inner: &LoopInner) {
    let Some(w) = web::window() else {
        return;
    };
    let callback = inner.callback.borrow();
    let Some(cb) = callback.as_ref() else {
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => inner.handle.set(Some(id)),
        Err(e) => log::error!("[scene] requestAnimationFrame failed: {:?}", e),
    }
}
