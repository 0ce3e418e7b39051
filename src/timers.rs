use crate::shared::Shared;
use fnv::FnvHashMap;
use folio_core::{TimerHost, TimerToken};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setTimeout`-backed timers that call back into the shared scene.
///
/// A fired closure cannot be dropped while it runs, so its token is parked in
/// `spent` after the callback returns and reaped on the next schedule/cancel.
pub struct WebTimers {
    owner: Weak<Shared>,
    pending: FnvHashMap<TimerToken, (i32, Closure<dyn FnMut()>)>,
    spent: Rc<RefCell<Vec<TimerToken>>>,
}

impl WebTimers {
    pub fn new() -> Self {
        Self {
            owner: Weak::new(),
            pending: FnvHashMap::default(),
            spent: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn bind(&mut self, owner: Weak<Shared>) {
        self.owner = owner;
    }

    fn reap(&mut self) {
        for token in self.spent.borrow_mut().drain(..) {
            self.pending.remove(&token);
        }
    }

    pub fn clear(&mut self) {
        self.reap();
        if let Some(w) = web::window() {
            for (_, (id, _)) in self.pending.drain() {
                w.clear_timeout_with_handle(id);
            }
        }
        self.pending.clear();
    }
}

impl TimerHost for WebTimers {
    fn schedule(&mut self, token: TimerToken, delay: Duration) {
        self.reap();
        let Some(w) = web::window() else {
            return;
        };
        let owner = self.owner.clone();
        let spent = self.spent.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(shared) = owner.upgrade() {
                shared.on_timer(token);
            }
            spent.borrow_mut().push(token);
        }) as Box<dyn FnMut()>);
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        ) {
            Ok(id) => {
                self.pending.insert(token, (id, closure));
            }
            Err(e) => log::error!("[popup] setTimeout failed: {:?}", e),
        }
    }

    fn cancel(&mut self, token: TimerToken) {
        self.reap();
        if let Some((id, _closure)) = self.pending.remove(&token) {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(id);
            }
        }
    }
}

impl Drop for WebTimers {
    fn drop(&mut self) {
        self.clear();
    }
}
