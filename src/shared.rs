use crate::popup_dom::PopupDom;
use crate::timers::WebTimers;
use folio_core::{Scene, TimerToken, Transition};
use std::cell::RefCell;

pub type WebScene = Scene<WebTimers>;

/// State reachable from listeners, the frame loop and timer callbacks.
pub struct Shared {
    pub scene: RefCell<WebScene>,
    pub popup_dom: RefCell<Option<PopupDom>>,
}

impl Shared {
    pub fn new(scene: WebScene, popup_dom: Option<PopupDom>) -> Self {
        Self {
            scene: RefCell::new(scene),
            popup_dom: RefCell::new(popup_dom),
        }
    }

    pub fn on_timer(&self, token: TimerToken) {
        let transition = match self.scene.try_borrow_mut() {
            Ok(mut scene) => scene.on_timer(token),
            Err(_) => {
                log::warn!("[popup] timer {:?} fired while scene busy", token);
                None
            }
        };
        if transition.is_some() {
            self.sync_popup();
        }
    }

    pub fn after(&self, transition: Option<Transition>) {
        if transition.is_some() {
            self.sync_popup();
        }
    }

    /// Push the popup view and bound content to the DOM if either changed.
    pub fn sync_popup(&self) {
        let Ok(scene) = self.scene.try_borrow() else {
            return;
        };
        if let Some(dom) = self.popup_dom.borrow_mut().as_mut() {
            dom.sync(scene.popup_view(), scene.popup_content());
        }
    }

    pub fn teardown(&self) {
        if let Ok(mut scene) = self.scene.try_borrow_mut() {
            scene.teardown();
            scene.popup_mut().host_mut().clear();
        }
        if let Some(dom) = self.popup_dom.borrow_mut().as_mut() {
            dom.hide();
        }
    }
}
