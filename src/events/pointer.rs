use super::Listener;
use crate::shared::Shared;
use std::rc::Rc;
use web_sys as web;

/// Canvas pointer tracking plus popup enter/leave.
///
/// Leaving the canvas (including onto the popup overlay) counts as a scene
/// unhover; the popup's own enter event then cancels the pending hide.
pub fn wire_pointer_handlers(
    shared: &Rc<Shared>,
    canvas: &web::HtmlCanvasElement,
    popup: Option<&web::HtmlElement>,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::new();

    let s = shared.clone();
    listeners.push(Listener::new(canvas, "pointermove", move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let t = s
            .scene
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
        s.after(t);
    })?);

    let s = shared.clone();
    listeners.push(Listener::new(canvas, "pointerleave", move |_ev: web::PointerEvent| {
        let t = s.scene.borrow_mut().on_pointer_leave();
        s.after(t);
    })?);

    if let Some(popup) = popup {
        let s = shared.clone();
        listeners.push(Listener::new(popup, "pointerenter", move |_ev: web::PointerEvent| {
            let t = s.scene.borrow_mut().on_popup_pointer_enter();
            s.after(t);
        })?);

        let s = shared.clone();
        listeners.push(Listener::new(popup, "pointerleave", move |_ev: web::PointerEvent| {
            let t = s.scene.borrow_mut().on_popup_pointer_leave();
            s.after(t);
        })?);
    }

    Ok(listeners)
}
