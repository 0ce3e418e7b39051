use super::Listener;
use crate::dom;
use crate::shared::Shared;
use std::rc::Rc;
use web_sys as web;

/// Read scroll offset and section geometry and feed the sampler.
pub fn sample_scroll(shared: &Shared, selector: &str) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(region) = dom::scene_region(&document, selector) else {
        log::warn!("[scroll] no element matches {selector}");
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(f64::NAN) as f32;
    let viewport_h = dom::window_size(&window).y;
    shared.scene.borrow_mut().on_scroll(scroll_y, region, viewport_h);
}

fn sync_viewport(shared: &Shared, canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let viewport = dom::canvas_viewport(canvas);
    shared
        .scene
        .borrow_mut()
        .set_viewport(viewport, dom::window_size(&window));
}

/// Scroll drives progress; both scroll and resize refresh the canvas rect,
/// which the tracker needs to map client pixels onto the render surface.
pub fn wire_scroll_handlers(
    shared: &Rc<Shared>,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    selector: &str,
) -> anyhow::Result<Vec<Listener>> {
    sync_viewport(shared, canvas);
    sample_scroll(shared, selector);

    let mut listeners = Vec::new();

    let s = shared.clone();
    let sel = selector.to_string();
    let c = canvas.clone();
    listeners.push(Listener::new(window, "scroll", move |_ev: web::Event| {
        sync_viewport(&s, &c);
        sample_scroll(&s, &sel);
    })?);

    let s = shared.clone();
    let sel = selector.to_string();
    let c = canvas.clone();
    listeners.push(Listener::new(window, "resize", move |_ev: web::Event| {
        sync_viewport(&s, &c);
        sample_scroll(&s, &sel);
    })?);

    Ok(listeners)
}
