use crate::constants::CONFIG_SCRIPT_ID;
use folio_core::{ScrollRegion, SceneConfig, Viewport};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_size(window: &web::Window) -> Vec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Canvas rectangle in viewport (client) pixels.
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Document-space extent of the scroll-tracked scene section.
pub fn scene_region(document: &web::Document, selector: &str) -> Option<ScrollRegion> {
    let el = document.query_selector(selector).ok().flatten()?;
    let el = el.dyn_into::<web::HtmlElement>().ok()?;
    Some(ScrollRegion::new(
        el.offset_top() as f32,
        el.offset_height() as f32,
    ))
}

/// Defaults overlaid with the page's `<script id="scene-config">` JSON, if any.
pub fn read_config(document: &web::Document) -> SceneConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
        .filter(|t| !t.trim().is_empty())
    else {
        return SceneConfig::default();
    };
    match serde_json::from_str::<SceneConfig>(&text) {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::error!("[scene] invalid config ({e}); using defaults");
                SceneConfig::default()
            }
        },
        Err(e) => {
            log::error!("[scene] malformed config JSON ({e}); using defaults");
            SceneConfig::default()
        }
    }
}
