#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use folio_core::{Aabb, Scene};
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod api;
mod constants;
mod dom;
mod events;
mod frame;
mod markup;
mod popup_dom;
mod shared;
mod timers;

use frame::FrameLoop;
use popup_dom::PopupDom;
use shared::Shared;
use timers::WebTimers;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");
    Ok(())
}

/// Handle owned by the JS page. Dropping it (or calling `destroy`) removes all
/// listeners, stops the frame loop and cancels pending popup timers.
#[wasm_bindgen]
pub struct SceneApp {
    shared: Rc<Shared>,
    frame_loop: FrameLoop,
    listeners: Vec<events::Listener>,
    pose_callback: Rc<RefCell<Option<js_sys::Function>>>,
}

#[wasm_bindgen]
impl SceneApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SceneApp, JsValue> {
        mount().map_err(|e| {
            log::error!("[scene] mount error: {e:#}");
            JsValue::from_str(&format!("{e:#}"))
        })
    }

    /// Register an interactive object once its geometry has loaded.
    #[wasm_bindgen(js_name = registerTarget)]
    pub fn register_target(&self, name: &str, min: &[f32], max: &[f32]) -> bool {
        let (Ok(min), Ok(max)) = (<[f32; 3]>::try_from(min), <[f32; 3]>::try_from(max)) else {
            log::warn!("[scene] skipping target {name}: bounds must have 3 components");
            return false;
        };
        let bounds = Aabb::new(Vec3::from_array(min), Vec3::from_array(max));
        self.shared.scene.borrow_mut().register_target(name, bounds)
    }

    #[wasm_bindgen(js_name = setCameraIntrinsics)]
    pub fn set_camera_intrinsics(&self, fov_deg: f32, near: f32, far: f32) {
        if !(fov_deg > 0.0 && fov_deg < 180.0 && near > 0.0 && far > near) {
            log::warn!("[scene] ignoring camera intrinsics fov={fov_deg} near={near} far={far}");
            return;
        }
        let mut scene = self.shared.scene.borrow_mut();
        let camera = scene.camera_mut();
        camera.fovy_radians = fov_deg.to_radians();
        camera.znear = near;
        camera.zfar = far;
    }

    /// `callback(Float32Array[eye.x, eye.y, eye.z, look.x, look.y, look.z])`, every tick.
    #[wasm_bindgen(js_name = onPose)]
    pub fn on_pose(&self, callback: js_sys::Function) {
        *self.pose_callback.borrow_mut() = Some(callback);
    }

    pub fn progress(&self) -> f32 {
        self.shared.scene.borrow().progress()
    }

    pub fn destroy(self) {}
}

impl Drop for SceneApp {
    fn drop(&mut self) {
        self.listeners.clear();
        self.frame_loop.stop();
        self.pose_callback.borrow_mut().take();
        self.shared.teardown();
    }
}

fn mount() -> anyhow::Result<SceneApp> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;
    let config = dom::read_config(&document);

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(&config.canvas_id)
        .ok_or_else(|| anyhow!("missing #{}", config.canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", config.canvas_id, e))?;

    let popup_el = document
        .get_element_by_id(&config.popup_element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if popup_el.is_none() {
        log::warn!("[popup] missing #{}; hover popups disabled", config.popup_element_id);
    }

    let selector = config.scene_selector.clone();
    let api_base = config.api_base_url.clone();
    let viewport = dom::canvas_viewport(&canvas);
    let scene = Scene::new(config, viewport, dom::window_size(&window), WebTimers::new())
        .map_err(|e| anyhow!("config: {e}"))?;

    let shared = Rc::new(Shared::new(scene, popup_el.clone().map(PopupDom::new)));
    shared
        .scene
        .borrow_mut()
        .popup_mut()
        .host_mut()
        .bind(Rc::downgrade(&shared));

    let mut listeners = events::wire_scroll_handlers(&shared, &window, &canvas, &selector)?;
    listeners.extend(events::wire_pointer_handlers(
        &shared,
        &canvas,
        popup_el.as_ref(),
    )?);

    let pose_callback: Rc<RefCell<Option<js_sys::Function>>> = Rc::new(RefCell::new(None));
    let frame_loop = FrameLoop::new();
    {
        let shared = shared.clone();
        let pose_callback = pose_callback.clone();
        frame_loop.subscribe(move |tick| {
            let out = shared.scene.borrow_mut().frame(tick);
            if !out.transitions.is_empty() {
                shared.sync_popup();
            }
            let Some(pose) = out.pose else {
                return;
            };
            let callback = pose_callback.borrow().clone();
            if let Some(cb) = callback {
                let arr = js_sys::Float32Array::from(&pose.to_array()[..]);
                if let Err(e) = cb.call1(&JsValue::NULL, &arr) {
                    log::error!("[scene] pose callback error: {:?}", e);
                }
            }
        });
    }
    frame_loop.start();

    api::load_content(&shared, api_base);
    log::info!("[scene] mounted");

    Ok(SceneApp {
        shared,
        frame_loop,
        listeners,
        pose_callback,
    })
}
