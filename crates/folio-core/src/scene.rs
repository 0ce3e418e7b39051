//! One explorable scene: scroll sampler, camera choreographer, interaction
//! tracker and popup controller wired in the order a frame needs them.
//!
//! Within [`Scene::frame`] the camera moves first, then the tracker re-tests
//! under the new camera, then the popup consumes the result and advances an
//! entry animation that was already pending when the frame began.

use crate::choreographer::CameraChoreographer;
use crate::config::{ConfigError, SceneConfig};
use crate::content::{ContentLibrary, PopupContent};
use crate::frame::Tick;
use crate::picking::Aabb;
use crate::popup::{PopupController, PopupInput, PopupPhase, PopupView, Transition};
use crate::scroll::{ScrollRegion, ScrollSampler};
use crate::state::{Camera, CameraPose, Viewport};
use crate::timers::{TimerHost, TimerToken};
use crate::tracker::{HoverEvent, InteractionTracker, InteractiveTarget};
use glam::Vec2;

/// What the host needs after each tick.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    pub pose: Option<CameraPose>,
    pub hover: Option<HoverEvent>,
    pub transitions: Vec<Transition>,
}

pub struct Scene<H: TimerHost> {
    camera: Camera,
    viewport: Viewport,
    sampler: ScrollSampler,
    choreographer: CameraChoreographer,
    tracker: InteractionTracker,
    popup: PopupController<H>,
    content: ContentLibrary,
    torn_down: bool,
}

impl<H: TimerHost> Scene<H> {
    pub fn new(config: SceneConfig, viewport: Viewport, window: Vec2, timers: H) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut camera = Camera::new(config.camera.fov_deg, config.camera.near, config.camera.far);
        if viewport.is_usable() {
            camera.aspect = viewport.aspect();
        }
        let choreographer = CameraChoreographer::new(config.waypoints.iter().cloned());
        if let Some(pose) = choreographer.pose(0.0) {
            camera.apply_pose(&pose);
        }
        log::info!(
            "[scene] ready: {} waypoints, grace={}ms animation={}ms",
            choreographer.waypoints().len(),
            config.popup.grace_ms,
            config.popup.animation_ms
        );
        Ok(Self {
            camera,
            viewport,
            sampler: ScrollSampler::new(),
            choreographer,
            tracker: InteractionTracker::new(),
            popup: PopupController::new(config.popup, window, timers),
            content: ContentLibrary::new(config.resume_url),
            torn_down: false,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn progress(&self) -> f32 {
        self.sampler.progress()
    }

    pub fn tracker(&self) -> &InteractionTracker {
        &self.tracker
    }

    pub fn popup(&self) -> &PopupController<H> {
        &self.popup
    }

    pub fn popup_mut(&mut self) -> &mut PopupController<H> {
        &mut self.popup
    }

    pub fn content(&self) -> &ContentLibrary {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut ContentLibrary {
        &mut self.content
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn register_target(&mut self, name: &str, bounds: Aabb) -> bool {
        self.tracker.register(InteractiveTarget::new(name, bounds))
    }

    pub fn set_viewport(&mut self, viewport: Viewport, window: Vec2) {
        if !viewport.is_usable() {
            log::warn!("[scene] ignoring unusable viewport {:?}", viewport);
            return;
        }
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
        self.popup.set_window_size(window);
    }

    pub fn on_scroll(&mut self, scroll_y: f32, region: ScrollRegion, viewport_height: f32) -> f32 {
        if self.torn_down {
            return self.sampler.progress();
        }
        self.sampler.sample(scroll_y, region, viewport_height)
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<Transition> {
        if self.torn_down {
            return None;
        }
        let ev = self.tracker.on_pointer_move(&self.camera, &self.viewport, x, y)?;
        self.popup.on_hover_event(ev)
    }

    pub fn on_pointer_leave(&mut self) -> Option<Transition> {
        let ev = self.tracker.on_pointer_leave()?;
        self.popup.on_hover_event(ev)
    }

    pub fn on_popup_pointer_enter(&mut self) -> Option<Transition> {
        self.popup.handle(PopupInput::PopupPointerEnter)
    }

    pub fn on_popup_pointer_leave(&mut self) -> Option<Transition> {
        self.popup.handle(PopupInput::PopupPointerLeave)
    }

    pub fn on_timer(&mut self, token: TimerToken) -> Option<Transition> {
        self.popup.handle(PopupInput::TimerFired(token))
    }

    pub fn frame(&mut self, tick: &Tick) -> FrameOutput {
        if self.torn_down {
            return FrameOutput {
                pose: None,
                hover: None,
                transitions: Vec::new(),
            };
        }
        let pose = self.choreographer.pose(self.sampler.progress());
        if let Some(p) = &pose {
            self.camera.apply_pose(p);
        }
        // A popup mounted by this frame's hover waits for the next tick to show.
        let entering = self.popup.phase() == PopupPhase::Entering;
        let hover = self.tracker.refresh(&self.camera, &self.viewport);
        let mut transitions = Vec::new();
        if let Some(ev) = hover.clone() {
            transitions.extend(self.popup.on_hover_event(ev));
        }
        if entering {
            transitions.extend(self.popup.handle(PopupInput::Tick));
        }
        if tick.index % 600 == 0 {
            log::debug!("[scene] tick {} progress={:.3}", tick.index, self.sampler.progress());
        }
        FrameOutput {
            pose,
            hover,
            transitions,
        }
    }

    pub fn popup_view(&self) -> PopupView {
        self.popup.view()
    }

    /// Content for the currently bound popup target.
    pub fn popup_content(&self) -> Option<PopupContent> {
        self.popup.target().and_then(|t| self.content.content_for(t))
    }

    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.popup.teardown();
        self.tracker.reset();
        self.torn_down = true;
        log::info!("[scene] torn down");
    }
}
