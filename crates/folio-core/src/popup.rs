//! Popup visibility state machine.
//!
//! Every input, including ticks and timer callbacks, goes through
//! [`PopupController::handle`]. There is a single timer slot; scheduling
//! always cancels what is in it first.

use crate::config::{PopupConfig, PopupLayout};
use crate::picking::ScreenBounds;
use crate::timers::{TimerHost, TimerKind, TimerToken};
use crate::tracker::HoverEvent;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PopupPhase {
    Hidden,
    Entering,
    Visible,
    HidingGrace,
    HidingAnimating,
}

impl PopupPhase {
    /// Popup element is present in the page.
    pub fn is_mounted(self) -> bool {
        !matches!(self, PopupPhase::Hidden)
    }

    /// The `visible` animation class is applied.
    pub fn shows_visible_class(self) -> bool {
        matches!(self, PopupPhase::Visible | PopupPhase::HidingGrace)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PopupInput {
    SceneHover { target: String, bounds: ScreenBounds },
    SceneUnhover,
    PopupPointerEnter,
    PopupPointerLeave,
    Tick,
    TimerFired(TimerToken),
}

impl From<HoverEvent> for PopupInput {
    fn from(ev: HoverEvent) -> Self {
        match ev {
            HoverEvent::Hovered { target, bounds } => PopupInput::SceneHover { target, bounds },
            HoverEvent::Cleared => PopupInput::SceneUnhover,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: PopupPhase,
    pub to: PopupPhase,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopupPosition {
    pub left: f32,
    pub top: f32,
}

/// Render-ready projection of the controller.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupView {
    pub mounted: bool,
    pub visible: bool,
    pub position: Option<PopupPosition>,
    pub target: Option<String>,
}

/// Place the popup beside `bounds` inside a `window`-sized viewport.
///
/// Right of the footprint and vertically centred on it; flipped to the left
/// when the right side would overflow; finally clamped inside the margins,
/// below the header band. When the viewport is too small for the popup the
/// top-left margins win.
pub fn place_popup(bounds: &ScreenBounds, layout: &PopupLayout, window: Vec2) -> PopupPosition {
    let mut left = bounds.right + layout.offset;
    if left + layout.width > window.x {
        left = bounds.left - layout.width - layout.offset;
    }
    let top = bounds.center_y() - layout.height / 2.0;

    let min_left = layout.margin;
    let max_left = window.x - layout.width - layout.margin;
    let min_top = layout.header_height + layout.margin;
    let max_top = window.y - layout.height - layout.margin;
    PopupPosition {
        left: left.min(max_left).max(min_left),
        top: top.min(max_top).max(min_top),
    }
}

pub struct PopupController<H: TimerHost> {
    config: PopupConfig,
    window: Vec2,
    phase: PopupPhase,
    target: Option<String>,
    bounds: Option<ScreenBounds>,
    position: Option<PopupPosition>,
    scene_hovered: bool,
    popup_hovered: bool,
    timer: Option<TimerToken>,
    generation: u64,
    torn_down: bool,
    host: H,
}

impl<H: TimerHost> PopupController<H> {
    pub fn new(config: PopupConfig, window: Vec2, host: H) -> Self {
        Self {
            config,
            window,
            phase: PopupPhase::Hidden,
            target: None,
            bounds: None,
            position: None,
            scene_hovered: false,
            popup_hovered: false,
            timer: None,
            generation: 0,
            torn_down: false,
            host,
        }
    }

    pub fn phase(&self) -> PopupPhase {
        self.phase
    }

    /// Target whose content is bound; persists through exit and while hidden.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn position(&self) -> Option<PopupPosition> {
        self.position
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.timer
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn set_window_size(&mut self, window: Vec2) {
        if window.is_finite() {
            self.window = window;
        }
    }

    pub fn view(&self) -> PopupView {
        PopupView {
            mounted: self.phase.is_mounted(),
            visible: self.phase.shows_visible_class(),
            position: self.position,
            target: self.target.clone(),
        }
    }

    /// Single transition function. Returns the phase change, if any; a
    /// same-phase transition means the binding or position was refreshed.
    pub fn handle(&mut self, input: PopupInput) -> Option<Transition> {
        if self.torn_down {
            return None;
        }
        let from = self.phase;
        let changed = match input {
            PopupInput::SceneHover { target, bounds } => self.on_scene_hover(target, bounds),
            PopupInput::SceneUnhover => self.on_scene_unhover(),
            PopupInput::PopupPointerEnter => self.on_popup_enter(),
            PopupInput::PopupPointerLeave => self.on_popup_leave(),
            PopupInput::Tick => self.on_tick(),
            PopupInput::TimerFired(token) => self.on_timer(token),
        };
        changed.then(|| {
            log::debug!("[popup] {:?} -> {:?}", from, self.phase);
            Transition {
                from,
                to: self.phase,
            }
        })
    }

    pub fn on_hover_event(&mut self, ev: HoverEvent) -> Option<Transition> {
        self.handle(ev.into())
    }

    /// Cancel any pending timer, reset to `Hidden`, and ignore all later
    /// input including timers already in flight.
    pub fn teardown(&mut self) {
        self.cancel_timer();
        self.phase = PopupPhase::Hidden;
        self.position = None;
        self.bounds = None;
        self.scene_hovered = false;
        self.popup_hovered = false;
        self.torn_down = true;
    }

    fn on_scene_hover(&mut self, target: String, bounds: ScreenBounds) -> bool {
        self.scene_hovered = true;
        match self.phase {
            PopupPhase::Hidden => {
                self.bind(target, bounds);
                self.phase = PopupPhase::Entering;
                true
            }
            PopupPhase::Entering | PopupPhase::Visible => {
                if self.is_bound_to(&target, &bounds) {
                    return false;
                }
                self.bind(target, bounds);
                true
            }
            PopupPhase::HidingGrace | PopupPhase::HidingAnimating => {
                self.cancel_timer();
                if !self.is_bound_to(&target, &bounds) {
                    self.bind(target, bounds);
                }
                self.phase = PopupPhase::Visible;
                true
            }
        }
    }

    fn on_scene_unhover(&mut self) -> bool {
        self.scene_hovered = false;
        match self.phase {
            PopupPhase::Entering | PopupPhase::Visible if !self.popup_hovered => {
                self.start_timer(TimerKind::Grace);
                self.phase = PopupPhase::HidingGrace;
                true
            }
            _ => false,
        }
    }

    fn on_popup_enter(&mut self) -> bool {
        self.popup_hovered = true;
        self.cancel_timer();
        match self.phase {
            PopupPhase::HidingGrace | PopupPhase::HidingAnimating => {
                self.phase = PopupPhase::Visible;
                true
            }
            _ => false,
        }
    }

    fn on_popup_leave(&mut self) -> bool {
        self.popup_hovered = false;
        if self.scene_hovered {
            return false;
        }
        match self.phase {
            PopupPhase::Visible | PopupPhase::HidingGrace | PopupPhase::HidingAnimating => {
                self.start_timer(TimerKind::Grace);
                self.phase = PopupPhase::HidingGrace;
                true
            }
            _ => false,
        }
    }

    fn on_tick(&mut self) -> bool {
        if self.phase == PopupPhase::Entering {
            self.phase = PopupPhase::Visible;
            return true;
        }
        false
    }

    fn on_timer(&mut self, token: TimerToken) -> bool {
        if self.timer != Some(token) {
            log::debug!("[popup] stale timer {:?}", token);
            return false;
        }
        self.timer = None;
        match (self.phase, token.kind) {
            (PopupPhase::HidingGrace, TimerKind::Grace) => {
                self.start_timer(TimerKind::Animation);
                self.phase = PopupPhase::HidingAnimating;
                true
            }
            (PopupPhase::HidingAnimating, TimerKind::Animation) => {
                if self.scene_hovered || self.popup_hovered {
                    self.phase = PopupPhase::Visible;
                } else {
                    self.phase = PopupPhase::Hidden;
                    self.position = None;
                    self.bounds = None;
                }
                true
            }
            _ => false,
        }
    }

    fn bind(&mut self, target: String, bounds: ScreenBounds) {
        self.position = Some(place_popup(&bounds, &self.config.layout, self.window));
        self.bounds = Some(bounds);
        self.target = Some(target);
    }

    fn is_bound_to(&self, target: &str, bounds: &ScreenBounds) -> bool {
        self.position.is_some()
            && self.bounds.as_ref() == Some(bounds)
            && self
                .target
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(target))
    }

    fn start_timer(&mut self, kind: TimerKind) {
        self.cancel_timer();
        self.generation += 1;
        let token = TimerToken {
            kind,
            generation: self.generation,
        };
        let delay = match kind {
            TimerKind::Grace => self.config.grace(),
            TimerKind::Animation => self.config.animation(),
        };
        self.host.schedule(token, delay);
        self.timer = Some(token);
    }

    fn cancel_timer(&mut self) {
        if let Some(token) = self.timer.take() {
            self.host.cancel(token);
        }
    }
}
