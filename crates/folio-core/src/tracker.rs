//! Pointer hit-testing against the registered interactive objects.
//!
//! The tracker remembers which target it last reported and only emits a
//! [`HoverEvent`] when that identity changes, so downstream layout runs on
//! transitions rather than every frame.

use crate::picking::{self, Aabb, ScreenBounds};
use crate::state::{Camera, Viewport};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub struct InteractiveTarget {
    pub name: String,
    pub bounds: Aabb,
}

impl InteractiveTarget {
    pub fn new(name: impl Into<String>, bounds: Aabb) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum HoverEvent {
    /// A new object is under the pointer; `bounds` is its on-screen footprint.
    Hovered { target: String, bounds: ScreenBounds },
    /// Nothing interactive is under the pointer any more.
    Cleared,
}

impl HoverEvent {
    pub fn target(&self) -> Option<&str> {
        match self {
            HoverEvent::Hovered { target, .. } => Some(target),
            HoverEvent::Cleared => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<'a> {
    pub target: &'a InteractiveTarget,
    pub distance: f32,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionTracker {
    targets: Vec<InteractiveTarget>,
    pointer: Option<Vec2>,
    last_reported: Option<String>,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target. Degenerate boxes are kept out of the registry; a name
    /// that matches an existing target (ignoring case) replaces it.
    pub fn register(&mut self, target: InteractiveTarget) -> bool {
        if !target.bounds.is_valid() || target.name.is_empty() {
            log::warn!("[scene] skipping target {:?}: degenerate bounds", target.name);
            return false;
        }
        match self
            .targets
            .iter_mut()
            .find(|t| t.name.eq_ignore_ascii_case(&target.name))
        {
            Some(existing) => *existing = target,
            None => self.targets.push(target),
        }
        true
    }

    pub fn targets(&self) -> &[InteractiveTarget] {
        &self.targets
    }

    pub fn target(&self, name: &str) -> Option<&InteractiveTarget> {
        self.targets.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn last_reported(&self) -> Option<&str> {
        self.last_reported.as_deref()
    }

    /// Nearest target under viewport pixel (`px`, `py`), if any.
    pub fn hit_test(&self, camera: &Camera, viewport: &Viewport, px: f32, py: f32) -> Option<Hit<'_>> {
        let ray = picking::screen_to_world_ray(camera, viewport, px, py)?;
        let mut best: Option<Hit<'_>> = None;
        for target in &self.targets {
            let Some(t) = picking::ray_aabb(&ray, &target.bounds) else {
                continue;
            };
            match best {
                Some(b) if t >= b.distance => {}
                _ => best = Some(Hit { target, distance: t }),
            }
        }
        best
    }

    /// Pointer moved: record it and re-test immediately.
    pub fn on_pointer_move(
        &mut self,
        camera: &Camera,
        viewport: &Viewport,
        x: f32,
        y: f32,
    ) -> Option<HoverEvent> {
        self.pointer = (x.is_finite() && y.is_finite()).then(|| Vec2::new(x, y));
        self.refresh(camera, viewport)
    }

    /// Pointer left the document; behaves like a miss.
    pub fn on_pointer_leave(&mut self) -> Option<HoverEvent> {
        self.pointer = None;
        self.report(None)
    }

    /// Re-test at the last pointer position with the current camera. Called
    /// every frame since the camera moves under a stationary pointer.
    pub fn refresh(&mut self, camera: &Camera, viewport: &Viewport) -> Option<HoverEvent> {
        let hit = self
            .pointer
            .and_then(|p| self.hit_test(camera, viewport, p.x, p.y))
            .map(|h| (h.target.name.clone(), h.target.bounds));
        let Some((name, aabb)) = hit else {
            return self.report(None);
        };
        if self.is_last_reported(&name) {
            return None;
        }
        // Footprint is only projected on a genuine change of target.
        let bounds = picking::project_bounds(camera, viewport, &aabb).unwrap_or_else(|| {
            let p = self.pointer.unwrap_or_default();
            ScreenBounds::from_edges(p.x, p.y, p.x, p.y)
        });
        self.report(Some((name, bounds)))
    }

    /// Feed an already-resolved hit (or miss) through the change filter.
    pub fn report(&mut self, hit: Option<(String, ScreenBounds)>) -> Option<HoverEvent> {
        match hit {
            Some((name, bounds)) => {
                if self.is_last_reported(&name) {
                    return None;
                }
                log::debug!("[scene] hover -> {name}");
                self.last_reported = Some(name.clone());
                Some(HoverEvent::Hovered {
                    target: name,
                    bounds,
                })
            }
            None => {
                self.last_reported.take()?;
                log::debug!("[scene] hover cleared");
                Some(HoverEvent::Cleared)
            }
        }
    }

    fn is_last_reported(&self, name: &str) -> bool {
        self.last_reported
            .as_deref()
            .is_some_and(|last| last.eq_ignore_ascii_case(name))
    }

    /// Forget the last reported target (scene teardown).
    pub fn reset(&mut self) {
        self.pointer = None;
        self.last_reported = None;
    }
}
