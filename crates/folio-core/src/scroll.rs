//! Scroll offset to scene progress.
//!
//! Sampling is event-driven: the host calls [`ScrollSampler::sample`] from its
//! scroll listener and the camera reads [`ScrollSampler::progress`] every tick.

/// Vertical extent of the designated scene section in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRegion {
    pub top: f32,
    pub height: f32,
}

impl ScrollRegion {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Scroll range `(start, end)`; the end leaves one viewport of settle room.
    pub fn range(&self, viewport_height: f32) -> (f32, f32) {
        let start = self.top;
        let end = self.top + self.height - viewport_height;
        (start, end)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScrollSampler {
    progress: f32,
}

impl ScrollSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Recompute progress from a scroll event. Non-finite inputs leave the
    /// previous value in place.
    pub fn sample(&mut self, scroll_y: f32, region: ScrollRegion, viewport_height: f32) -> f32 {
        match scroll_progress(scroll_y, region, viewport_height) {
            Some(p) => self.progress = p,
            None => log::warn!("[scroll] ignoring non-finite sample y={scroll_y}"),
        }
        self.progress
    }
}

/// `clamp((y - start) / (end - start), 0, 1)`, or `None` for non-finite input.
pub fn scroll_progress(scroll_y: f32, region: ScrollRegion, viewport_height: f32) -> Option<f32> {
    if !(scroll_y.is_finite()
        && region.top.is_finite()
        && region.height.is_finite()
        && viewport_height.is_finite())
    {
        return None;
    }
    let (start, end) = region.range(viewport_height);
    if scroll_y <= start {
        return Some(0.0);
    }
    if scroll_y >= end {
        return Some(1.0);
    }
    Some(((scroll_y - start) / (end - start)).clamp(0.0, 1.0))
}
