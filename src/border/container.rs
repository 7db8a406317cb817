use std::collections::{BTreeMap, BTreeSet};

use crate::animation::scheduler::{FrameTask, LoopControl};
use crate::animation::timing::TimingState;
use crate::border::frame::{BorderFrame, border_frame, content_padding};
use crate::border::resize::ResizeObserver;
use crate::decor::renderer::{ElementFrame, FrameInputs, compute_element_frame};
use crate::foundation::core::{FrameTime, Size};
use crate::foundation::error::CardResult;
use crate::model::card::{BorderSettings, DecorativeElement, ElementKind};

/// Per-element state of the latest frame, keyed by element id.
pub type FrameState = BTreeMap<String, ElementFrame>;

/// Frame around the card content and the ornaments animated along it.
///
/// The container is the single writer of its timing map and hover value. Each tick computes
/// a whole new [`FrameState`] and swaps it in, so readers never see a half-updated frame.
#[derive(Clone, Debug)]
pub struct BorderContainer {
    settings: BorderSettings,
    timing: TimingState,
    resize: ResizeObserver,
    hovered: Option<String>,
    failed_images: BTreeSet<String>,
    frames: FrameState,
    overlays: bool,
}

impl BorderContainer {
    pub fn new(settings: BorderSettings, resize_debounce_ms: f64, overlays: bool) -> Self {
        Self {
            settings,
            timing: TimingState::new(),
            resize: ResizeObserver::new(resize_debounce_ms),
            hovered: None,
            failed_images: BTreeSet::new(),
            frames: FrameState::new(),
            overlays,
        }
    }

    pub fn settings(&self) -> &BorderSettings {
        &self.settings
    }

    /// Swap in new settings. Ids that survive keep their animation start time.
    pub fn set_settings(&mut self, settings: BorderSettings, now: FrameTime) {
        self.settings = settings;
        let ids: BTreeSet<&str> = self
            .settings
            .decorative_elements
            .iter()
            .map(|el| el.id.as_str())
            .collect();
        self.failed_images.retain(|id| ids.contains(id.as_str()));
        self.frames.retain(|id, _| ids.contains(id.as_str()));
        if self.hovered.as_deref().is_some_and(|id| !ids.contains(id)) {
            self.hovered = None;
        }
        if self.wants_frames() {
            self.timing.sync(ids, now);
        } else {
            self.clear_animation();
        }
    }

    /// Elements that are drawn: none while the border is disabled.
    pub fn elements(&self) -> &[DecorativeElement] {
        if self.settings.enabled {
            &self.settings.decorative_elements
        } else {
            &[]
        }
    }

    /// Whether a frame loop should be running for this container.
    pub fn wants_frames(&self) -> bool {
        !self.elements().is_empty()
    }

    pub fn size(&self) -> Size {
        self.resize.size()
    }

    pub fn observe_size<E>(&mut self, measurement: Result<Size, E>, now: FrameTime) -> bool
    where
        E: std::fmt::Display,
    {
        self.resize.observe(measurement, now)
    }

    pub fn poll_resize(&mut self, now: FrameTime) -> bool {
        self.resize.poll(now)
    }

    pub fn resize_pending(&self) -> bool {
        self.resize.has_pending()
    }

    /// Last write wins; entering a new element replaces the previous hover.
    pub fn pointer_enter(&mut self, id: &str) {
        if self.elements().iter().any(|el| el.id == id) {
            self.hovered = Some(id.to_string());
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Hide an image ornament whose source failed to load.
    pub fn mark_image_failed(&mut self, id: &str) {
        let is_image = self
            .settings
            .decorative_elements
            .iter()
            .any(|el| el.id == id && el.kind == ElementKind::Image);
        if is_image {
            tracing::debug!(id, "decorative image failed to load; hiding it");
            self.failed_images.insert(id.to_string());
        }
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.failed_images.contains(id)
    }

    pub fn frames(&self) -> &FrameState {
        &self.frames
    }

    pub fn frame_for(&self, id: &str) -> Option<&ElementFrame> {
        self.frames.get(id)
    }

    pub fn timing(&self) -> &TimingState {
        &self.timing
    }

    pub fn border_frame(&self) -> Option<BorderFrame> {
        border_frame(&self.settings, self.size())
    }

    pub fn content_padding(&self) -> f64 {
        content_padding(&self.settings)
    }

    /// Compute every element's frame at `now` without committing it.
    pub fn compute_frames(&self, now: FrameTime) -> FrameState {
        let inputs = FrameInputs {
            container: self.size(),
            stroke_width: self.settings.geometry_width(),
            hovered: self.hovered(),
            overlays: self.overlays,
        };
        self.elements()
            .iter()
            .map(|el| {
                let elapsed = self.timing.elapsed_secs(&el.id, now);
                (el.id.clone(), compute_element_frame(el, elapsed, &inputs))
            })
            .collect()
    }

    fn clear_animation(&mut self) {
        self.timing.clear();
        self.frames.clear();
    }
}

impl FrameTask for BorderContainer {
    fn tick(&mut self, now: FrameTime) -> CardResult<LoopControl> {
        self.poll_resize(now);
        if !self.wants_frames() {
            self.clear_animation();
            return Ok(LoopControl::Stop);
        }
        let ids: Vec<&str> = self
            .settings
            .decorative_elements
            .iter()
            .map(|el| el.id.as_str())
            .collect();
        self.timing.sync(ids, now);
        self.frames = self.compute_frames(now);
        Ok(LoopControl::Continue)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/border/container.rs"]
mod tests;
