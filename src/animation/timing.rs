use std::collections::BTreeMap;

use crate::foundation::core::FrameTime;
use crate::foundation::math::fract01;
use crate::model::card::{DecorativeElement, ElementAnimation};

/// Seconds per animation cycle: the element's override (or the type default), floored.
pub fn cycle_duration(element: &DecorativeElement) -> f64 {
    let (floor, default) = match element.animation {
        ElementAnimation::Travel => (2.0, 6.0),
        ElementAnimation::RotateCw | ElementAnimation::RotateCcw | ElementAnimation::Spin => {
            (1.0, 4.0)
        }
        ElementAnimation::Float => (1.0, 3.0),
        ElementAnimation::Blink => (0.5, 2.0),
        ElementAnimation::Pulse => (0.8, 1.5),
        ElementAnimation::Bounce => (1.0, 2.0),
        ElementAnimation::Shake => (0.3, 0.5),
        ElementAnimation::Pop => (0.5, 1.2),
        ElementAnimation::SpinCcw | ElementAnimation::None => (1.0, 3.0),
    };
    let speed = element.speed_override().unwrap_or(default);
    speed.max(floor)
}

/// Per-element animation start times.
///
/// An id is stamped the first frame it is seen and keeps that stamp for as long as it stays
/// in the element list. Ids that disappear are forgotten, so re-adding one restarts it.
#[derive(Clone, Debug, Default)]
pub struct TimingState {
    starts: BTreeMap<String, FrameTime>,
}

impl TimingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync<'a, I>(&mut self, ids: I, now: FrameTime)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut live = BTreeMap::new();
        for id in ids {
            let start = self.starts.get(id).copied().unwrap_or(now);
            live.insert(id.to_string(), start);
        }
        self.starts = live;
    }

    pub fn clear(&mut self) {
        self.starts.clear();
    }

    pub fn start_of(&self, id: &str) -> Option<FrameTime> {
        self.starts.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Seconds since the element started; unknown ids count from `now` (zero).
    pub fn elapsed_secs(&self, id: &str, now: FrameTime) -> f64 {
        self.start_of(id).map_or(0.0, |start| now.secs_since(start))
    }
}

/// Fraction of the current cycle in `[0, 1)`.
pub fn cycle_progress(elapsed_secs: f64, cycle_secs: f64) -> f64 {
    if cycle_secs <= 0.0 || !cycle_secs.is_finite() {
        return 0.0;
    }
    fract01(elapsed_secs / cycle_secs)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
