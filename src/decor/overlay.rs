//! Keyframe layer that sits on top of the per-frame element transform.
//!
//! Each non-travel animation also carries a looping keyframe track (bob, blink, wobble,
//! spin). The track runs on the element's own cycle, offset by nothing, and composes with
//! the frame transform: translate and rotate add, scale multiplies, opacity applies as is.

use crate::animation::ease::Ease;
use crate::animation::keyframes::Keyframes;
use crate::animation::timing::cycle_progress;
use crate::foundation::core::Vec2;
use crate::model::card::ElementAnimation;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Overlay {
    pub translate: Vec2,
    pub scale: f64,
    pub rotate_deg: f64,
    pub opacity: f64,
}

impl Overlay {
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
        rotate_deg: 0.0,
        opacity: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Loop length of the keyframe track, derived from the element's cycle.
pub fn overlay_cycle(animation: ElementAnimation, cycle_secs: f64) -> f64 {
    match animation {
        ElementAnimation::Blink => cycle_secs.max(1.0),
        ElementAnimation::Pop => cycle_secs.max(0.8),
        _ => cycle_secs,
    }
}

fn track(points: &[(f64, f64)], ease: Ease) -> Keyframes {
    Keyframes::linear(points, ease)
}

/// Keyframe overlay for `animation` after `elapsed_secs` on a `cycle_secs` loop.
pub fn sample_overlay(animation: ElementAnimation, elapsed_secs: f64, cycle_secs: f64) -> Overlay {
    let t = cycle_progress(elapsed_secs, overlay_cycle(animation, cycle_secs));
    let smooth = Ease::CssEaseInOut;
    let sample = |kf: Keyframes, fallback: f64| kf.sample(t).unwrap_or(fallback);

    let mut out = Overlay::IDENTITY;
    match animation {
        ElementAnimation::Float | ElementAnimation::Bounce => {
            let y = sample(track(&[(0.0, 0.0), (0.5, -15.0), (1.0, 0.0)], smooth), 0.0);
            out.translate = Vec2::new(0.0, y);
        }
        ElementAnimation::Blink => {
            out.opacity = sample(track(&[(0.0, 1.0), (0.5, 0.2), (1.0, 1.0)], smooth), 1.0);
        }
        ElementAnimation::Pulse => {
            out.scale = sample(track(&[(0.0, 1.0), (0.5, 1.5), (1.0, 1.0)], smooth), 1.0);
        }
        ElementAnimation::Shake => {
            let x = sample(
                track(&[(0.0, 0.0), (0.25, -10.0), (0.75, 10.0), (1.0, 0.0)], smooth),
                0.0,
            );
            out.translate = Vec2::new(x, 0.0);
        }
        ElementAnimation::Pop => {
            out.scale = sample(track(&[(0.0, 0.6), (0.5, 1.15), (1.0, 1.0)], smooth), 1.0);
        }
        ElementAnimation::Spin | ElementAnimation::RotateCw => {
            out.rotate_deg = sample(track(&[(0.0, 0.0), (1.0, 360.0)], Ease::Linear), 0.0);
        }
        ElementAnimation::SpinCcw | ElementAnimation::RotateCcw => {
            out.rotate_deg = sample(track(&[(0.0, 0.0), (1.0, -360.0)], Ease::Linear), 0.0);
        }
        ElementAnimation::Travel | ElementAnimation::None => {}
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/decor/overlay.rs"]
mod tests;
