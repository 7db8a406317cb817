use std::f64::consts::TAU;

use crate::animation::timing::{cycle_duration, cycle_progress};
use crate::decor::overlay::{Overlay, sample_overlay};
use crate::foundation::core::{Placement, Size};
use crate::geometry::perimeter::{compute_perimeter_position, compute_side_travel_position};
use crate::model::card::{DecorativeElement, ElementAnimation};

pub const HOVER_SCALE: f64 = 1.4;
/// Degrees per second a travelling element spins while it moves.
pub const TRAVEL_SPIN_DEG_PER_SEC: f64 = 60.0;

/// Shared per-frame inputs for every element of one container.
#[derive(Clone, Copy, Debug)]
pub struct FrameInputs<'a> {
    pub container: Size,
    /// Stroke width used for placement (never zero).
    pub stroke_width: f64,
    pub hovered: Option<&'a str>,
    pub overlays: bool,
}

/// Everything needed to draw one ornament for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementFrame {
    pub placement: Placement,
    pub size: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    pub overlay: Overlay,
    pub hovered: bool,
}

impl ElementFrame {
    /// Glyph size inside the element box.
    pub fn font_size(&self) -> f64 {
        (self.size * 0.6).max(10.0)
    }

    /// Scale after composing the keyframe layer.
    pub fn total_scale(&self) -> f64 {
        self.scale * self.overlay.scale
    }

    pub fn total_rotation_deg(&self) -> f64 {
        self.rotation_deg + self.overlay.rotate_deg
    }

    /// CSS `transform` value, as it would be set on the element box.
    pub fn css_transform(&self) -> String {
        format!(
            "translateZ(0) scale({}) rotate({}deg)",
            self.scale, self.rotation_deg
        )
    }
}

/// Pulse/bounce/... scale at `elapsed_secs`; hover overrides with [`HOVER_SCALE`].
pub fn element_scale(
    animation: ElementAnimation,
    elapsed_secs: f64,
    cycle_secs: f64,
    hovered: bool,
) -> f64 {
    if hovered {
        return HOVER_SCALE;
    }
    let p = if cycle_secs > 0.0 {
        elapsed_secs / cycle_secs * TAU
    } else {
        0.0
    };
    match animation {
        ElementAnimation::Pulse => 1.0 + 0.15 * (p * 2.0).sin(),
        ElementAnimation::Bounce => 1.0 + 0.2 * (p * 4.0).sin().abs(),
        ElementAnimation::Float => 1.0 + 0.08 * p.sin(),
        ElementAnimation::Blink => 0.8 + 0.4 * (p * 8.0).sin(),
        ElementAnimation::Pop => 0.9 + 0.3 * (p * 6.0).sin().abs(),
        _ => 1.0,
    }
}

pub fn element_rotation(animation: ElementAnimation, elapsed_secs: f64) -> f64 {
    match animation {
        ElementAnimation::Travel => elapsed_secs * TRAVEL_SPIN_DEG_PER_SEC,
        _ => 0.0,
    }
}

/// Placement of `element` on the frame after `elapsed_secs`.
///
/// Travelling elements move along the whole loop or one side; everything else sits at its
/// perimeter percentage.
pub fn element_placement(
    element: &DecorativeElement,
    elapsed_secs: f64,
    inputs: &FrameInputs<'_>,
) -> Placement {
    let size = element.size_px();
    let exact = if element.animation != ElementAnimation::Travel {
        compute_perimeter_position(
            element.start_percent(),
            size,
            inputs.stroke_width,
            inputs.container,
        )
    } else {
        let progress = cycle_progress(elapsed_secs, cycle_duration(element));
        compute_side_travel_position(
            element.border_side,
            element.flow_direction,
            progress,
            element.start_percent() / 100.0,
            inputs.stroke_width,
            inputs.container,
            size,
        )
    };
    exact.rounded()
}

/// Full per-frame state of one element. Hover changes scale only, never position.
pub fn compute_element_frame(
    element: &DecorativeElement,
    elapsed_secs: f64,
    inputs: &FrameInputs<'_>,
) -> ElementFrame {
    let cycle = cycle_duration(element);
    let hovered = inputs.hovered == Some(element.id.as_str());
    let overlay = if inputs.overlays {
        sample_overlay(element.animation, elapsed_secs, cycle)
    } else {
        Overlay::IDENTITY
    };
    ElementFrame {
        placement: element_placement(element, elapsed_secs, inputs),
        size: element.size_px(),
        scale: element_scale(element.animation, elapsed_secs, cycle, hovered),
        rotation_deg: element_rotation(element.animation, elapsed_secs),
        overlay,
        hovered,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/decor/renderer.rs"]
mod tests;
