//! Placement of ornaments on the stroke centerline of a rectangular frame.
//!
//! All functions are pure. The walk runs clockwise from the inner top-left corner of the
//! centerline rectangle (inset by half the stroke width): top edge left to right, right edge
//! top to bottom, bottom edge right to left, left edge bottom to top.

use crate::foundation::core::{Placement, Point, Size};
use crate::foundation::math::{fract01, wrap_percent};
use crate::model::card::{BorderSide, FlowDirection};

/// The rectangle traced by the middle of the stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centerline {
    pub inset: f64,
    pub width: f64,
    pub height: f64,
}

impl Centerline {
    pub fn new(stroke_width: f64, container: Size) -> Self {
        let inset = if stroke_width.is_finite() {
            stroke_width.max(0.0) / 2.0
        } else {
            0.0
        };
        let dim = |v: f64| {
            if v.is_finite() {
                (v - inset * 2.0).max(0.0)
            } else {
                0.0
            }
        };
        Self {
            inset,
            width: dim(container.width),
            height: dim(container.height),
        }
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Point `dist` pixels along the clockwise walk.
    pub fn point_at_distance(&self, dist: f64) -> Point {
        let (x0, y0) = (self.inset, self.inset);
        let (w, h) = (self.width, self.height);
        if dist <= w {
            Point::new(x0 + dist, y0)
        } else if dist <= w + h {
            Point::new(x0 + w, y0 + (dist - w))
        } else if dist <= w + h + w {
            Point::new(x0 + w - (dist - (w + h)), y0 + h)
        } else {
            Point::new(x0, y0 + h - (dist - (w + h + w)))
        }
    }

    /// Point at `percent` of the perimeter; `percent` is wrapped into `[0, 100)`.
    pub fn point_at_percent(&self, percent: f64) -> Point {
        let dist = (wrap_percent(percent) / 100.0) * self.perimeter();
        self.point_at_distance(dist)
    }
}

/// Top-left placement of an element whose center sits on the centerline at `percent`.
///
/// A zero-area container collapses every percentage onto the inset point.
pub fn compute_perimeter_position(
    percent: f64,
    element_size: f64,
    stroke_width: f64,
    container: Size,
) -> Placement {
    let line = Centerline::new(stroke_width, container);
    Placement::centered_on(line.point_at_percent(percent), element_size)
}

/// Perimeter percentage for a full-loop travel.
///
/// `progress` and `start_offset` are fractions of a lap.
pub fn travel_percent(direction: FlowDirection, progress: f64, start_offset: f64) -> f64 {
    let lap = match direction {
        FlowDirection::TopDown => start_offset + progress,
        FlowDirection::DownTop => start_offset + (1.0 - progress),
        FlowDirection::LeftRight => start_offset + 0.25 + progress,
        FlowDirection::RightLeft => start_offset + 0.75 + (1.0 - progress),
    };
    fract01(lap) * 100.0
}

/// Direction that counts as "forward" on each side. Other directions run the side in reverse.
pub fn forward_direction(side: BorderSide) -> Option<FlowDirection> {
    match side {
        BorderSide::All => None,
        BorderSide::Top => Some(FlowDirection::LeftRight),
        BorderSide::Right => Some(FlowDirection::TopDown),
        BorderSide::Bottom => Some(FlowDirection::RightLeft),
        BorderSide::Left => Some(FlowDirection::DownTop),
    }
}

/// Placement of a travelling element, restricted to one side or looping the whole frame.
pub fn compute_side_travel_position(
    side: BorderSide,
    direction: FlowDirection,
    progress: f64,
    start_offset: f64,
    stroke_width: f64,
    container: Size,
    element_size: f64,
) -> Placement {
    let line = Centerline::new(stroke_width, container);
    let along = match forward_direction(side) {
        Some(forward) if direction == forward => fract01(start_offset + progress),
        Some(_) => fract01(start_offset + (1.0 - progress)),
        None => {
            let percent = travel_percent(direction, progress, start_offset);
            return Placement::centered_on(line.point_at_percent(percent), element_size);
        }
    };
    let Centerline {
        inset,
        width: w,
        height: h,
    } = line;

    let center = match side {
        BorderSide::Top => Point::new(inset + along * w, inset),
        BorderSide::Right => Point::new(inset + w, inset + along * h),
        BorderSide::Bottom => Point::new(inset + w - along * w, inset + h),
        BorderSide::Left | BorderSide::All => Point::new(inset, inset + h - along * h),
    };
    Placement::centered_on(center, element_size)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/perimeter.rs"]
mod tests;
