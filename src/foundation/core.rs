pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Monotonic frame timestamp in milliseconds (the `performance.now()` clock).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct FrameTime(pub f64);

impl FrameTime {
    pub const ZERO: Self = Self(0.0);

    pub fn from_secs(secs: f64) -> Self {
        Self(secs * 1000.0)
    }

    pub fn as_millis(self) -> f64 {
        self.0
    }

    pub fn as_secs(self) -> f64 {
        self.0 / 1000.0
    }

    /// Milliseconds elapsed since `earlier`, clamped at zero.
    pub fn millis_since(self, earlier: FrameTime) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }

    pub fn secs_since(self, earlier: FrameTime) -> f64 {
        self.millis_since(earlier) / 1000.0
    }

    pub fn add_millis(self, ms: f64) -> Self {
        Self(self.0 + ms)
    }
}

/// Top-left placement of an element box inside its container, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

impl Placement {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Box whose center is `center`.
    pub fn centered_on(center: Point, element_size: f64) -> Self {
        Self {
            left: center.x - element_size / 2.0,
            top: center.y - element_size / 2.0,
        }
    }

    pub fn center(self, element_size: f64) -> Point {
        Point::new(self.left + element_size / 2.0, self.top + element_size / 2.0)
    }

    /// Whole-pixel placement. Halves round toward positive infinity, so `-11.5` becomes `-11`.
    pub fn rounded(self) -> Self {
        fn half_up(v: f64) -> f64 {
            (v + 0.5).floor()
        }
        Self {
            left: half_up(self.left),
            top: half_up(self.top),
        }
    }

    pub fn is_finite(self) -> bool {
        self.left.is_finite() && self.top.is_finite()
    }
}

/// Rounds a measured box to whole, non-negative pixels.
pub fn measured_size(width: f64, height: f64) -> Size {
    fn px(v: f64) -> f64 {
        if v.is_finite() { v.round().max(0.0) } else { 0.0 }
    }
    Size::new(px(width), px(height))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
