use crate::foundation::core::Size;
use crate::geometry::stroke::{StrokeRect, frame_strokes};
use crate::model::card::BorderSettings;

pub const GRADIENT_ID: &str = "border-gradient";

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum StrokePaint {
    Solid { color: String },
    /// Horizontal linear gradient from `from` (left) to `to` (right).
    Gradient { id: String, from: String, to: String },
}

impl StrokePaint {
    /// Value of the SVG `stroke` attribute.
    pub fn stroke_attr(&self) -> String {
        match self {
            Self::Solid { color } => color.clone(),
            Self::Gradient { id, .. } => format!("url(#{id})"),
        }
    }
}

/// Stroke layer of the frame for one container size.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BorderFrame {
    /// SVG viewport; each side at least 1px.
    pub view_box: Size,
    pub paint: StrokePaint,
    pub rects: Vec<StrokeRect>,
}

pub fn stroke_paint(settings: &BorderSettings) -> StrokePaint {
    match settings.secondary_color.as_deref() {
        Some(to) if settings.has_gradient() => StrokePaint::Gradient {
            id: GRADIENT_ID.to_string(),
            from: settings.primary_color.clone(),
            to: to.to_string(),
        },
        _ => StrokePaint::Solid {
            color: settings.primary_color.clone(),
        },
    }
}

/// The stroke layer, or `None` while disabled or before the container has a size.
pub fn border_frame(settings: &BorderSettings, container: Size) -> Option<BorderFrame> {
    if !settings.enabled || container.width <= 0.0 || container.height <= 0.0 {
        return None;
    }
    let width = settings.stroke_width();
    let radius = if settings.radius.is_finite() {
        settings.radius.max(0.0)
    } else {
        0.0
    };
    Some(BorderFrame {
        view_box: Size::new(container.width.max(1.0), container.height.max(1.0)),
        paint: stroke_paint(settings),
        rects: frame_strokes(settings.style, width, radius, container),
    })
}

/// Inner padding between the frame and the card content.
pub fn content_padding(settings: &BorderSettings) -> f64 {
    (settings.stroke_width() + 16.0).max(16.0)
}

#[cfg(test)]
#[path = "../../tests/unit/border/frame.rs"]
mod tests;
