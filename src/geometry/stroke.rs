use crate::foundation::core::Size;
use crate::model::card::BorderStyle;

/// SVG `stroke-dasharray` for a border style, or `None` for a continuous stroke.
pub fn stroke_dash_array(style: BorderStyle, width: f64) -> Option<String> {
    match style {
        BorderStyle::Dashed => Some(format!(
            "{} {}",
            (width * 3.0).max(4.0),
            (width * 1.5).max(2.0)
        )),
        BorderStyle::Dotted => Some(format!("{} {}", width.max(1.0), width.max(4.0))),
        BorderStyle::Solid | BorderStyle::Double => None,
    }
}

/// One rounded `rect` stroke of the frame, in container pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StrokeRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Corner radius measured on the stroke centerline.
    pub rx: f64,
    pub stroke_width: f64,
    pub dash_array: Option<String>,
}

/// Rects that make up the frame stroke.
///
/// Single styles draw one rect on the centerline. `double` draws an outer stroke at 55% of
/// the width and a concentric inner stroke at 35%, pulled in by 60% of the width.
pub fn frame_strokes(
    style: BorderStyle,
    width: f64,
    radius: f64,
    container: Size,
) -> Vec<StrokeRect> {
    let svg_w = container.width.max(1.0);
    let svg_h = container.height.max(1.0);
    let half = width / 2.0;
    let x = half;
    let y = half;
    let w = (svg_w - width).max(0.0);
    let h = (svg_h - width).max(0.0);
    let rx = (radius - half).max(0.0);

    if style != BorderStyle::Double {
        return vec![StrokeRect {
            x,
            y,
            width: w,
            height: h,
            rx,
            stroke_width: width,
            dash_array: stroke_dash_array(style, width),
        }];
    }

    let shrink = width * 0.6;
    vec![
        StrokeRect {
            x,
            y,
            width: w,
            height: h,
            rx,
            stroke_width: (width * 0.55).max(1.0),
            dash_array: None,
        },
        StrokeRect {
            x: x + shrink,
            y: y + shrink,
            width: (w - shrink * 2.0).max(0.0),
            height: (h - shrink * 2.0).max(0.0),
            rx: (rx - shrink).max(0.0),
            stroke_width: (width * 0.35).max(1.0),
            dash_array: None,
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/stroke.rs"]
mod tests;
