use crate::foundation::core::{Affine, Size, Vec2};

/// One CSS transform function. Translations are percentages of the element box.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case", tag = "op", content = "value")]
pub enum TransformOp {
    TranslateX(f64),
    TranslateY(f64),
    RotateY(f64),
    /// Rotation about the viewing axis, in degrees.
    Rotate(f64),
    Scale(f64),
    ScaleY(f64),
}

impl TransformOp {
    fn identity_value(self) -> f64 {
        match self {
            Self::TranslateX(_) | Self::TranslateY(_) | Self::RotateY(_) | Self::Rotate(_) => 0.0,
            Self::Scale(_) | Self::ScaleY(_) => 1.0,
        }
    }

    fn value(self) -> f64 {
        match self {
            Self::TranslateX(v)
            | Self::TranslateY(v)
            | Self::RotateY(v)
            | Self::Rotate(v)
            | Self::Scale(v)
            | Self::ScaleY(v) => v,
        }
    }

    fn with_value(self, v: f64) -> Self {
        match self {
            Self::TranslateX(_) => Self::TranslateX(v),
            Self::TranslateY(_) => Self::TranslateY(v),
            Self::RotateY(_) => Self::RotateY(v),
            Self::Rotate(_) => Self::Rotate(v),
            Self::Scale(_) => Self::Scale(v),
            Self::ScaleY(_) => Self::ScaleY(v),
        }
    }

    fn css(self) -> String {
        match self {
            Self::TranslateX(v) => format!("translateX({v}%)"),
            Self::TranslateY(v) => format!("translateY({v}%)"),
            Self::RotateY(v) => format!("rotateY({v}deg)"),
            Self::Rotate(v) => format!("rotate({v}deg)"),
            Self::Scale(v) => format!("scale({v})"),
            Self::ScaleY(v) => format!("scaleY({v})"),
        }
    }

    /// Flat 2D projection; `rotateY` foreshortens the x axis.
    fn affine(self, box_size: Size) -> Affine {
        match self {
            Self::TranslateX(v) => Affine::translate(Vec2::new(v / 100.0 * box_size.width, 0.0)),
            Self::TranslateY(v) => Affine::translate(Vec2::new(0.0, v / 100.0 * box_size.height)),
            Self::RotateY(v) => Affine::scale_non_uniform(v.to_radians().cos(), 1.0),
            Self::Rotate(v) => Affine::rotate(v.to_radians()),
            Self::Scale(v) => Affine::scale(v),
            Self::ScaleY(v) => Affine::scale_non_uniform(1.0, v),
        }
    }
}

/// An ordered CSS transform list. Empty means `none`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformDescriptor {
    pub ops: Vec<TransformOp>,
}

impl TransformDescriptor {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn new(ops: impl Into<Vec<TransformOp>>) -> Self {
        Self { ops: ops.into() }
    }

    pub fn is_identity(&self) -> bool {
        self.ops.iter().all(|op| op.value() == op.identity_value())
    }

    /// The list `t` of the way from `none` to `self`, each function from its identity value.
    pub fn partial(&self, t: f64) -> Self {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            ops: self
                .ops
                .iter()
                .map(|op| {
                    let from = op.identity_value();
                    op.with_value(from + (op.value() - from) * t)
                })
                .collect(),
        }
    }

    pub fn to_css(&self) -> String {
        if self.ops.is_empty() {
            return "none".to_string();
        }
        self.ops
            .iter()
            .map(|op| op.css())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 2D matrix for a box of `box_size`, about the box center.
    pub fn to_affine(&self, box_size: Size) -> Affine {
        let center = Vec2::new(box_size.width / 2.0, box_size.height / 2.0);
        let body = self
            .ops
            .iter()
            .fold(Affine::IDENTITY, |acc, op| acc * op.affine(box_size));
        Affine::translate(center) * body * Affine::translate(-center)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/transform.rs"]
mod tests;
