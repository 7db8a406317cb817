//! One-shot reveal: a cover sits over the card until the first click, then plays its exit
//! transition and stays gone.

use crate::animation::ease::Ease;
use crate::animation::scheduler::{FrameTask, LoopControl};
use crate::foundation::core::FrameTime;
use crate::foundation::error::CardResult;
use crate::model::card::{
    BackgroundAnimation, BackgroundSettings, CoverBackground, CoverKind, GradientSpec,
    PatternSpec, RevealType,
};
use crate::reveal::transform::{TransformDescriptor, TransformOp};

pub const REVEAL_TRANSITION_MS: f64 = 1000.0;
pub const REVEAL_HINT_LABEL: &str = "Click to reveal the greeting →";

const DEFAULT_COVER_COLOR: &str = "#7c3aed";
const DEFAULT_COVER_GRADIENT: [&str; 2] = ["#7c3aed", "#e23670"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealState {
    #[default]
    Covered,
    Revealed,
}

/// Final transform of the cover for `variant` in `state`.
pub fn transform_for(variant: RevealType, state: RevealState) -> TransformDescriptor {
    use TransformOp::*;
    if state == RevealState::Covered {
        return TransformDescriptor::identity();
    }
    let ops: Vec<TransformOp> = match variant {
        RevealType::Flip => vec![RotateY(180.0), Scale(0.8)],
        RevealType::SwipeUp => vec![TranslateY(-120.0), Scale(0.95)],
        RevealType::SwipeDown => vec![TranslateY(120.0), Scale(0.95)],
        RevealType::SwipeLeft => vec![TranslateX(-120.0), Scale(0.95)],
        RevealType::SwipeRight => vec![TranslateX(120.0), Scale(0.95)],
        RevealType::Door => vec![RotateY(110.0), TranslateX(-50.0)],
        RevealType::Lock => vec![Scale(0.1), Rotate(720.0)],
        RevealType::Vanish => vec![Scale(0.1), Rotate(360.0), TranslateY(-50.0)],
        RevealType::Zoom => vec![Scale(3.0), Rotate(15.0)],
        RevealType::Curtain => vec![ScaleY(0.0), TranslateY(-100.0)],
    };
    TransformDescriptor::new(ops)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HintIcon {
    Lock,
    Door,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RevealHint {
    pub icon: Option<HintIcon>,
    pub label: &'static str,
}

pub fn reveal_hint(variant: RevealType) -> RevealHint {
    let icon = match variant {
        RevealType::Lock => Some(HintIcon::Lock),
        RevealType::Door => Some(HintIcon::Door),
        _ => None,
    };
    RevealHint {
        icon,
        label: REVEAL_HINT_LABEL,
    }
}

/// The cover face at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CoverFrame {
    pub transform: TransformDescriptor,
    pub opacity: f64,
    /// Whether the cover still takes clicks.
    pub interactive: bool,
    /// Eased transition progress in `[0, 1]`.
    pub progress: f64,
}

impl CoverFrame {
    /// A fully faded cover no longer needs drawing.
    pub fn is_gone(&self) -> bool {
        self.opacity <= 0.0
    }
}

#[derive(Clone, Debug)]
pub struct RevealMachine {
    variant: RevealType,
    state: RevealState,
    revealed_at: Option<FrameTime>,
}

impl RevealMachine {
    pub fn new(variant: RevealType) -> Self {
        Self {
            variant,
            state: RevealState::Covered,
            revealed_at: None,
        }
    }

    pub fn variant(&self) -> RevealType {
        self.variant
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Open the cover. Only the first click does anything.
    pub fn click(&mut self, now: FrameTime) -> bool {
        if self.is_revealed() {
            return false;
        }
        tracing::debug!(variant = ?self.variant, "cover revealed");
        self.state = RevealState::Revealed;
        self.revealed_at = Some(now);
        true
    }

    /// Raw transition progress in `[0, 1]`.
    pub fn transition_progress(&self, now: FrameTime) -> f64 {
        match self.revealed_at {
            Some(at) => (now.millis_since(at) / REVEAL_TRANSITION_MS).min(1.0),
            None => 0.0,
        }
    }

    pub fn is_animating(&self, now: FrameTime) -> bool {
        self.revealed_at.is_some() && self.transition_progress(now) < 1.0
    }

    pub fn cover_at(&self, now: FrameTime) -> CoverFrame {
        let eased = Ease::CssEaseInOut.apply(self.transition_progress(now));
        CoverFrame {
            transform: transform_for(self.variant, self.state).partial(eased),
            opacity: 1.0 - eased,
            interactive: !self.is_revealed(),
            progress: eased,
        }
    }

    /// The card underneath stays hidden until the cover is opened.
    pub fn content_visible(&self) -> bool {
        self.is_revealed()
    }

    pub fn hint(&self) -> Option<RevealHint> {
        (!self.is_revealed()).then(|| reveal_hint(self.variant))
    }
}

impl FrameTask for RevealMachine {
    fn tick(&mut self, now: FrameTime) -> CardResult<LoopControl> {
        if self.is_animating(now) {
            Ok(LoopControl::Continue)
        } else {
            Ok(LoopControl::Stop)
        }
    }
}

/// Page-background settings that paint the cover face.
pub fn cover_background_settings(cover: &CoverBackground) -> BackgroundSettings {
    let gradient = cover.gradient.clone().unwrap_or_default();
    let colors = if gradient.colors.is_empty() {
        DEFAULT_COVER_GRADIENT.iter().map(|c| c.to_string()).collect()
    } else {
        gradient.colors.clone()
    };
    let direction = if gradient.direction.trim().is_empty() {
        "135deg".to_string()
    } else {
        gradient.direction.clone()
    };
    let animation = cover.animation.clone().unwrap_or_default();
    let pattern = cover.pattern.clone().unwrap_or_default();
    let or = |v: f64, fallback: f64| if v.is_finite() && v != 0.0 { v } else { fallback };

    BackgroundSettings {
        color: Some(
            cover
                .color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COVER_COLOR.to_string()),
        ),
        gradient: Some(GradientSpec {
            enabled: cover.kind == CoverKind::Gradient && gradient.enabled,
            colors,
            direction,
        }),
        image_url: match cover.kind {
            CoverKind::Image => cover.image.clone(),
            _ => None,
        },
        image_opacity: Some(cover.image_opacity.map_or(100.0, |o| or(o, 1.0) * 100.0)),
        pattern: Some(PatternSpec {
            enabled: pattern.enabled,
            kind: if pattern.kind.is_empty() {
                "dots".to_string()
            } else {
                pattern.kind
            },
            opacity: or(pattern.opacity, 0.1) * 100.0,
        }),
        animation: Some(BackgroundAnimation {
            enabled: animation.enabled,
            kind: if animation.kind.is_empty() {
                "bubbles".to_string()
            } else {
                animation.kind
            },
            speed: or(animation.speed, 5.0),
            intensity: or(animation.intensity, 5.0) * 10.0,
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/machine.rs"]
mod tests;
