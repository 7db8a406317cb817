use crate::animation::ease::Ease;
use crate::animation::scheduler::{FrameTask, LoopControl};
use crate::foundation::core::FrameTime;
use crate::foundation::error::CardResult;

pub const FLIP_TRANSITION_MS: f64 = 700.0;
pub const FLIP_HINT_FRONT: &str = "Click to flip →";
pub const FLIP_HINT_BACK: &str = "← Click to flip back";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    fn target_deg(self) -> f64 {
        match self {
            Self::Front => 0.0,
            Self::Back => 180.0,
        }
    }
}

/// Two-sided card that turns over on every click.
///
/// A click during a turn retargets from the current angle, so the card never jumps.
#[derive(Clone, Debug, Default)]
pub struct FlipCard {
    face: CardFace,
    from_deg: f64,
    started_at: Option<FrameTime>,
}

impl FlipCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn click(&mut self, now: FrameTime) {
        self.from_deg = self.rotation_at(now);
        self.face = match self.face {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        };
        self.started_at = Some(now);
    }

    /// `rotateY` angle of the card body in degrees.
    pub fn rotation_at(&self, now: FrameTime) -> f64 {
        let target = self.face.target_deg();
        let Some(start) = self.started_at else {
            return target;
        };
        let t = (now.millis_since(start) / FLIP_TRANSITION_MS).min(1.0);
        let eased = Ease::Standard.apply(t);
        self.from_deg + (target - self.from_deg) * eased
    }

    /// Face turned toward the viewer at `now`.
    pub fn visible_face(&self, now: FrameTime) -> CardFace {
        if self.rotation_at(now) < 90.0 {
            CardFace::Front
        } else {
            CardFace::Back
        }
    }

    pub fn is_animating(&self, now: FrameTime) -> bool {
        self.started_at
            .is_some_and(|start| now.millis_since(start) < FLIP_TRANSITION_MS)
    }

    pub fn hint(&self, now: FrameTime) -> &'static str {
        match self.visible_face(now) {
            CardFace::Front => FLIP_HINT_FRONT,
            CardFace::Back => FLIP_HINT_BACK,
        }
    }
}

impl FrameTask for FlipCard {
    fn tick(&mut self, now: FrameTime) -> CardResult<LoopControl> {
        if self.is_animating(now) {
            Ok(LoopControl::Continue)
        } else {
            Ok(LoopControl::Stop)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/flip.rs"]
mod tests;
