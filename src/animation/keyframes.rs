use crate::animation::ease::Ease;
use crate::foundation::error::{CardError, CardResult};

/// A keyed scalar track over one normalized cycle, offsets in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    pub keys: Vec<Keyframe>, // sorted by offset
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub offset: f64,
    pub value: f64,
    pub ease: Ease, // ease applied toward next key
}

impl Keyframes {
    /// Track through `(offset, value)` pairs, every segment using `ease`.
    pub fn linear(points: &[(f64, f64)], ease: Ease) -> Self {
        Self {
            keys: points
                .iter()
                .map(|&(offset, value)| Keyframe {
                    offset,
                    value,
                    ease,
                })
                .collect(),
        }
    }

    /// Value at cycle position `t`. Positions outside the keyed range hold the end values.
    pub fn sample(&self, t: f64) -> CardResult<f64> {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(CardError::animation("keyframes has no keys")),
        };
        let t = if t.is_finite() { t } else { 0.0 };

        let idx = self.keys.partition_point(|k| k.offset <= t);
        if idx == 0 {
            return Ok(first.value);
        }
        if idx >= self.keys.len() {
            return Ok(last.value);
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.offset - a.offset;
        if span <= 0.0 {
            return Ok(a.value);
        }

        let local = a.ease.apply((t - a.offset) / span);
        Ok(a.value + (b.value - a.value) * local)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
