use std::f64::consts::TAU;

/// Wraps any real into `[0, 100)`. Non-finite input maps to `0`.
pub fn wrap_percent(p: f64) -> f64 {
    if !p.is_finite() {
        return 0.0;
    }
    let w = ((p % 100.0) + 100.0) % 100.0;
    // `-1e-18 % 100 + 100` rounds to exactly 100.
    if w >= 100.0 { 0.0 } else { w }
}

/// Fractional part in `[0, 1)`.
pub fn fract01(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    let f = x.rem_euclid(1.0);
    if f >= 1.0 { 0.0 } else { f }
}

/// Deterministic SplitMix64 generator.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64_01()
    }

    pub fn angle(&mut self) -> f64 {
        self.next_f64_01() * TAU
    }

    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64_01() * len as f64) as usize).min(len - 1)
    }
}

/// Undo premultiplied alpha in place on an RGBA8 buffer.
pub fn demultiply_rgba8(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = (((u16::from(*c) * 255) + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
