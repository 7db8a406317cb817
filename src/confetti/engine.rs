//! Falling paper confetti.
//!
//! Particles are integrated once per frame with a fixed per-frame step: position by
//! velocity, spin by spin speed, then gravity adds 0.1 to the fall speed. `once` bursts run
//! for the configured number of seconds; `continuous` bursts recycle particles that fall off
//! the bottom or drift off the sides.

use crate::animation::scheduler::{FrameTask, LoopControl};
use crate::confetti::canvas::Canvas2d;
use crate::foundation::core::{FrameTime, Point, Size};
use crate::foundation::error::CardResult;
use crate::foundation::math::Rng64;
use crate::model::card::{ConfettiMode, ConfettiSettings, default_confetti_colors};

pub const GRAVITY: f64 = 0.1;
pub const DEFAULT_CONFETTI_SEED: u64 = 0xC0FF_EE00_5EED;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub vx: f64,
    pub vy: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub color: String,
}

#[derive(Clone, Debug)]
pub struct ConfettiEngine<C> {
    settings: ConfettiSettings,
    canvas: Option<C>,
    rng: Rng64,
    particles: Vec<Particle>,
    started_at: Option<FrameTime>,
    finished: bool,
}

impl<C: Canvas2d> ConfettiEngine<C> {
    pub fn new(settings: ConfettiSettings, canvas: Option<C>, seed: u64) -> Self {
        Self {
            settings,
            canvas,
            rng: Rng64::new(seed),
            particles: Vec::new(),
            started_at: None,
            finished: false,
        }
    }

    pub fn settings(&self) -> &ConfettiSettings {
        &self.settings
    }

    pub fn canvas(&self) -> Option<&C> {
        self.canvas.as_ref()
    }

    pub fn attach_canvas(&mut self, canvas: C) {
        self.canvas = Some(canvas);
    }

    pub fn detach_canvas(&mut self) -> Option<C> {
        self.canvas.take()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether a frame loop should run for this burst.
    pub fn wants_frames(&self) -> bool {
        self.settings.enabled && self.canvas.is_some() && !self.finished
    }

    fn palette(&self) -> Vec<String> {
        if self.settings.colors.is_empty() {
            default_confetti_colors()
        } else {
            self.settings.colors.clone()
        }
    }

    /// (Re)spawn all particles and restart the clock. No-op while disabled or canvas-less.
    pub fn start(&mut self, now: FrameTime) -> bool {
        let Some(size) = self.canvas.as_ref().map(Canvas2d::size) else {
            return false;
        };
        if !self.settings.enabled {
            return false;
        }
        let palette = self.palette();
        let continuous = self.settings.mode == ConfettiMode::Continuous;
        let rng = &mut self.rng;
        self.particles = (0..self.settings.density)
            .map(|_| {
                let x = rng.next_f64_01() * size.width;
                let y = if continuous {
                    rng.next_f64_01() * size.height
                } else {
                    -10.0 - rng.next_f64_01() * 50.0
                };
                Particle {
                    x,
                    y,
                    w: rng.range(5.0, 15.0),
                    h: rng.range(3.0, 8.0),
                    color: palette[rng.index(palette.len())].clone(),
                    vx: rng.range(-1.0, 1.0),
                    vy: rng.range(2.0, 5.0),
                    rotation: rng.angle(),
                    rotation_speed: (rng.next_f64_01() - 0.5) * 0.2,
                }
            })
            .collect();
        self.started_at = Some(now);
        self.finished = false;
        tracing::debug!(
            particles = self.particles.len(),
            mode = ?self.settings.mode,
            "confetti burst started"
        );
        true
    }

    /// Replace the settings and restart the burst. Disabled settings leave a blank canvas.
    pub fn set_settings(&mut self, settings: ConfettiSettings, now: FrameTime) {
        self.settings = settings;
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.clear();
        }
        self.particles.clear();
        self.started_at = None;
        self.finished = false;
        self.start(now);
    }

    /// Track a new viewport size.
    pub fn resize(&mut self, viewport: Size) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.resize(viewport);
        }
    }

    pub fn stop(&mut self) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.clear();
        }
        self.particles.clear();
        self.finished = true;
    }

    /// One frame: clear, check the burst clock, integrate, draw.
    pub fn step(&mut self, now: FrameTime) -> LoopControl {
        if !self.settings.enabled || self.finished {
            return LoopControl::Stop;
        }
        if self.started_at.is_none() && !self.start(now) {
            return LoopControl::Stop;
        }
        let (Some(canvas), Some(started_at)) = (self.canvas.as_mut(), self.started_at) else {
            return LoopControl::Stop;
        };
        canvas.clear();

        let elapsed = now.secs_since(started_at);
        let continuous = self.settings.mode == ConfettiMode::Continuous;
        if !continuous && elapsed > self.settings.duration {
            self.stop();
            tracing::debug!(elapsed, "confetti burst finished");
            return LoopControl::Stop;
        }

        let size = canvas.size();
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.rotation += p.rotation_speed;
            p.vy += GRAVITY;

            if continuous {
                if p.y > size.height {
                    p.y = -10.0;
                    p.x = self.rng.next_f64_01() * size.width;
                    p.vy = self.rng.range(2.0, 5.0);
                }
                if p.x < -10.0 || p.x > size.width + 10.0 {
                    p.x = self.rng.next_f64_01() * size.width;
                }
            }

            canvas.fill_rotated_rect(
                Point::new(p.x, p.y),
                Size::new(p.w, p.h),
                p.rotation,
                &p.color,
            );
        }
        LoopControl::Continue
    }
}

impl<C: Canvas2d> FrameTask for ConfettiEngine<C> {
    fn tick(&mut self, now: FrameTime) -> CardResult<LoopControl> {
        Ok(self.step(now))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/confetti/engine.rs"]
mod tests;
