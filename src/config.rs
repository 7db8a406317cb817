use std::path::Path;

use anyhow::Context as _;

use crate::border::resize::DEFAULT_RESIZE_DEBOUNCE_MS;
use crate::confetti::engine::DEFAULT_CONFETTI_SEED;
use crate::foundation::core::Size;
use crate::foundation::error::{CardError, CardResult};
use crate::preview::composer::PreviewOptions;
use crate::store::janitor::{DEFAULT_CLEANUP_INTERVAL_HOURS, DEFAULT_RETENTION_DAYS, Janitor};

/// Engine-wide settings. Every field is optional in the JSON file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Quiet period before a container resize is committed.
    pub resize_debounce_ms: f64,
    /// Cards older than this are swept.
    pub retention_days: i64,
    /// Minimum time between two retention sweeps.
    pub cleanup_interval_hours: i64,
    /// URL prefix of media blobs the engine owns and may delete.
    pub managed_media_prefix: String,
    /// Drop keyframe overlays (float, shake, pulse, ...) on ornaments.
    pub reduced_motion: bool,
    /// Viewport the confetti canvas covers.
    pub viewport: Size,
    /// Frame rate of simulated timelines in the CLI.
    pub fps: u32,
    pub confetti_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            retention_days: DEFAULT_RETENTION_DAYS,
            cleanup_interval_hours: DEFAULT_CLEANUP_INTERVAL_HOURS,
            managed_media_prefix: "media://".to_string(),
            reduced_motion: false,
            viewport: Size::new(1280.0, 800.0),
            fps: 60,
            confetti_seed: DEFAULT_CONFETTI_SEED,
        }
    }
}

impl EngineConfig {
    pub fn from_path(path: &Path) -> CardResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read engine config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> CardResult<()> {
        if !self.resize_debounce_ms.is_finite() || self.resize_debounce_ms < 0.0 {
            return Err(CardError::validation("resizeDebounceMs must be finite and >= 0"));
        }
        if self.retention_days < 0 || self.cleanup_interval_hours < 0 {
            return Err(CardError::validation("retention windows must be >= 0"));
        }
        if self.fps == 0 {
            return Err(CardError::validation("fps must be > 0"));
        }
        let Size { width, height } = self.viewport;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CardError::validation("viewport must be positive"));
        }
        Ok(())
    }

    /// Milliseconds between simulated frames.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.fps.max(1))
    }

    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            resize_debounce_ms: self.resize_debounce_ms,
            overlays: !self.reduced_motion,
            viewport: self.viewport,
            confetti_seed: self.confetti_seed,
        }
    }

    pub fn janitor(&self) -> Janitor {
        Janitor::new(self.retention_days, self.cleanup_interval_hours)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
