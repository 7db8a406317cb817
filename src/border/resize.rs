use crate::foundation::core::{FrameTime, Size, measured_size};

pub const DEFAULT_RESIZE_DEBOUNCE_MS: f64 = 50.0;

/// Debounced container measurement.
///
/// The first measurement commits immediately. Later ones are queued and commit once no newer
/// measurement has arrived for the debounce period. Failed measurements are dropped and the
/// last known size stays in effect.
#[derive(Clone, Debug)]
pub struct ResizeObserver {
    debounce_ms: f64,
    committed: Size,
    measured_once: bool,
    pending: Option<(Size, FrameTime)>,
}

impl ResizeObserver {
    pub fn new(debounce_ms: f64) -> Self {
        let debounce_ms = if debounce_ms.is_finite() {
            debounce_ms.max(0.0)
        } else {
            DEFAULT_RESIZE_DEBOUNCE_MS
        };
        Self {
            debounce_ms,
            committed: Size::ZERO,
            measured_once: false,
            pending: None,
        }
    }

    pub fn size(&self) -> Size {
        self.committed
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed a raw measurement. Returns `true` if the committed size changed.
    pub fn observe<E>(&mut self, measurement: Result<Size, E>, now: FrameTime) -> bool
    where
        E: std::fmt::Display,
    {
        let raw = match measurement {
            Ok(size) => size,
            Err(err) => {
                tracing::debug!(error = %err, "container measurement failed; keeping last size");
                return false;
            }
        };
        let size = measured_size(raw.width, raw.height);
        if !self.measured_once {
            self.measured_once = true;
            return self.commit(size);
        }
        self.pending = Some((size, now));
        false
    }

    /// Commit a queued measurement once the quiet period has passed.
    pub fn poll(&mut self, now: FrameTime) -> bool {
        match self.pending {
            Some((size, at)) if now.millis_since(at) >= self.debounce_ms => {
                self.pending = None;
                self.commit(size)
            }
            _ => false,
        }
    }

    fn commit(&mut self, size: Size) -> bool {
        let changed = size != self.committed;
        self.committed = size;
        changed
    }
}

impl Default for ResizeObserver {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_DEBOUNCE_MS)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/border/resize.rs"]
mod tests;
