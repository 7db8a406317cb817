//! Explicit frame loop.
//!
//! Subsystems do not run themselves. They hold a [`LoopHandle`] obtained from the owner's
//! [`FrameScheduler`]; on every frame the owner drives each active handle's [`FrameTask`]
//! with the current timestamp. A task ends its loop by returning [`LoopControl::Stop`] or an
//! error, and the owner cancels handles when their subsystem goes away.

use std::collections::BTreeMap;

use crate::foundation::core::FrameTime;
use crate::foundation::error::CardResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoopHandle(u64);

impl LoopHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Per-frame work of one subsystem.
pub trait FrameTask {
    fn tick(&mut self, now: FrameTime) -> CardResult<LoopControl>;
}

#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    active: BTreeMap<LoopHandle, &'static str>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new loop. `label` names the subsystem in logs.
    pub fn request(&mut self, label: &'static str) -> LoopHandle {
        self.next_id += 1;
        let handle = LoopHandle(self.next_id);
        self.active.insert(handle, label);
        tracing::trace!(handle = handle.0, label, "frame loop requested");
        handle
    }

    /// Returns `false` if the handle was not active.
    pub fn cancel(&mut self, handle: LoopHandle) -> bool {
        match self.active.remove(&handle) {
            Some(label) => {
                tracing::trace!(handle = handle.0, label, "frame loop cancelled");
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        self.active.clear();
    }

    pub fn is_active(&self, handle: LoopHandle) -> bool {
        self.active.contains_key(&handle)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Run one frame of `task` under `handle`. Returns whether the loop is still active.
    ///
    /// Inactive handles are not ticked. An error halts only this loop.
    pub fn drive(&mut self, handle: LoopHandle, task: &mut dyn FrameTask, now: FrameTime) -> bool {
        let Some(label) = self.active.get(&handle).copied() else {
            return false;
        };
        match task.tick(now) {
            Ok(LoopControl::Continue) => true,
            Ok(LoopControl::Stop) => {
                self.active.remove(&handle);
                tracing::debug!(handle = handle.0, label, "frame loop finished");
                false
            }
            Err(err) => {
                self.active.remove(&handle);
                tracing::warn!(handle = handle.0, label, error = %err, "frame loop halted");
                false
            }
        }
    }
}

/// Drives `task` once if `slot` holds an active loop, clearing the slot when it ends.
pub fn drive_slot(
    scheduler: &mut FrameScheduler,
    slot: &mut Option<LoopHandle>,
    task: &mut dyn FrameTask,
    now: FrameTime,
) {
    if let Some(handle) = *slot {
        if !scheduler.drive(handle, task, now) {
            *slot = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
