//! Work deferred to the next rendering frames.
//!
//! Positioning the track without animation is a two-step operation:
//! disable the transition right away, apply the offset on the next frame,
//! and only re-enable the transition on the frame after that. The queue
//! holds one batch per upcoming frame.

use std::collections::VecDeque;

/// A unit of work run inside a rendering-frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTask {
    /// Move the track to the controller's current index.
    ApplyIndexOffset,
    /// Turn the eased transition back on.
    EnableTransition,
}

/// Per-frame batches of [`FrameTask`]s.
#[derive(Debug, Clone, Default)]
pub struct FrameQueue {
    frames: VecDeque<Vec<FrameTask>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run `frames_ahead` frames from now (0 = next frame).
    pub fn schedule(&mut self, frames_ahead: usize, task: FrameTask) {
        while self.frames.len() <= frames_ahead {
            self.frames.push_back(Vec::new());
        }
        self.frames[frames_ahead].push(task);
    }

    /// Take the batch for the frame being rendered now.
    pub fn take_next(&mut self) -> Vec<FrameTask> {
        self.frames.pop_front().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.iter().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
