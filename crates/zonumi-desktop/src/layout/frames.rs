//! Deferred work keyed to animation frames

use crate::window::WindowId;

/// Work to run after layout has settled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameTask {
    /// Re-clamp every shown window into the canvas
    ClampAll,
    /// Center one window in the canvas
    Recenter(WindowId),
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    task: FrameTask,
    frames_left: u8,
}

/// Queue of tasks waiting for a number of animation frames
///
/// Tasks cannot be cancelled individually; the engine guards each one
/// against stale canvas state when it runs.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    pending: Vec<Pending>,
}

impl FrameQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `frames` ticks (at least one)
    ///
    /// A task already queued for the same frame is not queued twice.
    pub fn schedule(&mut self, task: FrameTask, frames: u8) {
        let frames_left = frames.max(1);
        let duplicate = self
            .pending
            .iter()
            .any(|p| p.task == task && p.frames_left == frames_left);
        if !duplicate {
            self.pending.push(Pending { task, frames_left });
        }
    }

    /// Advance one frame and return the tasks that are due, in scheduling order
    pub fn tick(&mut self) -> Vec<FrameTask> {
        let mut due = Vec::new();
        self.pending.retain_mut(|p| {
            p.frames_left -= 1;
            if p.frames_left == 0 {
                due.push(p.task);
                false
            } else {
                true
            }
        });
        due
    }

    /// Number of queued tasks
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every queued task
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_deferral() {
        let mut queue = FrameQueue::new();
        queue.schedule(FrameTask::ClampAll, 2);

        assert!(queue.tick().is_empty());
        assert_eq!(queue.tick(), vec![FrameTask::ClampAll]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_zero_frames_runs_next_tick() {
        let mut queue = FrameQueue::new();
        queue.schedule(FrameTask::Recenter(WindowId::Contact), 0);
        assert_eq!(queue.tick(), vec![FrameTask::Recenter(WindowId::Contact)]);
    }

    #[test]
    fn test_order_and_dedup() {
        let mut queue = FrameQueue::new();
        queue.schedule(FrameTask::ClampAll, 1);
        queue.schedule(FrameTask::Recenter(WindowId::Contact), 1);
        queue.schedule(FrameTask::ClampAll, 1);
        queue.schedule(FrameTask::ClampAll, 2);
        assert_eq!(queue.len(), 3);

        assert_eq!(
            queue.tick(),
            vec![FrameTask::ClampAll, FrameTask::Recenter(WindowId::Contact)]
        );
        assert_eq!(queue.tick(), vec![FrameTask::ClampAll]);
        assert!(queue.tick().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue = FrameQueue::new();
        queue.schedule(FrameTask::ClampAll, 2);
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.tick().is_empty());
    }
}
