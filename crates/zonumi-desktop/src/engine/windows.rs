//! Window lifecycle and operations

use crate::layout::FrameTask;
use crate::persistence::Storage;
use crate::window::{ShowOutcome, WindowId};
use super::DesktopEngine;

/// Frames to wait before centering a newly shown window
const RECENTER_DELAY_FRAMES: u8 = 2;

impl<S: Storage> DesktopEngine<S> {
    /// Show a window and bring it to front
    pub fn show_window(&mut self, id: WindowId) -> ShowOutcome {
        let outcome = self.windows.show(id, self.layout.mode());
        if outcome == ShowOutcome::ShownNeedsRecenter {
            self.frames.schedule(FrameTask::Recenter(id), RECENTER_DELAY_FRAMES);
        }
        if self.layout.is_desktop() {
            self.frames.schedule(FrameTask::ClampAll, 1);
        }
        self.persist();
        outcome
    }

    /// Hide a window; its element unmounts so its measurement is dropped
    pub fn close_window(&mut self, id: WindowId) {
        if !self.windows.is_shown(id) {
            return;
        }

        if self.input.drag_session().is_some_and(|s| s.window_id == id) {
            self.input.end_drag();
        }
        self.windows.close(id);
        self.measured[id.index()] = None;
        if self.layout.is_desktop() {
            self.frames.schedule(FrameTask::ClampAll, 1);
        }
        self.persist();
    }

    /// Bring a window to front (pointer down on its frame)
    pub fn focus_window(&mut self, id: WindowId) {
        self.windows.bring_to_front(id);
        self.persist();
    }

    /// Restore registry placement, then re-clamp once the DOM has settled
    pub fn reset_layout(&mut self) {
        self.windows.reset();
        if self.layout.is_desktop() {
            self.frames.schedule(FrameTask::ClampAll, 2);
        }
        self.persist();
    }
}
