//! Viewport, canvas measurement, and deferred frame work

use std::rc::Rc;

use crate::layout::{FrameTask, LayoutChange, RootStyle};
use crate::math::{Rect, Size};
use crate::persistence::Storage;
use crate::transition::BootSequence;
use crate::window::WindowId;
use super::DesktopEngine;

/// Frames to wait after entering the desktop layout before clamping
const SETTLE_FRAMES: u8 = 2;

impl<S: Storage> DesktopEngine<S> {
    /// Attach the document root so the desktop layout can lock page scrolling
    ///
    /// Call before [`mount`](Self::mount).
    pub fn set_root_style(&mut self, root: Rc<dyn RootStyle>) {
        self.layout.set_root_style(root);
    }

    /// Mount the desktop: start the boot overlay and evaluate the media queries
    pub fn mount(&mut self, viewport_width: f64, now_ms: f64) -> LayoutChange {
        self.boot = Some(BootSequence::start(now_ms, self.config.reduced_motion));
        self.viewport_changed(viewport_width)
    }

    /// Viewport width changed
    pub fn viewport_changed(&mut self, width: f64) -> LayoutChange {
        let change = self.layout.update_viewport(width);

        if change.entered_desktop() {
            self.windows.reset();
            self.frames.schedule(FrameTask::ClampAll, SETTLE_FRAMES);
        }
        if change.desktop_activated() {
            self.frames.schedule(FrameTask::ClampAll, 1);
        }
        if change.left_desktop() {
            self.input.end_drag();
        }

        self.persist();
        change
    }

    /// Canvas element measured or resized
    pub fn canvas_resized(&mut self, bounds: Rect) {
        self.canvas = Some(bounds);
        if self.layout.is_desktop() {
            self.frames.schedule(FrameTask::ClampAll, 1);
        }
    }

    /// Canvas element removed
    pub fn canvas_unmounted(&mut self) {
        self.canvas = None;
        self.input.end_drag();
    }

    /// Window element measured or resized
    pub fn window_resized(&mut self, id: WindowId, size: Size) {
        self.measured[id.index()] = Some(size);
        if self.layout.is_desktop() {
            self.frames.schedule(FrameTask::ClampAll, 1);
        }
    }

    /// Window element removed
    pub fn window_unmounted(&mut self, id: WindowId) {
        self.measured[id.index()] = None;
    }

    /// Measured size of a window element
    pub fn window_size(&self, id: WindowId) -> Option<Size> {
        self.measured[id.index()]
    }

    /// Canvas bounds, if measured
    pub fn canvas(&self) -> Option<Rect> {
        self.canvas
    }

    /// Animation frame: run due deferred tasks
    ///
    /// Returns the tasks that came due. A task whose canvas or window is not
    /// measured, or that comes due outside the desktop layout, does nothing.
    pub fn tick_frame(&mut self) -> Vec<FrameTask> {
        let due = self.frames.tick();
        for task in &due {
            match *task {
                FrameTask::ClampAll => self.clamp_all(),
                FrameTask::Recenter(id) => self.recenter(id),
            }
        }
        self.persist();
        due
    }

    /// Clamp every shown and measured window into the canvas now
    pub fn clamp_all(&mut self) {
        let Some(canvas) = self.canvas else {
            return;
        };
        if !self.layout.is_desktop() {
            return;
        }
        let measured = self.measured;
        self.windows.clamp_all(canvas.size(), |id| measured[id.index()]);
        self.persist();
    }

    /// Center a window in the canvas now
    pub fn recenter(&mut self, id: WindowId) {
        let (Some(canvas), Some(window)) = (self.canvas, self.measured[id.index()]) else {
            return;
        };
        if !self.layout.is_desktop() {
            return;
        }
        if self.windows.center(id, canvas.size(), window) {
            tracing::debug!(window = %id, "recentered window");
        }
        self.persist();
    }

    /// Unmount the desktop: release the scroll lock and drop pending work
    pub fn unmount(&mut self) {
        self.layout.release();
        self.input.end_drag();
        self.frames.clear();
        self.canvas = None;
        self.measured = [None; WindowId::COUNT];
        self.boot = None;
        self.menu.dismiss();
        tracing::debug!("desktop unmounted");
    }
}
