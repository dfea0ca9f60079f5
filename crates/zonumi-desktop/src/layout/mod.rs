//! Layout controller module
//!
//! Decides between the windowed desktop layout and the stacked layout from
//! the viewport width, schedules deferred clamp/recenter passes, and holds
//! the page scroll lock while the desktop layout is active.

mod breakpoints;
mod controller;
mod frames;
mod scroll_lock;

pub use breakpoints::{Breakpoints, DESKTOP_MIN_WIDTH, MOBILE_MAX_WIDTH};
pub use controller::{LayoutChange, LayoutController};
pub use frames::{FrameQueue, FrameTask};
pub use scroll_lock::{RootElement, RootStyle, ScrollLock};

#[cfg(test)]
pub(crate) use scroll_lock::testing;

use serde::Serialize;

/// How windows are rendered
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Absolutely positioned, draggable windows
    Desktop,
    /// Windows stacked as panels in document flow
    #[default]
    Stacked,
}

impl LayoutMode {
    #[inline]
    pub fn is_desktop(self) -> bool {
        matches!(self, LayoutMode::Desktop)
    }
}
