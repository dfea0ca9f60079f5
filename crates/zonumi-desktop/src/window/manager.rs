//! Window manager for visibility, focus, and z-order

use crate::layout::LayoutMode;
use crate::math::{centered_origin, clamp_origin, Size, Vec2};
use super::{
    initial_active_window, Visibility, WindowId, WindowLayout, WindowState, WindowStatus,
    CONTACT_WINDOW, FALLBACK_WINDOW,
};

/// Lowest value the z counter starts from
///
/// Keeps freshly focused windows above the registry defaults (1..=5).
pub const BASE_Z: u64 = 20;

/// Result of [`WindowManager::show`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowOutcome {
    /// Window is shown and focused
    Shown,
    /// Window is shown and focused; it should be centered once it has been measured
    ShownNeedsRecenter,
}

/// Window manager owning placement, visibility, and focus
///
/// The manager never talks to storage or the DOM. Callers pass canvas and
/// window measurements in, and check [`take_dirty`](Self::take_dirty) to
/// decide whether the layout needs to be persisted.
#[derive(Clone, Debug)]
pub struct WindowManager {
    /// Position and z of every window
    layout: WindowLayout,
    /// Shown/hidden per window
    visibility: [Visibility; WindowId::COUNT],
    /// Focus target; only reported as active while shown
    focus: WindowId,
    /// Last assigned z value
    z_counter: u64,
    /// Layout changed since the last `take_dirty`
    dirty: bool,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(WindowLayout::defaults())
    }
}

impl WindowManager {
    /// Create a window manager from a (possibly restored) layout
    pub fn new(layout: WindowLayout) -> Self {
        let z_counter = layout.max_z().max(BASE_Z);
        Self {
            layout,
            visibility: WindowId::ALL.map(|id| {
                if id.descriptor().open_by_default {
                    Visibility::Shown
                } else {
                    Visibility::Hidden
                }
            }),
            focus: initial_active_window(),
            z_counter,
            dirty: false,
        }
    }

    /// Current layout
    #[inline]
    pub fn layout(&self) -> &WindowLayout {
        &self.layout
    }

    /// State of one window
    #[inline]
    pub fn state(&self, id: WindowId) -> &WindowState {
        self.layout.get(id)
    }

    /// Visibility of one window
    #[inline]
    pub fn visibility(&self, id: WindowId) -> Visibility {
        self.visibility[id.index()]
    }

    /// Check if a window is shown
    #[inline]
    pub fn is_shown(&self, id: WindowId) -> bool {
        self.visibility(id).is_shown()
    }

    /// Derived state of one window
    pub fn status(&self, id: WindowId) -> WindowStatus {
        match self.visibility(id) {
            Visibility::Hidden => WindowStatus::Hidden,
            Visibility::Shown if self.focus == id => WindowStatus::Active,
            Visibility::Shown => WindowStatus::Inactive,
        }
    }

    /// The focus target; always defined, even when every window is hidden
    #[inline]
    pub fn active_window(&self) -> WindowId {
        self.focus
    }

    /// Last assigned z value
    #[inline]
    pub fn z_counter(&self) -> u64 {
        self.z_counter
    }

    /// Shown windows in catalog order
    pub fn shown_windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        WindowId::ALL.into_iter().filter(move |&id| self.is_shown(id))
    }

    /// Report and clear whether the layout changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Bring a window to front with a fresh z and focus it
    ///
    /// When the counter is exhausted the layout is renumbered first, so the
    /// window still ends up above every other window.
    pub fn bring_to_front(&mut self, id: WindowId) {
        self.z_counter = match self.z_counter.checked_add(1) {
            Some(z) => z,
            None => {
                tracing::debug!("z counter exhausted, renumbering");
                self.layout.renumber_z().max(BASE_Z) + 1
            }
        };
        self.layout[id].z = self.z_counter;
        self.focus = id;
        self.dirty = true;
        tracing::debug!(window = %id, z = self.z_counter, "bring to front");
    }

    /// Show a window and bring it to front
    ///
    /// The contact window asks to be centered when it is opened from hidden
    /// in desktop mode while still at its registry default position.
    pub fn show(&mut self, id: WindowId, mode: LayoutMode) -> ShowOutcome {
        let needs_recenter = id == CONTACT_WINDOW
            && mode.is_desktop()
            && !self.is_shown(id)
            && self.layout[id].is_at(id.descriptor().initial.position());

        self.visibility[id.index()] = Visibility::Shown;
        self.bring_to_front(id);
        tracing::debug!(window = %id, needs_recenter, "show window");

        if needs_recenter {
            ShowOutcome::ShownNeedsRecenter
        } else {
            ShowOutcome::Shown
        }
    }

    /// Hide a window; focus falls back to [`FALLBACK_WINDOW`] if it was focused
    pub fn close(&mut self, id: WindowId) {
        if !self.is_shown(id) {
            return;
        }

        self.visibility[id.index()] = Visibility::Hidden;
        if self.focus == id {
            self.focus = FALLBACK_WINDOW;
        }
        tracing::debug!(window = %id, focus = %self.focus, "close window");
    }

    /// Move a window to `origin` clamped into the canvas; z is untouched
    ///
    /// Returns true if the position changed.
    pub fn move_clamped(&mut self, id: WindowId, origin: Vec2, canvas: Size, window: Size) -> bool {
        let target = clamp_origin(origin, canvas, window);
        self.set_position(id, target)
    }

    /// Re-clamp one window at its current position
    pub fn clamp(&mut self, id: WindowId, canvas: Size, window: Size) -> bool {
        let origin = self.layout[id].position();
        self.move_clamped(id, origin, canvas, window)
    }

    /// Re-clamp every shown window that has a measured size
    ///
    /// Returns the number of windows that moved.
    pub fn clamp_all<F>(&mut self, canvas: Size, measured: F) -> usize
    where
        F: Fn(WindowId) -> Option<Size>,
    {
        let mut moved = 0;
        for id in WindowId::ALL {
            if !self.is_shown(id) {
                continue;
            }
            let Some(window) = measured(id) else {
                continue;
            };
            if self.clamp(id, canvas, window) {
                moved += 1;
            }
        }
        tracing::trace!(moved, "clamp pass");
        moved
    }

    /// Center a window in the canvas
    pub fn center(&mut self, id: WindowId, canvas: Size, window: Size) -> bool {
        self.set_position(id, centered_origin(canvas, window))
    }

    /// Restore registry defaults for placement, z counter, and focus
    ///
    /// Visibility is left as is.
    pub fn reset(&mut self) {
        self.layout = WindowLayout::defaults();
        self.z_counter = self.layout.max_z().max(BASE_Z);
        self.focus = initial_active_window();
        self.dirty = true;
        tracing::debug!("reset window layout");
    }

    fn set_position(&mut self, id: WindowId, origin: Vec2) -> bool {
        let state = &mut self.layout[id];
        if state.is_at(origin) {
            return false;
        }
        state.x = origin.x;
        state.y = origin.y;
        self.dirty = true;
        true
    }
}
