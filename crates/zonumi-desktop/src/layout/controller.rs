//! Viewport observation and layout mode switching

use std::rc::Rc;

use super::{Breakpoints, LayoutMode, RootStyle, ScrollLock};

/// What changed on a viewport update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutChange {
    /// First update since mount
    pub initial: bool,
    /// Desktop flag before the update
    pub was_desktop: bool,
    /// Desktop flag after the update
    pub is_desktop: bool,
    /// Mobile flag flipped
    pub mobile_changed: bool,
}

impl LayoutChange {
    /// Desktop layout turned on after mount
    #[inline]
    pub fn entered_desktop(&self) -> bool {
        !self.initial && !self.was_desktop && self.is_desktop
    }

    /// Desktop layout turned off
    #[inline]
    pub fn left_desktop(&self) -> bool {
        !self.initial && self.was_desktop && !self.is_desktop
    }

    /// Desktop layout is on and was not on before (including at mount)
    #[inline]
    pub fn desktop_activated(&self) -> bool {
        self.is_desktop && (self.initial || !self.was_desktop)
    }
}

/// Tracks the desktop and mobile media queries
#[derive(Default)]
pub struct LayoutController {
    breakpoints: Breakpoints,
    viewport_width: Option<f64>,
    desktop: bool,
    mobile: bool,
    root: Option<Rc<dyn RootStyle>>,
    scroll_lock: Option<ScrollLock>,
}

impl std::fmt::Debug for LayoutController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutController")
            .field("breakpoints", &self.breakpoints)
            .field("viewport_width", &self.viewport_width)
            .field("desktop", &self.desktop)
            .field("mobile", &self.mobile)
            .field("scroll_lock", &self.scroll_lock)
            .finish_non_exhaustive()
    }
}

impl LayoutController {
    /// Create a controller; no layout is active until the first viewport update
    pub fn new(breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            ..Self::default()
        }
    }

    /// Attach the document root used for the scroll lock
    pub fn set_root_style(&mut self, root: Rc<dyn RootStyle>) {
        self.root = Some(root);
    }

    /// Current rendering mode
    #[inline]
    pub fn mode(&self) -> LayoutMode {
        if self.desktop {
            LayoutMode::Desktop
        } else {
            LayoutMode::Stacked
        }
    }

    /// Viewport is at least the desktop width
    #[inline]
    pub fn is_desktop(&self) -> bool {
        self.desktop
    }

    /// Viewport is at most the mobile width
    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Last observed viewport width
    #[inline]
    pub fn viewport_width(&self) -> Option<f64> {
        self.viewport_width
    }

    /// Whether the page scroll lock is held
    #[inline]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_some()
    }

    /// Re-evaluate both media queries for a new viewport width
    pub fn update_viewport(&mut self, width: f64) -> LayoutChange {
        let initial = self.viewport_width.is_none();
        let was_desktop = self.desktop;
        let was_mobile = self.mobile;

        self.viewport_width = Some(width);
        self.desktop = self.breakpoints.is_desktop(width);
        self.mobile = self.breakpoints.is_mobile(width);

        let change = LayoutChange {
            initial,
            was_desktop,
            is_desktop: self.desktop,
            mobile_changed: !initial && was_mobile != self.mobile,
        };

        if self.desktop {
            if self.scroll_lock.is_none() {
                self.scroll_lock = self.root.clone().map(ScrollLock::acquire);
            }
        } else {
            self.scroll_lock = None;
        }

        if initial || change.is_desktop != was_desktop || change.mobile_changed {
            tracing::debug!(
                width,
                mode = ?self.mode(),
                mobile = self.mobile,
                "layout mode updated"
            );
        }
        change
    }

    /// Release the scroll lock and forget the viewport (unmount)
    pub fn release(&mut self) {
        self.scroll_lock = None;
        self.viewport_width = None;
        self.desktop = false;
        self.mobile = false;
    }
}
