//! View snapshot for rendering

use serde::Serialize;

use crate::contact::ContactAvailability;
use crate::layout::LayoutMode;
use crate::menu::MenuKey;
use crate::persistence::Storage;
use crate::transition::BootPhase;
use crate::window::{WindowId, WindowState, WindowStatus};
use super::DesktopEngine;

/// One shown window as the host should draw it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowView {
    pub id: WindowId,
    pub title: &'static str,
    pub status: WindowStatus,
    /// Width in the desktop layout
    pub width: f64,
    /// Absolute placement; `None` in the stacked layout
    pub placement: Option<WindowState>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BootView {
    pub phase: BootPhase,
    /// Filled progress cells
    pub progress: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub active: Option<MenuKey>,
    pub about_open: bool,
}

/// Everything the host needs for one render
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesktopView {
    pub mode: LayoutMode,
    pub mobile: bool,
    pub active_window: WindowId,
    /// Shown windows, back to front in the desktop layout, catalog order otherwise
    pub windows: Vec<WindowView>,
    /// `None` once the overlay is gone
    pub boot: Option<BootView>,
    pub menu: MenuView,
    pub contact: ContactAvailability,
    /// "Email copied" label is up
    pub email_copied: bool,
}

impl<S: Storage> DesktopEngine<S> {
    /// Shown windows for rendering
    pub fn window_views(&self) -> Vec<WindowView> {
        let desktop = self.layout.is_desktop();
        let mut views: Vec<WindowView> = self
            .windows
            .shown_windows()
            .map(|id| {
                let descriptor = id.descriptor();
                WindowView {
                    id,
                    title: descriptor.title,
                    status: self.windows.status(id),
                    width: descriptor.default_width,
                    placement: desktop.then(|| *self.windows.state(id)),
                }
            })
            .collect();

        if desktop {
            views.sort_by_key(|v| v.placement.map_or(0, |p| p.z));
        }
        views
    }

    /// Full view snapshot at `now_ms`
    pub fn view(&self, now_ms: f64) -> DesktopView {
        DesktopView {
            mode: self.layout.mode(),
            mobile: self.layout.is_mobile(),
            active_window: self.windows.active_window(),
            windows: self.window_views(),
            boot: self
                .boot
                .as_ref()
                .filter(|b| b.is_overlay_visible())
                .map(|b| BootView {
                    phase: b.phase(),
                    progress: b.progress(now_ms),
                }),
            menu: MenuView {
                active: self.menu.active(),
                about_open: self.menu.is_about_open(),
            },
            contact: self.contact_availability(),
            email_copied: self.is_email_copied(now_ms),
        }
    }
}
