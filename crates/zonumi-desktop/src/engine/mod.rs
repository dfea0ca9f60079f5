//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window show/close/focus and layout reset
//! - `input`: Drag operations
//! - `viewport`: Media query updates, canvas measurement, deferred frame work
//! - `transitions`: Boot overlay ticking
//! - `rendering`: View snapshot for the host

mod input;
mod rendering;
mod transitions;
mod viewport;
mod windows;

use crate::config::DesktopConfig;
use crate::contact::{
    copied_feedback_visible, copy_email, Clipboard, ContactAvailability, ContactForm, EmailAction,
};
use crate::input::InputRouter;
use crate::layout::{FrameQueue, LayoutController};
use crate::math::{Rect, Size};
use crate::menu::{MenuAction, MenuBar, MenuCommand, MenuKey};
use crate::persistence::{PositionStore, Storage};
use crate::transition::BootSequence;
use crate::window::{WindowId, WindowManager};

pub use rendering::{BootView, DesktopView, MenuView, WindowView};

/// Desktop engine coordinating all desktop components
///
/// One engine exists per mounted desktop. It owns:
/// - Window manager (visibility, focus, z-order, placement)
/// - Position store (layout persistence)
/// - Layout controller (media queries, scroll lock)
/// - Input router (drag session)
/// - Frame queue (deferred clamp/recenter passes)
/// - Menu bar and boot overlay
///
/// Every operation that changes placement writes the whole layout back to
/// storage before returning.
pub struct DesktopEngine<S: Storage> {
    config: DesktopConfig,
    windows: WindowManager,
    store: PositionStore<S>,
    layout: LayoutController,
    input: InputRouter,
    frames: FrameQueue,
    /// Canvas bounds in client coordinates; `None` until measured
    canvas: Option<Rect>,
    /// Rendered size per window; `None` while not mounted
    measured: [Option<Size>; WindowId::COUNT],
    boot: Option<BootSequence>,
    menu: MenuBar,
    /// Time of the last successful email copy
    email_copied_at: Option<f64>,
}

impl<S: Storage> DesktopEngine<S> {
    /// Create an engine with the default configuration
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, DesktopConfig::default())
    }

    /// Create an engine, restoring the stored layout merged over defaults
    pub fn with_config(storage: S, config: DesktopConfig) -> Self {
        let store = PositionStore::with_key(storage, &config.storage_key);
        let windows = WindowManager::new(store.load_or_default());
        let layout = LayoutController::new(config.breakpoints);
        Self {
            config,
            windows,
            store,
            layout,
            input: InputRouter::new(),
            frames: FrameQueue::new(),
            canvas: None,
            measured: [None; WindowId::COUNT],
            boot: None,
            menu: MenuBar::new(),
            email_copied_at: None,
        }
    }

    /// Active configuration
    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Window manager state
    #[inline]
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    /// Media query and scroll lock state
    #[inline]
    pub fn layout(&self) -> &LayoutController {
        &self.layout
    }

    /// Drag state
    #[inline]
    pub fn input(&self) -> &InputRouter {
        &self.input
    }

    /// Menu bar and About dialog state
    #[inline]
    pub fn menu(&self) -> &MenuBar {
        &self.menu
    }

    /// Position store and its backend
    #[inline]
    pub fn store(&self) -> &PositionStore<S> {
        &self.store
    }

    /// Number of deferred tasks waiting for a frame
    #[inline]
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Open or close a menu
    pub fn menu_toggle(&mut self, key: MenuKey) {
        self.menu.toggle(key);
    }

    /// Close the open menu (global click, Escape)
    pub fn dismiss_menu(&mut self) {
        self.menu.dismiss();
    }

    /// Close the About dialog
    pub fn close_about(&mut self) {
        self.menu.close_about();
    }

    /// Activate a menu entry
    pub fn menu_action(&mut self, action: MenuAction) -> Option<MenuCommand> {
        let command = self.menu.activate(action);
        if let Some(MenuCommand::ShowWindow(id)) = command {
            self.show_window(id);
        }
        command
    }

    /// Whether the contact form can be used
    pub fn contact_availability(&self) -> ContactAvailability {
        self.config.contact.availability()
    }

    /// Mount a contact form backed by `storage`
    pub fn contact_form<C: Storage>(&self, storage: C, now_ms: f64) -> ContactForm<C> {
        ContactForm::with_key(
            storage,
            &self.config.contact_cooldown_key,
            self.contact_availability(),
            now_ms,
        )
    }

    /// Copy the contact address, or get a `mailto:` link if the clipboard refuses
    pub fn copy_contact_email<C: Clipboard + ?Sized>(
        &mut self,
        clipboard: &mut C,
        now_ms: f64,
    ) -> EmailAction {
        let action = copy_email(clipboard, &self.config.contact.email);
        if action == EmailAction::Copied {
            self.email_copied_at = Some(now_ms);
        }
        action
    }

    /// Whether the "email copied" label should be shown at `now_ms`
    pub fn is_email_copied(&self, now_ms: f64) -> bool {
        self.email_copied_at
            .is_some_and(|at| copied_feedback_visible(at, now_ms))
    }

    /// Write the layout back if it changed
    pub(crate) fn persist(&mut self) {
        if !self.windows.take_dirty() {
            return;
        }
        if let Err(err) = self.store.save(self.windows.layout()) {
            tracing::warn!(%err, "failed to save window layout");
        }
    }
}

impl<S: Storage> std::fmt::Debug for DesktopEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopEngine")
            .field("windows", &self.windows)
            .field("layout", &self.layout)
            .field("input", &self.input)
            .field("canvas", &self.canvas)
            .field("pending_frames", &self.frames.len())
            .finish_non_exhaustive()
    }
}
