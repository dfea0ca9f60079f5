//! Window manager for the Zonumi retro desktop
//!
//! This crate provides the state behind the portfolio desktop:
//! - Window management (show, close, focus, z-order)
//! - Layout persistence with merge-over-defaults recovery
//! - Desktop/stacked layout switching and page scroll locking
//! - Dragging with canvas clamping
//! - Boot overlay, menu bar, and the contact boundary
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`) and clamping
//! - [`window`]: Window catalog, placement, and the window manager
//! - [`persistence`]: Storage abstraction and layout snapshots
//! - [`layout`]: Breakpoints, deferred frame work, scroll lock
//! - [`input`]: Drag session state
//! - [`transition`]: Boot overlay sequence
//! - [`menu`]: Menu bar state
//! - [`contact`]: Contact form validation and copy-email action
//! - [`content`]: Read-only content records
//!
//! ## Example
//!
//! ```rust
//! use zonumi_desktop::{DesktopEngine, MemoryStorage, Rect, Size, Vec2, WindowId};
//!
//! let mut engine = DesktopEngine::new(MemoryStorage::new());
//! engine.mount(1440.0, 0.0);
//! engine.canvas_resized(Rect::new(0.0, 32.0, 1440.0, 868.0));
//! engine.window_resized(WindowId::Profile, Size::new(860.0, 480.0));
//!
//! engine.begin_drag(WindowId::Profile, Vec2::new(60.0, 60.0));
//! engine.drag_move(Vec2::new(260.0, 160.0));
//! engine.end_drag();
//!
//! assert_eq!(engine.windows().active_window(), WindowId::Profile);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state is plain Rust, testable without a browser
//! 2. **Host Supplies Measurements**: Canvas and window sizes are passed in
//! 3. **Time Abstraction**: Every timed operation takes `now_ms`

pub mod contact;
pub mod content;
pub mod input;
pub mod layout;
pub mod math;
pub mod menu;
pub mod persistence;
pub mod transition;
pub mod window;

mod config;
mod engine;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use config::{ContactConfig, DesktopConfig, FORM_ID_ENV};
pub use contact::{ContactAvailability, ContactDraft, ContactError, ContactForm, EmailAction};
pub use engine::{BootView, DesktopEngine, DesktopView, MenuView, WindowView};
pub use error::{DesktopError, DesktopResult, StorageError};
pub use input::{DragSession, InputRouter};
pub use layout::{Breakpoints, FrameTask, LayoutChange, LayoutMode, RootElement, RootStyle};
pub use math::{Rect, Size, Vec2};
pub use menu::{MenuAction, MenuBar, MenuCommand, MenuKey};
pub use persistence::{MemoryStorage, PositionStore, Storage};
pub use transition::{BootPhase, BootSequence};
pub use window::{
    ShowOutcome, Visibility, WindowId, WindowLayout, WindowManager, WindowState, WindowStatus,
};

/// Storage key of the window layout snapshot
pub use persistence::WINDOW_POSITION_STORAGE_KEY;
