//! Window management module
//!
//! Provides the fixed window catalog, per-window placement, and the
//! show/hide/focus state machine.

mod id;
mod manager;
mod registry;
mod state;

pub use id::WindowId;
pub use manager::{ShowOutcome, WindowManager, BASE_Z};
pub use registry::{initial_active_window, WindowDescriptor, CONTACT_WINDOW, FALLBACK_WINDOW};
pub use state::{Visibility, WindowLayout, WindowState, WindowStatus};
