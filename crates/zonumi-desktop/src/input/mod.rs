//! Input routing module
//!
//! Tracks the pointer drag session used to move windows.

mod drag;
mod router;

pub use drag::DragSession;
pub use router::InputRouter;
