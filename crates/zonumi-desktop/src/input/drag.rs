//! Drag session for moving a window

use crate::math::Vec2;
use crate::window::WindowId;

/// An in-progress window move
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Window being moved
    pub window_id: WindowId,
    /// Offset from the window origin to the pointer, in canvas space
    pub offset: Vec2,
}

impl DragSession {
    /// Start a session from the pointer and window origin, both in canvas space
    pub fn grab(window_id: WindowId, pointer: Vec2, window_origin: Vec2) -> Self {
        Self {
            window_id,
            offset: pointer - window_origin,
        }
    }

    /// Window origin that keeps the grab point under `pointer` (canvas space)
    #[inline]
    pub fn origin_for(&self, pointer: Vec2) -> Vec2 {
        pointer - self.offset
    }
}
