//! Input router state machine

use crate::math::Vec2;
use crate::window::WindowId;
use super::DragSession;

/// Input router managing the drag session
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    /// Current drag session
    drag: Option<DragSession>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag session
    #[inline]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start moving a window; `pointer` and `window_origin` are in canvas space
    pub fn start_window_move(&mut self, window_id: WindowId, pointer: Vec2, window_origin: Vec2) {
        self.drag = Some(DragSession::grab(window_id, pointer, window_origin));
    }

    /// End current drag operation; no-op without a session
    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_router_move() {
        let mut router = InputRouter::new();
        assert!(!router.is_dragging());

        router.start_window_move(WindowId::Education, Vec2::new(30.0, 20.0), Vec2::new(10.0, 10.0));
        assert!(router.is_dragging());

        let session = router.drag_session().unwrap();
        assert_eq!(session.window_id, WindowId::Education);
        assert!((session.offset.x - 20.0).abs() < 0.001);
        assert!((session.offset.y - 10.0).abs() < 0.001);

        router.end_drag();
        assert!(!router.is_dragging());
    }

    #[test]
    fn test_end_drag_is_idempotent() {
        let mut router = InputRouter::new();
        router.end_drag();
        router.end_drag();
        assert!(router.drag_session().is_none());
    }

    #[test]
    fn test_new_session_replaces_old() {
        let mut router = InputRouter::new();
        router.start_window_move(WindowId::Profile, Vec2::ZERO, Vec2::ZERO);
        router.start_window_move(WindowId::Contact, Vec2::new(3.0, 4.0), Vec2::ZERO);
        assert_eq!(router.drag_session().unwrap().window_id, WindowId::Contact);
    }
}
