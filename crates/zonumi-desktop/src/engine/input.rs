//! Drag operations

use crate::math::{Size, Vec2};
use crate::persistence::Storage;
use crate::window::WindowId;
use super::DesktopEngine;

impl<S: Storage> DesktopEngine<S> {
    /// Pointer down on a title bar; `pointer` is in client coordinates
    ///
    /// Ignored outside the desktop layout. The window is brought to front
    /// even if the canvas has not been measured yet, but no drag starts.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Vec2) -> bool {
        if !self.layout.is_desktop() {
            return false;
        }

        self.windows.bring_to_front(id);
        if let Some(canvas) = self.canvas {
            let origin = self.windows.state(id).position();
            self.input.start_window_move(id, pointer - canvas.origin(), origin);
        }
        self.persist();
        true
    }

    /// Pointer move anywhere on the page
    ///
    /// Returns true if the dragged window moved. Non-finite pointers are ignored.
    pub fn drag_move(&mut self, pointer: Vec2) -> bool {
        if !pointer.is_finite() {
            return false;
        }
        let Some(session) = self.input.drag_session().copied() else {
            return false;
        };
        let Some(canvas) = self.canvas else {
            return false;
        };

        let window = self.measured[session.window_id.index()].unwrap_or(Size::ZERO);
        let origin = session.origin_for(pointer - canvas.origin());
        let moved = self.windows.move_clamped(session.window_id, origin, canvas.size(), window);
        if moved {
            let state = self.windows.state(session.window_id);
            tracing::trace!(window = %session.window_id, x = state.x, y = state.y, "drag move");
            self.persist();
        }
        moved
    }

    /// Pointer up anywhere on the page
    pub fn end_drag(&mut self) {
        self.input.end_drag();
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::DesktopEngine;
    use crate::math::{Rect, Size, Vec2};
    use crate::persistence::MemoryStorage;
    use crate::window::{WindowId, BASE_Z};

    fn engine(width: f64) -> DesktopEngine<MemoryStorage> {
        let mut engine = DesktopEngine::new(MemoryStorage::new());
        engine.mount(width, 0.0);
        engine.canvas_resized(Rect::new(0.0, 30.0, 1400.0, 870.0));
        engine.window_resized(WindowId::Profile, Size::new(860.0, 400.0));
        engine
    }

    #[test]
    fn test_drag_moves_window() {
        let mut engine = engine(1400.0);
        // Profile defaults to (48, 24); grab 10px right of and 5px below its corner
        assert!(engine.begin_drag(WindowId::Profile, Vec2::new(58.0, 59.0)));
        assert_eq!(engine.windows().state(WindowId::Profile).z, BASE_Z + 1);

        assert!(engine.drag_move(Vec2::new(210.0, 135.0)));
        let state = engine.windows().state(WindowId::Profile);
        assert!((state.x - 200.0).abs() < 0.001);
        assert!((state.y - 100.0).abs() < 0.001);
        assert_eq!(state.z, BASE_Z + 1);
    }

    #[test]
    fn test_drag_is_clamped() {
        let mut engine = engine(1400.0);
        engine.begin_drag(WindowId::Profile, Vec2::new(58.0, 59.0));

        engine.drag_move(Vec2::new(5000.0, 5000.0));
        let state = engine.windows().state(WindowId::Profile);
        assert!((state.x - 540.0).abs() < 0.001);
        assert!((state.y - 470.0).abs() < 0.001);

        engine.drag_move(Vec2::new(-300.0, -300.0));
        let state = engine.windows().state(WindowId::Profile);
        assert!(state.x.abs() < 0.001);
        assert!(state.y.abs() < 0.001);
    }

    #[test]
    fn test_non_finite_pointer_is_ignored() {
        let mut engine = engine(1400.0);
        engine.begin_drag(WindowId::Profile, Vec2::new(58.0, 59.0));
        let before = *engine.windows().state(WindowId::Profile);

        assert!(!engine.drag_move(Vec2::new(f64::NAN, 100.0)));
        assert!(!engine.drag_move(Vec2::new(200.0, f64::INFINITY)));
        assert_eq!(*engine.windows().state(WindowId::Profile), before);
        assert!(engine.input().is_dragging());
    }

    #[test]
    fn test_unmeasured_window_counts_as_empty() {
        let mut engine = engine(1400.0);
        engine.begin_drag(WindowId::Education, Vec2::new(944.0, 60.0));

        engine.drag_move(Vec2::new(1500.0, 1000.0));
        let state = engine.windows().state(WindowId::Education);
        assert!((state.x - 1400.0).abs() < 0.001);
        assert!((state.y - 870.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_ignored_in_stacked_layout() {
        let mut engine = engine(800.0);
        let before = engine.windows().layout().clone();

        assert!(!engine.begin_drag(WindowId::Profile, Vec2::new(58.0, 59.0)));
        assert!(!engine.input().is_dragging());
        assert!(!engine.drag_move(Vec2::new(300.0, 300.0)));
        assert_eq!(*engine.windows().layout(), before);
    }

    #[test]
    fn test_begin_drag_without_canvas_only_focuses() {
        let mut engine = DesktopEngine::new(MemoryStorage::new());
        engine.mount(1400.0, 0.0);

        assert!(engine.begin_drag(WindowId::Experience, Vec2::new(10.0, 10.0)));
        assert_eq!(engine.windows().active_window(), WindowId::Experience);
        assert!(!engine.input().is_dragging());
    }

    #[test]
    fn test_end_drag_twice() {
        let mut engine = engine(1400.0);
        engine.begin_drag(WindowId::Profile, Vec2::new(58.0, 59.0));
        engine.end_drag();
        engine.end_drag();
        assert!(!engine.input().is_dragging());
        assert!(!engine.drag_move(Vec2::new(400.0, 400.0)));
    }
}
