//! Geometry types for window placement
//!
//! All coordinates are CSS pixels relative to the desktop canvas.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;

/// Clamp a window origin so a window of `window` size stays inside `canvas`.
///
/// A window larger than the canvas is pinned to the top-left edge.
#[inline]
pub fn clamp_origin(origin: Vec2, canvas: Size, window: Size) -> Vec2 {
    let max_x = (canvas.width - window.width).max(0.0);
    let max_y = (canvas.height - window.height).max(0.0);
    Vec2::new(origin.x.max(0.0).min(max_x), origin.y.max(0.0).min(max_y))
}

/// Origin that centers a window of `window` size inside `canvas`, rounded to whole pixels.
#[inline]
pub fn centered_origin(canvas: Size, window: Size) -> Vec2 {
    let max_x = (canvas.width - window.width).max(0.0);
    let max_y = (canvas.height - window.height).max(0.0);
    Vec2::new((max_x / 2.0).round(), (max_y / 2.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_origin_inside() {
        let p = clamp_origin(Vec2::new(100.0, 50.0), Size::new(1000.0, 800.0), Size::new(400.0, 300.0));
        assert!((p.x - 100.0).abs() < 0.001);
        assert!((p.y - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_origin_overflow() {
        let p = clamp_origin(Vec2::new(900.0, -20.0), Size::new(1000.0, 800.0), Size::new(400.0, 300.0));
        assert!((p.x - 600.0).abs() < 0.001);
        assert!((p.y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_origin_window_larger_than_canvas() {
        let p = clamp_origin(Vec2::new(50.0, 50.0), Size::new(300.0, 200.0), Size::new(400.0, 300.0));
        assert!((p.x - 0.0).abs() < 0.001);
        assert!((p.y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_centered_origin_rounds() {
        let p = centered_origin(Size::new(1001.0, 800.0), Size::new(500.0, 301.0));
        assert!((p.x - 251.0).abs() < 0.001);
        assert!((p.y - 250.0).abs() < 0.001);
    }
}
