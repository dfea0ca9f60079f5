//! Axis-aligned rectangle, used for the measured canvas bounds

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Rectangle in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Width and height
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check whether `inner`, placed at `origin` relative to this rect, fits entirely inside
    pub fn fits(&self, origin: Vec2, inner: Size) -> bool {
        origin.x >= 0.0
            && origin.y >= 0.0
            && origin.x + inner.width <= self.width
            && origin.y + inner.height <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_parts() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.origin(), Vec2::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_rect_fits() {
        let canvas = Rect::new(0.0, 40.0, 800.0, 600.0);
        assert!(canvas.fits(Vec2::new(0.0, 0.0), Size::new(800.0, 600.0)));
        assert!(!canvas.fits(Vec2::new(1.0, 0.0), Size::new(800.0, 600.0)));
        assert!(!canvas.fits(Vec2::new(-1.0, 0.0), Size::new(10.0, 10.0)));
    }
}
