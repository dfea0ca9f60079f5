//! Viewport width breakpoints

use serde::Deserialize;

/// Minimum viewport width for the desktop layout
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

/// Maximum viewport width for the mobile layout
pub const MOBILE_MAX_WIDTH: f64 = 767.0;

/// Viewport breakpoints, one per media query
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// `(min-width: ..)` for the desktop layout
    pub desktop_min_width: f64,
    /// `(max-width: ..)` for the mobile layout
    pub mobile_max_width: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            desktop_min_width: DESKTOP_MIN_WIDTH,
            mobile_max_width: MOBILE_MAX_WIDTH,
        }
    }
}

impl Breakpoints {
    /// Desktop media query
    #[inline]
    pub fn is_desktop(&self, viewport_width: f64) -> bool {
        viewport_width >= self.desktop_min_width
    }

    /// Mobile media query
    #[inline]
    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_max_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breakpoints() {
        let bp = Breakpoints::default();

        assert!(bp.is_desktop(1024.0));
        assert!(!bp.is_desktop(1023.0));
        assert!(bp.is_mobile(767.0));
        assert!(!bp.is_mobile(768.0));
    }

    #[test]
    fn test_tablet_width_is_neither() {
        let bp = Breakpoints::default();
        assert!(!bp.is_desktop(900.0));
        assert!(!bp.is_mobile(900.0));
    }

    #[test]
    fn test_partial_config() {
        let bp: Breakpoints = serde_json::from_str(r#"{"desktop_min_width": 1280}"#).unwrap();
        assert!((bp.desktop_min_width - 1280.0).abs() < 0.001);
        assert!((bp.mobile_max_width - MOBILE_MAX_WIDTH).abs() < 0.001);
    }
}
