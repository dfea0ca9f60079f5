//! Per-window placement and visibility

use std::ops::{Index, IndexMut};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::math::Vec2;
use super::WindowId;

/// Position and stacking order of one window
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    /// Left edge relative to the canvas
    pub x: f64,
    /// Top edge relative to the canvas
    pub y: f64,
    /// Stacking order (higher is in front)
    pub z: u64,
}

impl WindowState {
    /// Create a new window state
    #[inline]
    pub const fn new(x: f64, y: f64, z: u64) -> Self {
        Self { x, y, z }
    }

    /// Top-left corner
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Whether the top-left corner is exactly at `position`
    #[inline]
    pub fn is_at(&self, position: Vec2) -> bool {
        self.x == position.x && self.y == position.y
    }
}

/// Placement of every window, total over [`WindowId`]
///
/// Serializes as `{ "<window key>": { "x": .., "y": .., "z": .. }, .. }`.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowLayout {
    states: [WindowState; WindowId::COUNT],
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self::defaults()
    }
}

impl WindowLayout {
    /// Layout with every window at its registry default
    pub fn defaults() -> Self {
        Self {
            states: WindowId::ALL.map(|id| id.descriptor().initial),
        }
    }

    /// Get the state of a window
    #[inline]
    pub fn get(&self, id: WindowId) -> &WindowState {
        &self.states[id.index()]
    }

    /// Replace the state of a window
    #[inline]
    pub fn set(&mut self, id: WindowId, state: WindowState) {
        self.states[id.index()] = state;
    }

    /// Iterate windows in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (WindowId, &WindowState)> {
        WindowId::ALL.into_iter().zip(self.states.iter())
    }

    /// Highest z among all windows
    pub fn max_z(&self) -> u64 {
        self.states.iter().map(|s| s.z).max().unwrap_or(0)
    }

    /// Compact z values to `1..=COUNT`, keeping the stacking order
    ///
    /// Ties keep catalog order. Returns the new highest z.
    pub fn renumber_z(&mut self) -> u64 {
        let mut order = WindowId::ALL;
        order.sort_by_key(|&id| self.states[id.index()].z);
        for (z, id) in (1..).zip(order) {
            self.states[id.index()].z = z;
        }
        WindowId::COUNT as u64
    }
}

impl Index<WindowId> for WindowLayout {
    type Output = WindowState;

    fn index(&self, id: WindowId) -> &WindowState {
        &self.states[id.index()]
    }
}

impl IndexMut<WindowId> for WindowLayout {
    fn index_mut(&mut self, id: WindowId) -> &mut WindowState {
        &mut self.states[id.index()]
    }
}

impl Serialize for WindowLayout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(WindowId::COUNT))?;
        for (id, state) in self.iter() {
            map.serialize_entry(id.key(), state)?;
        }
        map.end()
    }
}

/// Whether a window is mounted on the desktop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    /// Whether the window is shown
    #[inline]
    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

/// Derived per-window state
///
/// At most one window is `Active`; a hidden window is never `Active`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStatus {
    Hidden,
    Inactive,
    Active,
}
