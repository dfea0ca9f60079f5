//! Window identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;

/// Identifier of one of the fixed desktop windows
///
/// The set is closed: adding a window means adding a variant here and an
/// arm in [`WindowId::descriptor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WindowId {
    #[serde(rename = "about-profile")]
    Profile,
    #[serde(rename = "about-certs")]
    Education,
    #[serde(rename = "about-project")]
    Projects,
    #[serde(rename = "about-experience")]
    Experience,
    #[serde(rename = "about-contact")]
    Contact,
}

impl WindowId {
    /// Number of windows
    pub const COUNT: usize = 5;

    /// Every window, in catalog order
    pub const ALL: [WindowId; WindowId::COUNT] = [
        WindowId::Profile,
        WindowId::Education,
        WindowId::Projects,
        WindowId::Experience,
        WindowId::Contact,
    ];

    /// Dense index for array-backed per-window tables
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Key used in the persisted snapshot and in DOM `data-window-id` attributes
    pub const fn key(self) -> &'static str {
        match self {
            WindowId::Profile => "about-profile",
            WindowId::Education => "about-certs",
            WindowId::Projects => "about-project",
            WindowId::Experience => "about-experience",
            WindowId::Contact => "about-contact",
        }
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WindowId {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WindowId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| DesktopError::UnknownWindow(s.to_string()))
    }
}
