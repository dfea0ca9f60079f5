//! Static window catalog

use super::{WindowId, WindowState};

/// Static description of a window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowDescriptor {
    pub id: WindowId,
    /// Title bar text
    pub title: &'static str,
    /// Width in desktop layout (CSS pixels)
    pub default_width: f64,
    /// Position and stacking order before any user interaction
    pub initial: WindowState,
    /// Whether the window is shown when the page first loads
    pub open_by_default: bool,
}

/// Window that receives focus when the focused window is closed
pub const FALLBACK_WINDOW: WindowId = WindowId::Profile;

/// Window that is centered the first time it is opened
pub const CONTACT_WINDOW: WindowId = WindowId::Contact;

const PROFILE: WindowDescriptor = WindowDescriptor {
    id: WindowId::Profile,
    title: "Profile",
    default_width: 860.0,
    initial: WindowState::new(48.0, 24.0, 1),
    open_by_default: true,
};

const EDUCATION: WindowDescriptor = WindowDescriptor {
    id: WindowId::Education,
    title: "Education",
    default_width: 470.0,
    initial: WindowState::new(944.0, 30.0, 2),
    open_by_default: true,
};

const EXPERIENCE: WindowDescriptor = WindowDescriptor {
    id: WindowId::Experience,
    title: "Experience",
    default_width: 470.0,
    initial: WindowState::new(960.0, 292.0, 3),
    open_by_default: true,
};

const PROJECTS: WindowDescriptor = WindowDescriptor {
    id: WindowId::Projects,
    title: "Projects",
    default_width: 860.0,
    initial: WindowState::new(64.0, 302.0, 4),
    open_by_default: true,
};

const CONTACT: WindowDescriptor = WindowDescriptor {
    id: WindowId::Contact,
    title: "Contact",
    default_width: 520.0,
    initial: WindowState::new(980.0, 120.0, 5),
    open_by_default: false,
};

impl WindowId {
    /// Static descriptor for this window
    pub const fn descriptor(self) -> &'static WindowDescriptor {
        match self {
            WindowId::Profile => &PROFILE,
            WindowId::Education => &EDUCATION,
            WindowId::Projects => &PROJECTS,
            WindowId::Experience => &EXPERIENCE,
            WindowId::Contact => &CONTACT,
        }
    }
}

/// Window that is active on a fresh load: the topmost of the windows open by default
pub fn initial_active_window() -> WindowId {
    WindowId::ALL
        .into_iter()
        .filter(|id| id.descriptor().open_by_default)
        .max_by_key(|id| id.descriptor().initial.z)
        .unwrap_or(FALLBACK_WINDOW)
}
