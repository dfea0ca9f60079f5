//! Menu bar state
//!
//! The menu bar has two drop-down menus. Opening a window from a menu goes
//! through [`DesktopEngine::menu_action`](crate::DesktopEngine::menu_action).

use serde::Serialize;

use crate::window::WindowId;

/// Top-level menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKey {
    View,
    Help,
}

impl MenuKey {
    /// Menus in menu bar order
    pub const ALL: [MenuKey; 2] = [MenuKey::View, MenuKey::Help];

    /// Label shown on the menu trigger
    pub fn label(self) -> &'static str {
        match self {
            MenuKey::View => "View",
            MenuKey::Help => "Help",
        }
    }

    /// Entries of this menu, top to bottom
    pub fn items(self) -> &'static [MenuItem] {
        match self {
            MenuKey::View => &VIEW_ITEMS,
            MenuKey::Help => &HELP_ITEMS,
        }
    }
}

/// What a menu entry does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// Show and focus a window
    Open(WindowId),
    /// Open the About dialog
    About,
    /// Divider line; does nothing
    Separator,
}

/// One menu entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

static VIEW_ITEMS: [MenuItem; 4] = [
    MenuItem { label: "Profile", action: MenuAction::Open(WindowId::Profile) },
    MenuItem { label: "Education", action: MenuAction::Open(WindowId::Education) },
    MenuItem { label: "Projects", action: MenuAction::Open(WindowId::Projects) },
    MenuItem { label: "Experience", action: MenuAction::Open(WindowId::Experience) },
];

static HELP_ITEMS: [MenuItem; 3] = [
    MenuItem { label: "Contact...", action: MenuAction::Open(WindowId::Contact) },
    MenuItem { label: "", action: MenuAction::Separator },
    MenuItem { label: "About", action: MenuAction::About },
];

/// Command produced by activating a menu entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    ShowWindow(WindowId),
    OpenAbout,
}

/// Open menu and About dialog state
#[derive(Clone, Debug, Default)]
pub struct MenuBar {
    active: Option<MenuKey>,
    about_open: bool,
}

impl MenuBar {
    /// Create a menu bar with every menu closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently open menu
    #[inline]
    pub fn active(&self) -> Option<MenuKey> {
        self.active
    }

    /// Whether the About dialog is open
    #[inline]
    pub fn is_about_open(&self) -> bool {
        self.about_open
    }

    /// Open `key`, or close it if it is already open
    pub fn toggle(&mut self, key: MenuKey) {
        self.active = if self.active == Some(key) { None } else { Some(key) };
    }

    /// Close any open menu (global click, Escape)
    pub fn dismiss(&mut self) {
        self.active = None;
    }

    /// Close the About dialog
    pub fn close_about(&mut self) {
        self.about_open = false;
    }

    /// Activate an entry: closes the menu and returns what to do
    pub fn activate(&mut self, action: MenuAction) -> Option<MenuCommand> {
        match action {
            MenuAction::Separator => None,
            MenuAction::Open(id) => {
                self.active = None;
                Some(MenuCommand::ShowWindow(id))
            }
            MenuAction::About => {
                self.active = None;
                self.about_open = true;
                Some(MenuCommand::OpenAbout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut bar = MenuBar::new();
        bar.toggle(MenuKey::View);
        assert_eq!(bar.active(), Some(MenuKey::View));

        bar.toggle(MenuKey::Help);
        assert_eq!(bar.active(), Some(MenuKey::Help));

        bar.toggle(MenuKey::Help);
        assert_eq!(bar.active(), None);
    }

    #[test]
    fn test_dismiss() {
        let mut bar = MenuBar::new();
        bar.toggle(MenuKey::View);
        bar.dismiss();
        assert_eq!(bar.active(), None);
    }

    #[test]
    fn test_activate_open() {
        let mut bar = MenuBar::new();
        bar.toggle(MenuKey::Help);

        let cmd = bar.activate(MenuAction::Open(WindowId::Contact));
        assert_eq!(cmd, Some(MenuCommand::ShowWindow(WindowId::Contact)));
        assert_eq!(bar.active(), None);
    }

    #[test]
    fn test_activate_about() {
        let mut bar = MenuBar::new();
        assert_eq!(bar.activate(MenuAction::About), Some(MenuCommand::OpenAbout));
        assert!(bar.is_about_open());

        bar.close_about();
        assert!(!bar.is_about_open());
    }

    #[test]
    fn test_separator_keeps_menu_open() {
        let mut bar = MenuBar::new();
        bar.toggle(MenuKey::Help);
        assert_eq!(bar.activate(MenuAction::Separator), None);
        assert_eq!(bar.active(), Some(MenuKey::Help));
    }

    #[test]
    fn test_every_window_reachable_from_menus() {
        for id in WindowId::ALL {
            let found = MenuKey::ALL
                .iter()
                .flat_map(|key| key.items())
                .any(|item| item.action == MenuAction::Open(id));
            assert!(found, "{id} has no menu entry");
        }
    }
}
