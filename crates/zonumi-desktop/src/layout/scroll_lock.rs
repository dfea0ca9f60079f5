//! Page scroll lock held while the desktop layout is active

use std::fmt;
use std::rc::Rc;

/// Document root elements whose overflow is locked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootElement {
    Html,
    Body,
}

/// Access to the inline `overflow` style of the document root
///
/// Methods take `&self`; DOM style handles are shared references.
pub trait RootStyle {
    /// Current inline overflow value (empty if unset)
    fn overflow(&self, element: RootElement) -> String;

    /// Set the inline overflow value
    fn set_overflow(&self, element: RootElement, value: &str);
}

/// Guard that hides page overflow until dropped
///
/// Dropping the guard restores the values seen at acquisition.
pub struct ScrollLock {
    root: Rc<dyn RootStyle>,
    previous_html: String,
    previous_body: String,
}

impl ScrollLock {
    /// Lock page scrolling
    pub fn acquire(root: Rc<dyn RootStyle>) -> Self {
        let previous_html = root.overflow(RootElement::Html);
        let previous_body = root.overflow(RootElement::Body);
        root.set_overflow(RootElement::Html, "hidden");
        root.set_overflow(RootElement::Body, "hidden");
        tracing::debug!("page scroll locked");

        Self {
            root,
            previous_html,
            previous_body,
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.root.set_overflow(RootElement::Html, &self.previous_html);
        self.root.set_overflow(RootElement::Body, &self.previous_body);
        tracing::debug!("page scroll restored");
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("previous_html", &self.previous_html)
            .field("previous_body", &self.previous_body)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeRoot;
    use super::*;

    #[test]
    fn test_lock_and_restore() {
        let root = Rc::new(FakeRoot::default());
        root.set_overflow(RootElement::Body, "auto");

        let lock = ScrollLock::acquire(root.clone());
        assert_eq!(root.overflow(RootElement::Html), "hidden");
        assert_eq!(root.overflow(RootElement::Body), "hidden");

        drop(lock);
        assert_eq!(root.overflow(RootElement::Html), "");
        assert_eq!(root.overflow(RootElement::Body), "auto");
    }
}
