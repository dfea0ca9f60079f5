//! Copy-email action with a `mailto:` fallback

use serde::Serialize;

/// How long the "email copied" label stays up
pub const COPIED_FEEDBACK_MS: f64 = 1_500.0;

/// Host clipboard
pub trait Clipboard {
    /// Write text to the clipboard
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// Outcome of [`copy_email`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "href", rename_all = "snake_case")]
pub enum EmailAction {
    /// Address is on the clipboard
    Copied,
    /// Clipboard refused; navigate to this `mailto:` link
    OpenMailto(String),
}

/// Whether the "email copied" label is still up for a copy at `copied_at_ms`
#[inline]
pub fn copied_feedback_visible(copied_at_ms: f64, now_ms: f64) -> bool {
    now_ms - copied_at_ms < COPIED_FEEDBACK_MS
}

/// Copy `email` to the clipboard, falling back to a `mailto:` link
pub fn copy_email<C: Clipboard + ?Sized>(clipboard: &mut C, email: &str) -> EmailAction {
    match clipboard.write_text(email) {
        Ok(()) => EmailAction::Copied,
        Err(err) => {
            tracing::debug!(%err, "clipboard write failed, using mailto");
            EmailAction::OpenMailto(format!("mailto:{email}"))
        }
    }
}
