//! Contact window boundary
//!
//! Validates and packages contact messages for the form backend, and copies
//! the contact address. Network calls are left to the host.

mod clipboard;
mod form;
mod validate;

pub use clipboard::{copied_feedback_visible, copy_email, Clipboard, EmailAction, COPIED_FEEDBACK_MS};
pub use form::{
    form_endpoint, ContactAvailability, ContactForm, Submission, CONTACT_COOLDOWN_STORAGE_KEY,
    HONEYPOT_FIELD, UNCONFIGURED_NOTICE,
};
pub use validate::{ContactDraft, ContactError, ContactValidator, MIN_FILL_TIME_MS, SUBMIT_COOLDOWN_MS};
