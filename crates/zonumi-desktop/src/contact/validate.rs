//! Contact draft validation

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum time between mounting the form and submitting it
pub const MIN_FILL_TIME_MS: f64 = 3_000.0;

/// Minimum time between two successful submissions
pub const SUBMIT_COOLDOWN_MS: f64 = 30_000.0;

const NAME_CHARS: (usize, usize) = (2, 80);
const EMAIL_MAX_CHARS: usize = 120;
const MESSAGE_CHARS: (usize, usize) = (20, 2_000);

/// Reasons a contact draft is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// The hidden honeypot field was filled in
    #[error("Submission blocked.")]
    SpamDetected,

    /// The form was submitted faster than a person can type
    #[error("Please take a moment before sending.")]
    TooFast,

    /// A message was sent recently
    #[error("Please wait {} seconds before sending another message.", .remaining_ms.div_ceil(1000))]
    CoolingDown { remaining_ms: u64 },

    #[error("Please enter your name (2-80 characters).")]
    InvalidName,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a message (20-2000 characters).")]
    InvalidMessage,

    /// No form id is configured
    #[error("The contact form is not configured.")]
    Unconfigured,
}

/// Form fields as typed by the visitor
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden field; people leave it empty
    #[serde(default)]
    pub honeypot: String,
}

impl ContactDraft {
    /// Draft with the given fields and an empty honeypot
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            honeypot: String::new(),
        }
    }

    /// Trimmed copy of the visible fields
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
            honeypot: self.honeypot.clone(),
        }
    }
}

/// Anti-spam and field checks run before a submission
#[derive(Clone, Copy, Debug, Default)]
pub struct ContactValidator;

impl ContactValidator {
    /// Validate `draft`; the first failing check wins
    ///
    /// Anti-spam checks run before field checks.
    pub fn validate(
        draft: &ContactDraft,
        mounted_at_ms: f64,
        now_ms: f64,
        last_submit_ms: Option<f64>,
    ) -> Result<(), ContactError> {
        if !draft.honeypot.trim().is_empty() {
            return Err(ContactError::SpamDetected);
        }

        if now_ms - mounted_at_ms < MIN_FILL_TIME_MS {
            return Err(ContactError::TooFast);
        }

        if let Some(last) = last_submit_ms {
            let elapsed = now_ms - last;
            if elapsed < SUBMIT_COOLDOWN_MS {
                let remaining_ms = (SUBMIT_COOLDOWN_MS - elapsed).ceil() as u64;
                return Err(ContactError::CoolingDown { remaining_ms });
            }
        }

        let name = draft.name.trim();
        if !within(name, NAME_CHARS) {
            return Err(ContactError::InvalidName);
        }

        let email = draft.email.trim();
        if email.chars().count() > EMAIL_MAX_CHARS || !email_pattern().is_match(email) {
            return Err(ContactError::InvalidEmail);
        }

        if !within(draft.message.trim(), MESSAGE_CHARS) {
            return Err(ContactError::InvalidMessage);
        }

        Ok(())
    }
}

fn within(value: &str, (min, max): (usize, usize)) -> bool {
    let len = value.chars().count();
    (min..=max).contains(&len)
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}
