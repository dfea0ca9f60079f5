//! Contact form submission state

use serde::Serialize;

use crate::error::{DesktopResult, StorageError};
use crate::persistence::Storage;
use super::{ContactDraft, ContactError, ContactValidator};

/// Storage key for the last successful submission time
pub const CONTACT_COOLDOWN_STORAGE_KEY: &str = "zonumi.contact.last-submit";

/// Form field name of the honeypot, as the form backend expects it
pub const HONEYPOT_FIELD: &str = "_gotcha";

/// Notice shown instead of the form when no form id is configured
pub const UNCONFIGURED_NOTICE: &str =
    "The contact form is not configured. Please use the email address instead.";

/// Form endpoint for a form id
pub fn form_endpoint(form_id: &str) -> String {
    format!("https://formspree.io/f/{form_id}")
}

/// Whether the contact form can be used
///
/// Serializes as `{"state": "ready", "endpoint": ..}` or
/// `{"state": "unconfigured", "notice": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ContactAvailability {
    /// Submissions go to `endpoint`
    Ready { endpoint: String },
    /// No form id; `notice` replaces the form
    Unconfigured { notice: &'static str },
}

impl ContactAvailability {
    /// Availability for an optional form id
    ///
    /// Empty ids and unfilled `<placeholder>` ids count as missing.
    pub fn from_form_id(form_id: Option<&str>) -> Self {
        match form_id.map(str::trim) {
            Some(id) if !id.is_empty() && !id.starts_with('<') => Self::Ready {
                endpoint: form_endpoint(id),
            },
            _ => Self::unconfigured(),
        }
    }

    /// Unconfigured form carrying [`UNCONFIGURED_NOTICE`]
    pub const fn unconfigured() -> Self {
        Self::Unconfigured {
            notice: UNCONFIGURED_NOTICE,
        }
    }

    /// Endpoint if the form is usable
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Ready { endpoint } => Some(endpoint),
            Self::Unconfigured { .. } => None,
        }
    }

    /// Notice to show in place of the form
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Ready { .. } => None,
            Self::Unconfigured { notice } => Some(*notice),
        }
    }
}

/// A validated message ready to be posted by the host
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub endpoint: String,
    /// Form fields in posting order
    pub fields: Vec<(String, String)>,
}

/// One mounted contact form
#[derive(Debug)]
pub struct ContactForm<S: Storage> {
    storage: S,
    cooldown_key: String,
    availability: ContactAvailability,
    mounted_at_ms: f64,
}

impl<S: Storage> ContactForm<S> {
    /// Mount a form at `now_ms`
    pub fn new(storage: S, availability: ContactAvailability, now_ms: f64) -> Self {
        Self::with_key(storage, CONTACT_COOLDOWN_STORAGE_KEY, availability, now_ms)
    }

    /// Mount a form that keeps its cooldown under a custom key
    pub fn with_key(storage: S, key: &str, availability: ContactAvailability, now_ms: f64) -> Self {
        Self {
            storage,
            cooldown_key: key.to_string(),
            availability,
            mounted_at_ms: now_ms,
        }
    }

    /// Whether this form can submit
    #[inline]
    pub fn availability(&self) -> &ContactAvailability {
        &self.availability
    }

    /// Time the form was mounted
    #[inline]
    pub fn mounted_at_ms(&self) -> f64 {
        self.mounted_at_ms
    }

    /// Time of the last successful submission, if readable
    pub fn last_submit_ms(&self) -> Option<f64> {
        match self.storage.get(&self.cooldown_key) {
            Ok(raw) => raw.and_then(|v| v.trim().parse::<f64>().ok()).filter(|v| v.is_finite()),
            Err(err) => {
                tracing::debug!(%err, "contact cooldown unreadable");
                None
            }
        }
    }

    /// Validate `draft` and build the submission
    ///
    /// On success the submit time is recorded so the cooldown applies to the
    /// next attempt. An unconfigured form rejects every draft.
    pub fn submit(&mut self, draft: &ContactDraft, now_ms: f64) -> DesktopResult<Submission> {
        let Some(endpoint) = self.availability.endpoint().map(str::to_string) else {
            return Err(ContactError::Unconfigured.into());
        };

        ContactValidator::validate(draft, self.mounted_at_ms, now_ms, self.last_submit_ms())?;

        if let Err(err) = self.record_submit(now_ms) {
            tracing::warn!(%err, "failed to record contact submit time");
        }

        let draft = draft.trimmed();
        tracing::debug!(endpoint = %endpoint, "contact submission ready");
        Ok(Submission {
            endpoint,
            fields: vec![
                ("name".to_string(), draft.name),
                ("email".to_string(), draft.email),
                ("message".to_string(), draft.message),
                (HONEYPOT_FIELD.to_string(), draft.honeypot),
            ],
        })
    }

    fn record_submit(&mut self, now_ms: f64) -> Result<(), StorageError> {
        self.storage.set(&self.cooldown_key, &now_ms.to_string())
    }

    /// Cooldown storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
