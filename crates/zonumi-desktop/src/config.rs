//! Desktop configuration
//!
//! Every field has a default, so a host only passes what it overrides:
//!
//! ```
//! use zonumi_desktop::DesktopConfig;
//!
//! let config = DesktopConfig::from_json(r#"{ "reduced_motion": true }"#).unwrap();
//! assert!(config.reduced_motion);
//! assert_eq!(config.storage_key, "zonumi.window-positions.v1");
//! ```

use serde::Deserialize;

use crate::contact::{ContactAvailability, CONTACT_COOLDOWN_STORAGE_KEY};
use crate::error::DesktopResult;
use crate::layout::Breakpoints;
use crate::persistence::WINDOW_POSITION_STORAGE_KEY;

/// Environment variable holding the contact form id
pub const FORM_ID_ENV: &str = "ZONUMI_FORM_ID";

/// Contact details and form backend
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Form backend id; `None` disables the form
    pub form_id: Option<String>,
    /// Address for the copy-email action
    pub email: String,
    pub linkedin_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: None,
            email: "nuno.castilho@outlook.com".to_string(),
            linkedin_url: "https://www.linkedin.com/in/nuno-castilho".to_string(),
        }
    }
}

impl ContactConfig {
    /// Defaults with the form id taken from [`FORM_ID_ENV`]
    pub fn from_env() -> Self {
        Self {
            form_id: std::env::var(FORM_ID_ENV).ok(),
            ..Self::default()
        }
    }

    /// Whether the contact form can be used
    pub fn availability(&self) -> ContactAvailability {
        ContactAvailability::from_form_id(self.form_id.as_deref())
    }
}

/// Engine configuration
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    pub breakpoints: Breakpoints,
    /// Storage key for the window layout snapshot
    pub storage_key: String,
    /// Storage key for the last contact submission time
    pub contact_cooldown_key: String,
    /// Use the short boot timings
    pub reduced_motion: bool,
    pub contact: ContactConfig,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            storage_key: WINDOW_POSITION_STORAGE_KEY.to_string(),
            contact_cooldown_key: CONTACT_COOLDOWN_STORAGE_KEY.to_string(),
            reduced_motion: false,
            contact: ContactConfig::default(),
        }
    }
}

impl DesktopConfig {
    /// Parse a config; missing fields keep their defaults
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{DESKTOP_MIN_WIDTH, MOBILE_MAX_WIDTH};

    #[test]
    fn test_defaults() {
        let config = DesktopConfig::default();
        assert!((config.breakpoints.desktop_min_width - DESKTOP_MIN_WIDTH).abs() < 0.001);
        assert!((config.breakpoints.mobile_max_width - MOBILE_MAX_WIDTH).abs() < 0.001);
        assert_eq!(config.storage_key, WINDOW_POSITION_STORAGE_KEY);
        assert_eq!(config.contact_cooldown_key, CONTACT_COOLDOWN_STORAGE_KEY);
        assert!(!config.reduced_motion);
        assert_eq!(config.contact.availability(), ContactAvailability::unconfigured());
    }

    #[test]
    fn test_partial_override() {
        let config = DesktopConfig::from_json(
            r#"{ "breakpoints": { "desktop_min_width": 1200 }, "contact": { "form_id": "abc" } }"#,
        )
        .unwrap();

        assert!((config.breakpoints.desktop_min_width - 1200.0).abs() < 0.001);
        assert!((config.breakpoints.mobile_max_width - MOBILE_MAX_WIDTH).abs() < 0.001);
        assert_eq!(config.contact.form_id.as_deref(), Some("abc"));
        assert_eq!(config.contact.email, ContactConfig::default().email);
        assert_eq!(
            config.contact.availability(),
            ContactAvailability::Ready {
                endpoint: "https://formspree.io/f/abc".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_json() {
        assert!(DesktopConfig::from_json("{ not json").is_err());
        assert!(DesktopConfig::from_json(r#"{ "reduced_motion": "yes" }"#).is_err());
    }
}
