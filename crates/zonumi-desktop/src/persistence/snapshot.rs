//! Snapshot encoding for the window layout
//!
//! The stored form is a single JSON object keyed by window key. Decoding is
//! lenient per entry: a bad entry falls back to that window's default and
//! never fails the whole snapshot.

use serde_json::{Map, Value};

use crate::error::DesktopResult;
use crate::window::{WindowId, WindowLayout, WindowState};

/// Largest z accepted from storage
///
/// Matches the largest integer a JavaScript number holds exactly, so every
/// stored value stays representable for the host.
pub const MAX_STORED_Z: u64 = (1 << 53) - 1;

/// Encode a layout as JSON
pub fn encode_layout(layout: &WindowLayout) -> DesktopResult<String> {
    Ok(serde_json::to_string(layout)?)
}

/// Decode a stored layout, merged over registry defaults
///
/// Returns `None` if `raw` is not JSON or its top level is not an object.
pub fn decode_layout(raw: &str) -> Option<WindowLayout> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(%err, "discarding unparsable window snapshot");
            return None;
        }
    };
    let Value::Object(entries) = value else {
        tracing::debug!("discarding non-object window snapshot");
        return None;
    };

    Some(merge_over_defaults(&entries))
}

fn merge_over_defaults(entries: &Map<String, Value>) -> WindowLayout {
    let mut layout = WindowLayout::defaults();
    for id in WindowId::ALL {
        let Some(entry) = entries.get(id.key()) else {
            continue;
        };
        match decode_state(entry) {
            Some(state) => layout.set(id, state),
            None => tracing::debug!(window = %id, "discarding invalid snapshot entry"),
        }
    }
    layout
}

fn decode_state(entry: &Value) -> Option<WindowState> {
    let x = finite_number(entry.get("x")?)?;
    let y = finite_number(entry.get("y")?)?;
    let z = finite_number(entry.get("z")?)?;
    if z < 0.0 || z.fract() != 0.0 || z > MAX_STORED_Z as f64 {
        return None;
    }
    Some(WindowState::new(x, y, z as u64))
}

/// Accept JSON numbers and numeric strings; reject anything non-finite
fn finite_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_partial_snapshot() {
        let layout = decode_layout(r#"{"about-profile": {"x": 50, "y": 60, "z": 99}}"#).unwrap();

        assert_eq!(layout[WindowId::Profile], WindowState::new(50.0, 60.0, 99));
        for id in WindowId::ALL.into_iter().filter(|&id| id != WindowId::Profile) {
            assert_eq!(layout[id], id.descriptor().initial);
        }
    }

    #[test]
    fn test_decode_malformed_json() {
        assert!(decode_layout("{\"about-profile\": ").is_none());
        assert!(decode_layout("").is_none());
    }

    #[test]
    fn test_decode_non_object() {
        assert!(decode_layout("[1, 2, 3]").is_none());
        assert!(decode_layout("42").is_none());
        assert!(decode_layout("null").is_none());
    }

    #[test]
    fn test_decode_discards_only_invalid_entries() {
        let raw = r#"{
            "about-profile": {"x": "abc", "y": 1, "z": 2},
            "about-certs": {"x": 10, "y": 20},
            "about-project": {"x": 1, "y": 2, "z": 30},
            "about-experience": "not an object",
            "about-contact": {"x": "Infinity", "y": "NaN", "z": 1}
        }"#;
        let layout = decode_layout(raw).unwrap();

        assert_eq!(layout[WindowId::Profile], WindowId::Profile.descriptor().initial);
        assert_eq!(layout[WindowId::Education], WindowId::Education.descriptor().initial);
        assert_eq!(layout[WindowId::Projects], WindowState::new(1.0, 2.0, 30));
        assert_eq!(layout[WindowId::Experience], WindowId::Experience.descriptor().initial);
        assert_eq!(layout[WindowId::Contact], WindowId::Contact.descriptor().initial);
    }

    #[test]
    fn test_decode_numeric_strings() {
        let layout = decode_layout(r#"{"about-certs": {"x": "12.5", "y": " 7 ", "z": "40"}}"#).unwrap();
        assert_eq!(layout[WindowId::Education], WindowState::new(12.5, 7.0, 40));
    }

    #[test]
    fn test_decode_rejects_fractional_or_negative_z() {
        let layout = decode_layout(
            r#"{"about-certs": {"x": 1, "y": 1, "z": 2.5}, "about-project": {"x": 1, "y": 1, "z": -3}}"#,
        )
        .unwrap();
        assert_eq!(layout[WindowId::Education], WindowId::Education.descriptor().initial);
        assert_eq!(layout[WindowId::Projects], WindowId::Projects.descriptor().initial);
    }

    #[test]
    fn test_decode_rejects_z_beyond_safe_integer() {
        let raw = format!(
            r#"{{"about-profile": {{"x": 10, "y": 10, "z": {}}}, "about-certs": {{"x": 1, "y": 1, "z": {}}}, "about-project": {{"x": 2, "y": 2, "z": 1e19}}}}"#,
            u64::MAX,
            MAX_STORED_Z,
        );
        let layout = decode_layout(&raw).unwrap();

        assert_eq!(layout[WindowId::Profile], WindowId::Profile.descriptor().initial);
        assert_eq!(layout[WindowId::Education], WindowState::new(1.0, 1.0, MAX_STORED_Z));
        assert_eq!(layout[WindowId::Projects], WindowId::Projects.descriptor().initial);
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let layout = decode_layout(r#"{"panel-skills": {"x": 1, "y": 1, "z": 1}}"#).unwrap();
        assert_eq!(layout, WindowLayout::defaults());
    }

    #[test]
    fn test_encode_decode() {
        let mut layout = WindowLayout::defaults();
        layout.set(WindowId::Contact, WindowState::new(-12.25, 0.1, 77));

        let json = encode_layout(&layout).unwrap();
        assert_eq!(decode_layout(&json).unwrap(), layout);
    }
}
