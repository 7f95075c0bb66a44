//! Field rules for contact submissions

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Reads a form field the way the browser form sends it: empty strings, `0`,
/// `false` and `null` count as not filled in. Arrays and objects are not text
/// and are rejected as well.
pub fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().map_or(true, |f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_simple_addresses() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for email in [
            "no-at-sign",
            "a@b",
            "a b@c.com",
            "a@b c.com",
            "@example.com",
            "jane@.com",
            "jane@example.",
            "jane@@example.com",
            "jane@example.com ",
            "",
        ] {
            assert!(!is_valid_email(email), "{:?} should be rejected", email);
        }
    }

    #[test]
    fn test_text_field_truthiness() {
        assert_eq!(text_field(Some(&json!("Jane"))), Some("Jane".to_string()));
        assert_eq!(text_field(Some(&json!(""))), None);
        assert_eq!(text_field(Some(&json!(null))), None);
        assert_eq!(text_field(Some(&json!(false))), None);
        assert_eq!(text_field(Some(&json!(0))), None);
        assert_eq!(text_field(Some(&json!(0.0))), None);
        assert_eq!(text_field(None), None);

        assert_eq!(text_field(Some(&json!(42))), Some("42".to_string()));
        assert_eq!(text_field(Some(&json!(true))), Some("true".to_string()));
        assert_eq!(text_field(Some(&json!(["a"]))), None);
        assert_eq!(text_field(Some(&json!({ "a": 1 }))), None);
    }
}
