//! Field checks shared by every form.
//!
//! These are presentation-layer sanity checks: an address that passes
//! [`is_valid_email`] is well-shaped, not necessarily deliverable.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+]?[0-9\s\-().]{7,20}$").expect("phone pattern is valid")
});

pub const MIN_REVIEW_CHARS: usize = 20;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Empty input is valid: every phone field on the site is optional.
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || PHONE_RE.is_match(value)
}

pub fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Field name to message. Empty means the form may be submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn require(&mut self, field: &'static str, value: &str, message: &str) -> bool {
        if is_blank(value) {
            self.add(field, message);
            return false;
        }
        true
    }

    /// Required email: blank and malformed get different messages.
    pub fn require_email(&mut self, field: &'static str, value: &str, invalid: &str) {
        if self.require(field, value, "Email is required") && !is_valid_email(value) {
            self.add(field, invalid);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn clear_field(&mut self, field: &str) -> bool {
        self.0.remove(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_addresses() {
        for email in [
            "jane@biz.com",
            "first.last@sub.domain.co.uk",
            "x+tag@example.io",
            "müller@beispiel.de",
            "  padded@example.com  ",
        ] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn rejects_addresses_without_at_or_dot_after_it() {
        for email in [
            "",
            "jane.biz.com",
            "jane@bizcom",
            "jane.doe@localhost",
            "@biz.com",
            "jane@.",
            "jane @biz.com",
            "jane@@biz.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn phone_is_optional_but_shaped_when_present() {
        assert!(is_valid_phone(""));
        assert!(is_valid_phone("   "));
        assert!(is_valid_phone("(734) 577-7138"));
        assert!(is_valid_phone("+44 20 7946 0958"));
        assert!(is_valid_phone("555.123.4567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("call me maybe"));
        assert!(!is_valid_phone("+1 (555) 123-4567 ext 99999"));
    }

    #[test]
    fn min_chars_counts_trimmed_characters() {
        let exactly = "a".repeat(MIN_REVIEW_CHARS);
        assert!(has_min_chars(&exactly, MIN_REVIEW_CHARS));
        assert!(has_min_chars(&format!("   {exactly}   "), MIN_REVIEW_CHARS));
        assert!(!has_min_chars(&"a".repeat(MIN_REVIEW_CHARS - 1), MIN_REVIEW_CHARS));
        assert!(has_min_chars(&"é".repeat(MIN_REVIEW_CHARS), MIN_REVIEW_CHARS));
    }

    #[test]
    fn first_message_for_a_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Email is required");
        errors.add("email", "Please enter a valid email address");
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert!(errors.clear_field("email"));
        assert!(errors.is_empty());
        assert!(!errors.clear_field("email"));
    }

    #[test]
    fn require_email_distinguishes_blank_from_malformed() {
        let mut errors = ValidationErrors::new();
        errors.require_email("email", "   ", "bad");
        assert_eq!(errors.get("email"), Some("Email is required"));

        let mut errors = ValidationErrors::new();
        errors.require_email("email", "jane@biz", "bad");
        assert_eq!(errors.get("email"), Some("bad"));
    }
}
