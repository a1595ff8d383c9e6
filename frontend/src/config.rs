//! Build-time configuration for the EmailJS client.
//!
//! Credentials are baked in at compile time (`EMAILJS_SERVICE_ID=... trunk build`).
//! A build without them still runs; submissions then fail with the
//! "service unavailable" message instead of reaching the provider.

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Wall-clock limit for both outbound calls of one submission.
pub const SUBMIT_TIMEOUT_MS: u32 = 30_000;

/// Delay after the last edit before a draft is written to storage.
pub const DRAFT_DEBOUNCE_MS: u32 = 1_000;

const fn or_default(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(value) => value,
        None => default,
    }
}

pub const CONTACT_OPERATOR_TEMPLATE: &str =
    or_default(option_env!("EMAILJS_CONTACT_TEMPLATE"), "template_contact_admin");
pub const CONTACT_CONFIRMATION_TEMPLATE: &str = or_default(
    option_env!("EMAILJS_CONTACT_CONFIRMATION_TEMPLATE"),
    "template_contact_confirmation",
);
pub const REVIEW_OPERATOR_TEMPLATE: &str =
    or_default(option_env!("EMAILJS_REVIEW_TEMPLATE"), "template_review_submission");
pub const REVIEW_CONFIRMATION_TEMPLATE: &str = or_default(
    option_env!("EMAILJS_REVIEW_CONFIRMATION_TEMPLATE"),
    "template_review_thankyou",
);
pub const NEWSLETTER_OPERATOR_TEMPLATE: &str = or_default(
    option_env!("EMAILJS_NEWSLETTER_ADMIN_TEMPLATE"),
    "template_newsletter_admin",
);
pub const NEWSLETTER_CONFIRMATION_TEMPLATE: &str = or_default(
    option_env!("EMAILJS_NEWSLETTER_CONFIRMATION_TEMPLATE"),
    "template_newsletter_confirmation",
);

#[derive(Clone, Debug, PartialEq)]
pub struct EmailJsConfig {
    pub service_id: Option<&'static str>,
    pub public_key: Option<&'static str>,
}

pub fn emailjs() -> EmailJsConfig {
    EmailJsConfig {
        service_id: option_env!("EMAILJS_SERVICE_ID"),
        public_key: option_env!("EMAILJS_PUBLIC_KEY"),
    }
}

#[cfg(debug_assertions)]
pub fn is_dev() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn is_dev() -> bool {
    false
}
