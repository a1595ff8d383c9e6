use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::{NEWSLETTER_CONFIRMATION_TEMPLATE, NEWSLETTER_OPERATOR_TEMPLATE};
use crate::forms::submit::{EmailRequest, FormKind, TemplateParams};
use crate::forms::validate::ValidationErrors;
use crate::storage::KeyValueStore;

/// Storage key of the JSON boolean set after a successful signup.
pub const SUBSCRIBED_KEY: &str = "newsletter_subscribed";

pub fn is_subscribed<S: KeyValueStore>(store: &S) -> bool {
    store
        .read(SUBSCRIBED_KEY)
        .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
        .unwrap_or(false)
}

/// Records a successful signup. Failures are logged only.
pub fn remember_subscribed<S: KeyValueStore>(store: &S) {
    if let Err(e) = store.write(SUBSCRIBED_KEY, "true") {
        warn!("Newsletter signup not remembered: {}", e);
    }
}

/// Footer signup. Single field, so no draft is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterDraft {
    pub email: String,
}

impl NewsletterDraft {
    fn display_name(&self) -> String {
        let email = self.email.trim();
        email.split('@').next().unwrap_or(email).to_string()
    }
}

impl FormKind for NewsletterDraft {
    const DRAFT_KEY: Option<&'static str> = None;
    const FALLBACK_MESSAGE: &'static str =
        "Sorry, there was an error subscribing. Please try again.";

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require_email("email", &self.email, "Please enter a valid email address");
        errors
    }

    fn worth_saving(&self) -> bool {
        false
    }

    fn requests(&self, submitted_at: &str) -> [EmailRequest; 2] {
        let email = self.email.trim().to_string();
        let operator = TemplateParams::from([
            ("subscriber_email", email.clone()),
            ("subscription_date", submitted_at.to_string()),
        ]);
        let confirmation = TemplateParams::from([
            ("user_email", email),
            ("user_name", self.display_name()),
        ]);

        [
            EmailRequest { template_id: NEWSLETTER_OPERATOR_TEMPLATE, params: operator },
            EmailRequest { template_id: NEWSLETTER_CONFIRMATION_TEMPLATE, params: confirmation },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn signup_is_remembered() {
        let store = MemoryStore::new();
        assert!(!is_subscribed(&store));
        remember_subscribed(&store);
        assert!(is_subscribed(&store));
    }

    #[test]
    fn unwritable_or_garbled_flag_reads_as_not_subscribed() {
        let store = MemoryStore::rejecting_writes();
        remember_subscribed(&store);
        assert!(!is_subscribed(&store));
        assert!(!is_subscribed(&MemoryStore::new().with_item(SUBSCRIBED_KEY, "yes")));
    }

    #[test]
    fn rejects_blank_and_malformed_addresses() {
        let blank = NewsletterDraft::default().validate();
        assert_eq!(blank.get("email"), Some("Email is required"));
        let malformed = NewsletterDraft { email: "jane@".into() }.validate();
        assert_eq!(malformed.get("email"), Some("Please enter a valid email address"));
        assert!(NewsletterDraft { email: "jane@biz.com".into() }.validate().is_empty());
    }

    #[test]
    fn confirmation_greets_by_local_part() {
        let draft = NewsletterDraft { email: " jane.doe@biz.com ".into() };
        let [operator, confirmation] = draft.requests("today");
        assert_eq!(operator.params["subscriber_email"], "jane.doe@biz.com");
        assert_eq!(confirmation.params["user_name"], "jane.doe");
        assert_eq!(confirmation.template_id, NEWSLETTER_CONFIRMATION_TEMPLATE);
    }
}
