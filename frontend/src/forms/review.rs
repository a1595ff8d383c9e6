use serde::{Deserialize, Serialize};

use crate::config::{REVIEW_CONFIRMATION_TEMPLATE, REVIEW_OPERATOR_TEMPLATE};
use crate::forms::submit::{EmailRequest, FormKind, TemplateParams};
use crate::forms::validate::{has_min_chars, is_blank, ValidationErrors, MIN_REVIEW_CHARS};

pub const MAX_RATING: u8 = 5;

/// Testimonial from the leave-review page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewDraft {
    pub name: String,
    pub business_name: String,
    pub email: String,
    /// 0 until a star is picked.
    pub rating: u8,
    pub review: String,
    pub display_publicly: bool,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            business_name: String::new(),
            email: String::new(),
            rating: 0,
            review: String::new(),
            display_publicly: true,
        }
    }
}

impl FormKind for ReviewDraft {
    const DRAFT_KEY: Option<&'static str> = Some("review_form_data");
    const FALLBACK_MESSAGE: &'static str =
        "There was an error submitting your review. Please try again or email us directly.";

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.require("businessName", &self.business_name, "Business name is required");
        errors.require_email("email", &self.email, "Please enter a valid email");
        if self.rating == 0 || self.rating > MAX_RATING {
            errors.add("rating", "Please select a rating");
        }
        if errors.require("review", &self.review, "Review is required")
            && !has_min_chars(&self.review, MIN_REVIEW_CHARS)
        {
            errors.add("review", "Review must be at least 20 characters");
        }
        errors
    }

    fn worth_saving(&self) -> bool {
        !(is_blank(&self.name) && is_blank(&self.email) && is_blank(&self.review))
    }

    fn requests(&self, submitted_at: &str) -> [EmailRequest; 2] {
        let operator = TemplateParams::from([
            ("client_name", self.name.trim().to_string()),
            ("business_name", self.business_name.trim().to_string()),
            ("client_email", self.email.trim().to_string()),
            ("rating", self.rating.to_string()),
            ("review_text", self.review.trim().to_string()),
            ("display_publicly", if self.display_publicly { "Yes" } else { "No" }.to_string()),
            ("submission_date", submitted_at.to_string()),
        ]);
        let confirmation = TemplateParams::from([
            ("client_name", self.name.trim().to_string()),
            ("client_email", self.email.trim().to_string()),
        ]);

        [
            EmailRequest { template_id: REVIEW_OPERATOR_TEMPLATE, params: operator },
            EmailRequest { template_id: REVIEW_CONFIRMATION_TEMPLATE, params: confirmation },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ReviewDraft {
        ReviewDraft {
            name: "Maria Rossi".into(),
            business_name: "Bella Vista".into(),
            email: "maria@bellavista.com".into(),
            rating: 5,
            review: "Orders doubled after launch, great work".into(),
            display_publicly: true,
        }
    }

    #[test]
    fn complete_review_is_valid() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn zero_rating_blocks_submission() {
        let errors = ReviewDraft { rating: 0, ..filled() }.validate();
        assert_eq!(errors.get("rating"), Some("Please select a rating"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn review_length_boundary_is_twenty_trimmed_chars() {
        let short = ReviewDraft { review: format!("  {}  ", "x".repeat(19)), ..filled() };
        assert_eq!(
            short.validate().get("review"),
            Some("Review must be at least 20 characters")
        );
        let exact = ReviewDraft { review: "x".repeat(20), ..filled() };
        assert!(!exact.validate().contains("review"));
    }

    #[test]
    fn blank_review_is_required_not_short() {
        let errors = ReviewDraft { review: "   ".into(), ..filled() }.validate();
        assert_eq!(errors.get("review"), Some("Review is required"));
    }

    #[test]
    fn payload_carries_rating_and_visibility() {
        let draft = ReviewDraft { display_publicly: false, ..filled() };
        let [operator, confirmation] = draft.requests("10/16/2026, 9:00:00 AM");
        assert_eq!(operator.template_id, REVIEW_OPERATOR_TEMPLATE);
        assert_eq!(operator.params["rating"], "5");
        assert_eq!(operator.params["display_publicly"], "No");
        assert_eq!(operator.params["submission_date"], "10/16/2026, 9:00:00 AM");
        assert_eq!(confirmation.params.len(), 2);
    }

    #[test]
    fn stored_draft_without_visibility_defaults_to_public() {
        let draft: ReviewDraft = serde_json::from_str(r#"{"name":"Tom","rating":4}"#).expect("valid");
        assert!(draft.display_publicly);
        assert_eq!(draft.rating, 4);
    }
}
