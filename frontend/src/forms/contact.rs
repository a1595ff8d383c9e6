use serde::{Deserialize, Serialize};

use crate::config::{CONTACT_CONFIRMATION_TEMPLATE, CONTACT_OPERATOR_TEMPLATE};
use crate::forms::submit::{EmailRequest, FormKind, TemplateParams};
use crate::forms::validate::{is_blank, is_valid_phone, ValidationErrors};

pub const PROJECT_TYPES: &[(&str, &str, &str)] = &[
    ("new-website", "New Website", "Build a brand new website from scratch"),
    ("redesign", "Website Redesign", "Modernize your existing website"),
    ("landing-page", "Landing Page", "Single page for marketing campaigns"),
];

pub const BUSINESS_TYPES: &[&str] = &[
    "Restaurant/Food Service",
    "Healthcare/Medical",
    "Professional Services",
    "Real Estate",
    "Fitness/Wellness",
    "Education",
    "Automotive",
    "Non-Profit",
    "Other",
];

pub const TIMELINES: &[&str] = &[
    "ASAP (Rush delivery)",
    "1-2 weeks",
    "2-4 weeks",
    "1-2 months",
    "No rush",
];

pub const BUDGETS: &[&str] = &[
    "Under $1,000",
    "$1,000 - $2,000",
    "$2,000 - $5,000",
    "$5,000+",
    "Need consultation",
];

pub const FEATURES: &[&str] = &[
    "Appointment Booking",
    "Contact Forms",
    "Photo Gallery",
    "Blog/News Section",
    "Customer Reviews",
    "Social Media Integration",
    "Live Chat",
    "Email Newsletter",
    "Search Functionality",
    "Multi-language Support",
    "Member Login Area",
];

pub const HEAR_ABOUT: &[&str] = &[
    "Google Search",
    "Social Media",
    "Referral from a friend",
    "Online Ad",
    "Other",
];

/// Project inquiry from the contact page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDraft {
    pub project_type: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub business_type: String,
    pub timeline: String,
    pub budget: String,
    pub description: String,
    pub features: Vec<String>,
    pub hear_about: String,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            project_type: "new-website".to_string(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            business_name: String::new(),
            business_type: String::new(),
            timeline: String::new(),
            budget: String::new(),
            description: String::new(),
            features: Vec::new(),
            hear_about: String::new(),
        }
    }
}

impl ContactDraft {
    pub fn toggle_feature(&mut self, feature: &str) {
        if let Some(pos) = self.features.iter().position(|f| f == feature) {
            self.features.remove(pos);
        } else {
            self.features.push(feature.to_string());
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

impl FormKind for ContactDraft {
    const DRAFT_KEY: Option<&'static str> = Some("contact_form_data");
    const FALLBACK_MESSAGE: &'static str =
        "There was an error submitting your form. Please try again.";

    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.require_email("email", &self.email, "Please enter a valid email address");
        errors.require("businessName", &self.business_name, "Business name is required");
        errors.require("businessType", &self.business_type, "Please select your business type");
        if !is_valid_phone(&self.phone) {
            errors.add("phone", "Please enter a valid phone number");
        }
        errors
    }

    fn worth_saving(&self) -> bool {
        !(is_blank(&self.name) && is_blank(&self.email) && is_blank(&self.business_name))
    }

    fn requests(&self, _submitted_at: &str) -> [EmailRequest; 2] {
        let budget = or_placeholder(&self.budget, "Not specified");
        let timeline = or_placeholder(&self.timeline, "Not specified");
        let features = if self.features.is_empty() {
            "None selected".to_string()
        } else {
            self.features.join(", ")
        };

        let operator = TemplateParams::from([
            ("from_name", self.name.trim().to_string()),
            ("from_email", self.email.trim().to_string()),
            ("phone", or_placeholder(&self.phone, "Not provided")),
            ("business_name", self.business_name.trim().to_string()),
            ("business_type", self.business_type.clone()),
            ("project_type", self.project_type.clone()),
            ("budget", budget.clone()),
            ("timeline", timeline.clone()),
            ("features", features),
            ("description", or_placeholder(&self.description, "No description provided")),
            ("hear_about", or_placeholder(&self.hear_about, "Not specified")),
        ]);
        let confirmation = TemplateParams::from([
            ("user_name", self.name.trim().to_string()),
            ("user_email", self.email.trim().to_string()),
            ("business_name", self.business_name.trim().to_string()),
            ("project_type", self.project_type.clone()),
            ("budget", budget),
            ("timeline", timeline),
        ]);

        [
            EmailRequest { template_id: CONTACT_OPERATOR_TEMPLATE, params: operator },
            EmailRequest { template_id: CONTACT_CONFIRMATION_TEMPLATE, params: confirmation },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Jane Doe".into(),
            email: "jane@biz.com".into(),
            business_name: "Jane's Bakery".into(),
            business_type: "Restaurant/Food Service".into(),
            ..ContactDraft::default()
        }
    }

    #[test]
    fn required_fields_populated_means_no_errors() {
        assert!(filled().validate().is_empty());
    }

    #[test]
    fn whitespace_only_required_fields_are_empty() {
        let draft = ContactDraft { name: "   ".into(), ..filled() };
        assert_eq!(draft.validate().get("name"), Some("Name is required"));
    }

    #[test]
    fn optional_phone_is_checked_only_when_present() {
        assert!(!ContactDraft { phone: String::new(), ..filled() }.validate().contains("phone"));
        let errors = ContactDraft { phone: "abc".into(), ..filled() }.validate();
        assert_eq!(errors.get("phone"), Some("Please enter a valid phone number"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_email_gets_shape_message() {
        let errors = ContactDraft { email: "jane@biz".into(), ..filled() }.validate();
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
    }

    #[test]
    fn only_drafts_with_identity_fields_are_saved() {
        assert!(!ContactDraft::default().worth_saving());
        let only_description = ContactDraft { description: "hi".into(), ..ContactDraft::default() };
        assert!(!only_description.worth_saving());
        assert!(ContactDraft { email: "j".into(), ..ContactDraft::default() }.worth_saving());
    }

    #[test]
    fn toggle_feature_adds_then_removes() {
        let mut draft = ContactDraft::default();
        draft.toggle_feature("Live Chat");
        draft.toggle_feature("Photo Gallery");
        assert_eq!(draft.features, vec!["Live Chat", "Photo Gallery"]);
        draft.toggle_feature("Live Chat");
        assert_eq!(draft.features, vec!["Photo Gallery"]);
    }

    #[test]
    fn operator_payload_fills_placeholders() {
        let [operator, confirmation] = filled().requests("now");
        assert_eq!(operator.template_id, CONTACT_OPERATOR_TEMPLATE);
        assert_eq!(operator.params["phone"], "Not provided");
        assert_eq!(operator.params["budget"], "Not specified");
        assert_eq!(operator.params["features"], "None selected");
        assert_eq!(operator.params["description"], "No description provided");
        assert_eq!(operator.params["from_email"], "jane@biz.com");
        assert_eq!(confirmation.template_id, CONTACT_CONFIRMATION_TEMPLATE);
        assert_eq!(confirmation.params["user_name"], "Jane Doe");
    }

    #[test]
    fn selected_features_are_comma_joined() {
        let mut draft = filled();
        draft.toggle_feature("Live Chat");
        draft.toggle_feature("Contact Forms");
        let [operator, _] = draft.requests("now");
        assert_eq!(operator.params["features"], "Live Chat, Contact Forms");
    }

    #[test]
    fn draft_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(filled()).expect("serializable");
        assert_eq!(json["businessName"], "Jane's Bakery");
        assert_eq!(json["projectType"], "new-website");
    }
}
