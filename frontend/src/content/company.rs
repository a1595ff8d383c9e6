pub const COMPANY_NAME: &str = "Everyman's Website Design";
pub const SHORT_NAME: &str = "EW";
pub const TAGLINE: &str = "Empowering small businesses with AI-powered website design.";
pub const REGION: &str = "Metro Detroit area, Michigan";

pub const EMAIL: &str = "everymanswebsitedesign@gmail.com";
pub const PHONE: &str = "(734) 577-7138";
const PHONE_DIGITS: &str = "7345777138";

pub struct Hours {
    pub day: &'static str,
    pub hours: &'static str,
}

pub const BUSINESS_HOURS: &[Hours] = &[
    Hours { day: "Monday - Friday", hours: "9AM-6PM EST" },
    Hours { day: "Saturday", hours: "10AM-4PM EST" },
    Hours { day: "Sunday", hours: "Closed" },
];

pub const HOURS_SHORT: &str = "Mon-Fri: 9AM-6PM EST";

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "10+", label: "Projects Completed" },
    Stat { value: "98%", label: "Client Satisfaction" },
    Stat { value: "6.2", label: "Average Delivery (Days)" },
    Stat { value: "250%", label: "Average ROI Increase" },
];

pub fn mailto() -> String {
    format!("mailto:{}", EMAIL)
}

pub fn tel() -> String {
    format!("tel:+1{}", PHONE_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_digits_match_display_number() {
        let digits: String = PHONE.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(digits, PHONE_DIGITS);
        assert_eq!(tel(), "tel:+17345777138");
    }
}
