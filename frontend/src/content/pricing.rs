#[derive(Debug, PartialEq)]
pub struct Feature {
    pub name: &'static str,
    pub included: bool,
}

const fn yes(name: &'static str) -> Feature {
    Feature { name, included: true }
}

const fn no(name: &'static str) -> Feature {
    Feature { name, included: false }
}

#[derive(Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub original_price: u32,
    pub popular: bool,
    pub features: &'static [Feature],
    pub delivery_time: &'static str,
    pub revisions: &'static str,
    pub support: &'static str,
}

impl Plan {
    pub fn discount(&self) -> u32 {
        self.original_price.saturating_sub(self.price)
    }
}

pub static PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        description: "Perfect for small businesses getting started online",
        price: 997,
        original_price: 1497,
        popular: false,
        features: &[
            yes("Up to 5 pages"),
            yes("Mobile responsive design"),
            yes("Basic SEO optimization"),
            yes("Contact form integration"),
            yes("Social media links"),
            yes("Google Analytics setup"),
            yes("1 round of revisions"),
            yes("7-day delivery"),
            no("E-commerce functionality"),
            no("Custom animations"),
            no("Advanced SEO package"),
            no("Priority support"),
        ],
        delivery_time: "5-7 days",
        revisions: "1 round",
        support: "Email support",
    },
    Plan {
        name: "Professional",
        description: "Most popular choice for growing businesses",
        price: 1497,
        original_price: 2497,
        popular: true,
        features: &[
            yes("Up to 10 pages"),
            yes("Mobile responsive design"),
            yes("Advanced SEO optimization"),
            yes("Contact form integration"),
            yes("Social media integration"),
            yes("Google Analytics & Search Console"),
            yes("Basic e-commerce (up to 20 products)"),
            yes("Custom animations"),
            yes("2 rounds of revisions"),
            yes("5-day delivery"),
            yes("Priority email support"),
            yes("Performance optimization"),
        ],
        delivery_time: "4-5 days",
        revisions: "2 rounds",
        support: "Priority email support",
    },
    Plan {
        name: "Premium",
        description: "For businesses that need advanced features",
        price: 2497,
        original_price: 3997,
        popular: false,
        features: &[
            yes("Up to 20 pages"),
            yes("Mobile responsive design"),
            yes("Advanced SEO optimization"),
            yes("Custom contact forms"),
            yes("Social media integration"),
            yes("Advanced analytics setup"),
            yes("Full e-commerce (unlimited products)"),
            yes("Custom animations & interactions"),
            yes("Blog/CMS setup"),
            yes("3 rounds of revisions"),
            yes("3-day delivery"),
            yes("Priority phone & email support"),
        ],
        delivery_time: "3-4 days",
        revisions: "3 rounds",
        support: "Priority phone & email support",
    },
];

#[derive(Debug, PartialEq)]
pub struct ValueProp {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub stat: &'static str,
}

pub const VALUE_PROPS: &[ValueProp] = &[
    ValueProp {
        icon: "⚡",
        title: "7x Faster Than Agencies",
        description: "Traditional agencies take 2-3 months. We deliver in days.",
        stat: "5-7 days vs 8-12 weeks",
    },
    ValueProp {
        icon: "💲",
        title: "70% Cost Savings",
        description: "Professional quality at fraction of agency prices.",
        stat: "$997 vs $5,000+",
    },
    ValueProp {
        icon: "🛡️",
        title: "30-Day Money Back",
        description: "Not satisfied? Get your money back, no questions asked.",
        stat: "100% guaranteed",
    },
    ValueProp {
        icon: "✨",
        title: "AI + Human Quality",
        description: "AI efficiency with human creativity and oversight.",
        stat: "Best of both worlds",
    },
];

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How does the AI-powered design process work?",
        answer: "Our AI analyzes your business type, industry trends, and user preferences to create initial designs. Our human designers then refine and customize these designs to ensure they perfectly match your brand and goals.",
    },
    Faq {
        question: "What if I need changes after delivery?",
        answer: "Each plan includes revision rounds as specified. Additional revisions can be purchased for $97 each. We want you to be completely satisfied with your website.",
    },
    Faq {
        question: "Do you provide hosting?",
        answer: "We can recommend reliable hosting providers and help with setup, but hosting is separate. Most clients use services like Netlify, Vercel, or traditional hosts like Bluehost.",
    },
    Faq {
        question: "Can I see examples of previous work?",
        answer: "Absolutely! Check out our portfolio page to see examples of websites we've created across different industries and business types.",
    },
    Faq {
        question: "What about domain registration?",
        answer: "Domain registration is separate (typically $10-15/year). We can help you register a domain or work with an existing one you own.",
    },
    Faq {
        question: "Can I upgrade my plan later?",
        answer: "Absolutely! You can upgrade your plan at any time. We'll apply the difference in pricing and add the additional features to your website.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub design_cost: u32,
    pub development_cost: u32,
    pub time_weeks: u32,
    pub revision_cost: u32,
}

impl Quote {
    pub fn total(&self) -> u32 {
        self.design_cost + self.development_cost
    }
}

pub const AGENCY: Quote = Quote {
    design_cost: 5000,
    development_cost: 8000,
    time_weeks: 12,
    revision_cost: 500,
};

pub const OURS: Quote = Quote {
    design_cost: 997,
    development_cost: 0,
    time_weeks: 1,
    revision_cost: 97,
};

/// Agency-vs-us comparison shown under the plan cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub savings: u32,
    pub savings_percent: u32,
    pub weeks_saved: u32,
}

pub fn compare(agency: &Quote, ours: &Quote) -> Comparison {
    let savings = agency.total().saturating_sub(ours.total());
    let savings_percent = match agency.total() {
        0 => 0,
        total => savings * 100 / total,
    };
    Comparison {
        savings,
        savings_percent,
        weeks_saved: agency.time_weeks.saturating_sub(ours.time_weeks),
    }
}

/// `12003` -> `"$12,003"`.
pub fn dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agency_comparison() {
        let cmp = compare(&AGENCY, &OURS);
        assert_eq!(cmp.savings, 12_003);
        assert_eq!(cmp.savings_percent, 92);
        assert_eq!(cmp.weeks_saved, 11);
    }

    #[test]
    fn comparison_never_underflows() {
        let cmp = compare(&OURS, &AGENCY);
        assert_eq!(cmp, Comparison { savings: 0, savings_percent: 0, weeks_saved: 0 });
    }

    #[test]
    fn dollar_formatting() {
        assert_eq!(dollars(0), "$0");
        assert_eq!(dollars(997), "$997");
        assert_eq!(dollars(1497), "$1,497");
        assert_eq!(dollars(1_234_567), "$1,234,567");
    }

    #[test]
    fn exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
        assert!(PLANS.iter().all(|p| p.discount() > 0));
    }
}
