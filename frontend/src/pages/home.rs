use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_scroll_to_top;
use crate::content::company::STATS;
use crate::Route;

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    ("⚡", "Lightning Fast", "Websites delivered in 5-7 days"),
    ("💲", "Affordable", "Starting at just $997"),
    ("✨", "AI-Powered", "Modern design meets smart technology"),
    ("🛡️", "Guaranteed", "30-day money-back guarantee"),
];

const STEPS: &[(&str, &str)] = &[
    ("Consultation", "Tell us about your business goals and vision"),
    ("AI Design", "Our AI creates your custom website design"),
    ("Launch", "Review, refine, and go live in days"),
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Maria Rossi",
        "Bella Vista Restaurant",
        "Orders increased by 200% in the first month! The new site paid for itself in weeks.",
    ),
    (
        "Jake Thompson",
        "FitCore Gym",
        "The design perfectly captured our brand. Professional, fast, and incredibly affordable.",
    ),
    (
        "Sophie Chen",
        "StyleHub Boutique",
        "Finally, a web design service that understands small business needs. Highly recommend!",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>
                    {"Professional Websites for "}
                    <span class="gradient-text">{"Small Businesses"}</span>
                </h1>
                <p>
                    {"Skip the expensive agencies and long wait times. Get a stunning, mobile-friendly website designed with AI and perfected by humans, delivered in days."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Get Your Free Quote"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="btn-outline">{"View Our Work"}</Link<Route>>
                </div>
                <p class="hero-guarantee">{"30-day money-back guarantee"}</p>
            </section>

            <section class="highlights">
                { for HIGHLIGHTS.iter().map(|(icon, title, description)| html! {
                    <div class="highlight-card">
                        <div class="highlight-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </section>

            <section class="home-steps">
                <h2>{"How It Works: "}<span class="gradient-text">{"Simple as 1-2-3"}</span></h2>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(i, (title, description))| html! {
                        <div class="step-card">
                            <div class="step-number">{i + 1}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::HowItWorks} classes="btn-outline">{"Learn More About Our Process"}</Link<Route>>
            </section>

            <section class="stats-strip">
                { for STATS.iter().map(|stat| html! {
                    <div class="stat">
                        <div class="stat-value">{stat.value}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }) }
            </section>

            <section class="testimonials">
                <h2>{"What Our "}<span class="gradient-text">{"Clients Say"}</span></h2>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|(name, business, text)| html! {
                        <figure class="testimonial">
                            <div class="stars">{"★★★★★"}</div>
                            <blockquote>{*text}</blockquote>
                            <figcaption>
                                <strong>{*name}</strong>
                                <span>{*business}</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
                <Link<Route> to={Route::LeaveReview} classes="btn-outline">{"Worked with us? Leave a review"}</Link<Route>>
            </section>

            <section class="cta">
                <h2>{"Ready to Transform Your Business Online?"}</h2>
                <p>{"Join the small businesses who chose a faster, more affordable path to a professional website."}</p>
                <Link<Route> to={Route::Contact} classes="btn-primary">{"Start Your Project"}</Link<Route>>
            </section>
        </div>
    }
}
