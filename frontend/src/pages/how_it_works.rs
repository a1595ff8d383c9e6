use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_scroll_to_top;
use crate::Route;

const PHASES: &[(&str, &str, &str, &[&str])] = &[
    (
        "Day 1",
        "Discovery & Consultation",
        "We start with a detailed consultation to understand your business, goals, target audience, and design preferences.",
        &[
            "Business goals and objectives discussion",
            "Target audience analysis",
            "Brand guidelines and preferences",
            "Content and functionality requirements",
        ],
    ),
    (
        "Days 2-3",
        "AI Design Generation",
        "Our AI creates multiple design concepts tailored specifically to your industry and brand identity.",
        &[
            "Industry best practices analyzed",
            "Multiple design variations generated",
            "Mobile-responsive layouts created",
            "Color schemes and typography optimized",
        ],
    ),
    (
        "Days 4-5",
        "Human Refinement",
        "Our design experts review and refine the AI-generated concepts, ensuring quality and adding human creativity.",
        &[
            "Professional design review and enhancement",
            "User experience optimization",
            "Brand consistency verification",
            "Performance and accessibility checks",
        ],
    ),
    (
        "Days 6-7",
        "Review & Launch",
        "Final review with you, any last-minute adjustments, and then we launch your website to the world.",
        &[
            "Client review and feedback session",
            "Final adjustments and refinements",
            "Quality assurance testing",
            "Website launch and handover",
        ],
    ),
];

const AGENCY_TIMELINE: &[&str] = &[
    "Initial consultation (Week 1)",
    "Proposal and contracts (Week 2)",
    "Design mockups (Weeks 3-6)",
    "Multiple revision rounds (Weeks 7-10)",
    "Development phase (Weeks 11-12)",
    "Testing and launch (Week 13)",
];

const OUR_TIMELINE: &[&str] = &[
    "Consultation & discovery (Day 1)",
    "AI design generation (Days 2-3)",
    "Human refinement (Days 4-5)",
    "Review & launch (Days 6-7)",
];

fn timeline(title: &str, class: &'static str, steps: &[&str]) -> Html {
    html! {
        <div class={classes!("timeline-card", class)}>
            <h3>{title}</h3>
            <ol>
                { for steps.iter().map(|step| html! { <li>{*step}</li> }) }
            </ol>
        </div>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    use_scroll_to_top();

    html! {
        <div class="how-it-works-page">
            <section class="page-hero">
                <h1>{"How It "}<span class="gradient-text">{"Works"}</span></h1>
                <p>{"From first conversation to launch in about a week. Here is exactly what happens along the way."}</p>
            </section>

            <section class="phases">
                { for PHASES.iter().enumerate().map(|(i, (when, title, description, tasks))| html! {
                    <div class="phase">
                        <div class="phase-marker">
                            <span class="step-number">{i + 1}</span>
                            <span class="phase-when">{*when}</span>
                        </div>
                        <div class="phase-body">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                            <ul>
                                { for tasks.iter().map(|task| html! { <li>{*task}</li> }) }
                            </ul>
                        </div>
                    </div>
                }) }
            </section>

            <section class="timeline-comparison">
                <h2>{"Traditional Agency vs. Our Process"}</h2>
                <div class="timeline-grid">
                    { timeline("Traditional Agencies", "agency", AGENCY_TIMELINE) }
                    { timeline("Everyman's Website Design", "ours", OUR_TIMELINE) }
                </div>
            </section>

            <section class="cta">
                <h2>{"Ready to Start?"}</h2>
                <p>{"Book your free consultation and have a live website next week."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Get Started"}</Link<Route>>
                    <Link<Route> to={Route::Faq} classes="btn-outline">{"Read the FAQ"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
