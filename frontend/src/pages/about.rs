use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_scroll_to_top;
use crate::content::company;
use crate::Route;

const VALUES: &[(&str, &str)] = &[
    ("Innovation First", "We use AI to make professional websites accessible to every small business."),
    ("Small Business Focus", "We understand the unique challenges small businesses face. Every solution we create is designed with your success in mind."),
    ("Quality Guaranteed", "Every website meets our standards, and we stand behind our work with a 30-day guarantee."),
    ("Speed & Efficiency", "Time is money for small businesses. Our AI-powered process delivers professional results in days, not months."),
];

struct Member {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
    expertise: &'static [&'static str],
}

const TEAM: &[Member] = &[
    Member {
        name: "Dustin Arnold",
        role: "Founder & Lead Designer",
        bio: "Founded Everyman's Website Design to help small businesses succeed online through fast, AI-assisted web design.",
        expertise: &["Business Strategy", "Web Design", "AI Technology", "Small Business Growth"],
    },
    Member {
        name: "Maria Arnold",
        role: "Customer Success",
        bio: "Makes sure every client has a great experience. Manages client relationships and keeps projects on track.",
        expertise: &["Client Relations", "Project Management", "Customer Support"],
    },
];

const MILESTONES: &[(&str, &str)] = &[
    ("The Vision", "Founded with the mission to make professional web design accessible to small businesses."),
    ("AI-Powered Development", "Built a process that pairs AI efficiency with human creativity."),
    ("Building Excellence", "Establishing a reputation for quality, speed, and affordability."),
    ("Expanding Reach", "Serving small businesses in the Metro Detroit area and beyond."),
];

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_to_top();

    html! {
        <div class="about-page">
            <section class="page-hero">
                <h1>{"Empowering Small Businesses with "}<span class="gradient-text">{"AI-Powered Design"}</span></h1>
                <p>{"We believe every small business deserves a professional website, without agency prices or months of waiting."}</p>
            </section>

            <section class="values">
                { for VALUES.iter().map(|(title, description)| html! {
                    <div class="value-card">
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </section>

            <section class="team">
                <h2>{"Meet the Team"}</h2>
                <div class="team-grid">
                    { for TEAM.iter().map(|member| html! {
                        <div class="team-card">
                            <h3>{member.name}</h3>
                            <p class="team-role">{member.role}</p>
                            <p>{member.bio}</p>
                            <div class="team-expertise">
                                { for member.expertise.iter().map(|e| html! { <span class="tag">{*e}</span> }) }
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="milestones">
                <h2>{"Our Story"}</h2>
                <ol class="milestone-list">
                    { for MILESTONES.iter().map(|(title, description)| html! {
                        <li>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </li>
                    }) }
                </ol>
            </section>

            <section class="stats-strip">
                { for company::STATS.iter().map(|stat| html! {
                    <div class="stat">
                        <div class="stat-value">{stat.value}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }) }
            </section>

            <section class="cta">
                <h2>{format!("Work with {}", company::COMPANY_NAME)}</h2>
                <p>{format!("Based in the {}.", company::REGION)}</p>
                <Link<Route> to={Route::Contact} classes="btn-primary">{"Start Your Project"}</Link<Route>>
            </section>
        </div>
    }
}
