use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_scroll_to_top;
use crate::Route;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    price: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "🖥️",
        title: "Custom Website Design",
        description: "Professional, AI-powered websites tailored to your business needs and brand identity.",
        features: &["Custom Design", "Mobile Responsive", "SEO Optimized", "Fast Loading"],
        price: "Starting at $997",
    },
    Service {
        icon: "🔄",
        title: "Website Redesign",
        description: "Transform your existing website with modern design and improved user experience.",
        features: &["Modern UI/UX", "Performance Boost", "Mobile Optimization", "Content Migration"],
        price: "Starting at $797",
    },
    Service {
        icon: "🎯",
        title: "Landing Pages",
        description: "High-converting landing pages designed to capture leads and drive sales.",
        features: &["Conversion Focused", "A/B Testing Ready", "Lead Capture", "Analytics Integration"],
        price: "Starting at $497",
    },
];

const ADD_ONS: &[(&str, &str, &str)] = &[
    ("SEO Optimization", "Improve your search engine rankings and drive more organic traffic.", "$297 one-time"),
    ("Website Maintenance", "Keep your website updated, secure, and running smoothly.", "$197/month"),
    ("Performance Optimization", "Speed up your website for better user experience and SEO.", "$397 one-time"),
];

const INDUSTRIES: &[(&str, &str, &str)] = &[
    ("🍕", "Restaurants & Food", "Menu displays, online ordering, reservation systems"),
    ("🏥", "Healthcare", "Appointment booking, patient portals, secure contact forms"),
    ("💼", "Professional Services", "Service listings, client portals, consultation booking"),
    ("🏠", "Real Estate", "Property listings, virtual tours, lead capture"),
    ("💪", "Fitness & Wellness", "Class schedules, membership signup, trainer profiles"),
    ("📚", "Education", "Course catalogs, student portals, online learning"),
    ("🚗", "Automotive", "Inventory displays, service booking, financing tools"),
];

const ADVANTAGES: &[(&str, &str)] = &[
    ("7x Faster Delivery", "Traditional agencies take 2-3 months. We deliver in 5-7 days using AI technology."),
    ("70% Cost Savings", "Skip the $5,000-$15,000 agency fees. Professional websites starting at $997."),
    ("24/7 AI Design", "Our AI works around the clock, creating multiple design variations in hours."),
    ("Consistent Quality", "AI ensures every website meets our high standards for design and performance."),
];

#[function_component(Services)]
pub fn services() -> Html {
    use_scroll_to_top();

    html! {
        <div class="services-page">
            <section class="page-hero">
                <h1>{"AI-Powered "}<span class="gradient-text">{"Web Design Services"}</span></h1>
                <p>{"Professional websites designed by AI, perfected by humans. Fast, affordable, and tailored to your business needs."}</p>
                <Link<Route> to={Route::Contact} classes="btn-primary">{"Start Your Project Today"}</Link<Route>>
            </section>

            <section class="service-grid">
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card">
                        <div class="service-icon">{service.icon}</div>
                        <h3>{service.title}</h3>
                        <p>{service.description}</p>
                        <ul>
                            { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
                        </ul>
                        <div class="service-price">{service.price}</div>
                    </div>
                }) }
            </section>

            <section class="advantages">
                <h2>{"Why Choose "}<span class="gradient-text">{"AI-Powered Design?"}</span></h2>
                <div class="advantage-grid">
                    { for ADVANTAGES.iter().map(|(title, description)| html! {
                        <div class="advantage">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="add-ons">
                <h2>{"Add-On Services"}</h2>
                <p>{"Enhance your website with our professional add-on services."}</p>
                <div class="add-on-grid">
                    { for ADD_ONS.iter().map(|(title, description, price)| html! {
                        <div class="add-on">
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                            <span class="service-price">{*price}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section class="industries">
                <h2>{"Industries We Serve"}</h2>
                <div class="industry-grid">
                    { for INDUSTRIES.iter().map(|(icon, name, description)| html! {
                        <div class="industry">
                            <span class="industry-icon">{*icon}</span>
                            <h3>{*name}</h3>
                            <p>{*description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="cta">
                <h2>{"Ready to Get Started?"}</h2>
                <p>{"Let's discuss your project and create a website that helps your business grow."}</p>
                <Link<Route> to={Route::Contact} classes="btn-primary">{"Get Your Free Quote"}</Link<Route>>
            </section>
        </div>
    }
}
