use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::modal::Modal;
use crate::components::scroll::use_scroll_to_top;
use crate::content::company::STATS;
use crate::content::portfolio::{self, Project, ALL, FILTERS};
use crate::Route;

fn stars(rating: u8) -> String {
    "★".repeat(rating as usize)
}

#[derive(Properties, PartialEq)]
struct ProjectDetailsProps {
    project: &'static Project,
    on_close: Callback<()>,
}

#[function_component(ProjectDetails)]
fn project_details(props: &ProjectDetailsProps) -> Html {
    let project = props.project;
    html! {
        <Modal title={project.title} on_close={props.on_close.clone()}>
            <div class="project-modal-icon">{project.icon}</div>
            <dl class="project-facts">
                <dt>{"Industry"}</dt><dd>{project.industry}</dd>
                <dt>{"Delivered in"}</dt><dd>{project.delivery_time}</dd>
                <dt>{"Rating"}</dt><dd class="stars">{stars(project.rating)}</dd>
            </dl>
            <h3>{"Key Features"}</h3>
            <ul>
                { for project.features.iter().map(|f| html! { <li>{*f}</li> }) }
            </ul>
            <blockquote class="project-testimonial">
                <p>{format!("\"{}\"", project.testimonial)}</p>
                <cite>{format!("- {}", project.client)}</cite>
            </blockquote>
            <div class="hero-actions">
                <a href={project.live_url} target="_blank" rel="noopener noreferrer" class="btn-outline">
                    {"View Live Demo"}
                </a>
                <Link<Route> to={Route::Contact} classes="btn-primary">{"Start a Similar Project"}</Link<Route>>
            </div>
        </Modal>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    use_scroll_to_top();
    let active = use_state(|| ALL);
    let selected = use_state(|| None::<u32>);

    let filter_buttons = FILTERS.iter().map(|filter| {
        let onclick = {
            let active = active.clone();
            let id = filter.id;
            Callback::from(move |_: MouseEvent| active.set(id))
        };
        html! {
            <button class={classes!("filter-button", (*active == filter.id).then_some("active"))} {onclick}>
                {filter.name}
            </button>
        }
    });

    let cards = portfolio::filter(*active).map(|project| {
        let onclick = {
            let selected = selected.clone();
            let id = project.id;
            Callback::from(move |_: MouseEvent| selected.set(Some(id)))
        };
        html! {
            <div class="project-card">
                <div class="project-icon">{project.icon}</div>
                <h3>{project.title}</h3>
                <p class="project-industry">{project.industry}</p>
                <div class="project-meta">
                    <span>{format!("Delivered in {}", project.delivery_time)}</span>
                    <span class="stars">{stars(project.rating)}</span>
                </div>
                <p class="project-testimonial-short">{project.testimonial}</p>
                <button class="btn-outline" {onclick}>{"View Details"}</button>
            </div>
        }
    });

    let close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <div class="portfolio-page">
            <section class="page-hero">
                <h1>{"Our "}<span class="gradient-text">{"Portfolio"}</span></h1>
                <p>{"See how we've helped small businesses transform their online presence with AI-powered website design."}</p>
            </section>

            <section class="stats-strip">
                { for STATS.iter().map(|stat| html! {
                    <div class="stat">
                        <div class="stat-value">{stat.value}</div>
                        <div class="stat-label">{stat.label}</div>
                    </div>
                }) }
            </section>

            <section class="portfolio-filters">
                <span class="filter-label">{"Filter by Industry:"}</span>
                { for filter_buttons }
            </section>

            <section class="project-grid">
                { for cards }
            </section>

            if let Some(project) = (*selected).and_then(portfolio::find) {
                <ProjectDetails {project} on_close={close} />
            }

            <section class="cta">
                <h2>{"Your Business Could Be Next"}</h2>
                <Link<Route> to={Route::Contact} classes="btn-primary">{"Start Your Project"}</Link<Route>>
            </section>
        </div>
    }
}
