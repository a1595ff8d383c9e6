use chrono::{Datelike, Local};
use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::company;
use crate::forms::newsletter::{is_subscribed, remember_subscribed, NewsletterDraft};
use crate::forms::{use_form, SubmissionOutcome};
use crate::storage::LocalStore;
use crate::Route;

const COLUMNS: &[(&str, &[(&str, Route)])] = &[
    (
        "Services",
        &[
            ("Website Design", Route::Services),
            ("Website Redesign", Route::Services),
            ("E-commerce Sites", Route::Services),
            ("Landing Pages", Route::Services),
        ],
    ),
    (
        "Company",
        &[
            ("About Us", Route::About),
            ("Our Process", Route::HowItWorks),
            ("Portfolio", Route::Portfolio),
            ("Pricing", Route::Pricing),
            ("Contact", Route::Contact),
        ],
    ),
    (
        "Resources",
        &[
            ("Blog", Route::Blog),
            ("FAQ", Route::Faq),
            ("Leave a Review", Route::LeaveReview),
            ("Help Center", Route::Help),
            ("Privacy Policy", Route::Privacy),
            ("Terms of Service", Route::Terms),
        ],
    ),
];

#[function_component(Newsletter)]
fn newsletter() -> Html {
    let subscribed = use_state(|| is_subscribed(&LocalStore));
    let on_success = {
        let subscribed = subscribed.clone();
        Callback::from(move |_| {
            info!("Newsletter signup complete");
            remember_subscribed(&LocalStore);
            subscribed.set(true);
        })
    };
    let form = use_form::<NewsletterDraft>(on_success);

    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.edit("email", move |draft| draft.email = input.value());
        })
    };
    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.submit();
        })
    };

    let pending = form.outcome().is_pending();

    html! {
        <div class="footer-newsletter">
            <h3>{"Stay Updated"}</h3>
            <p>{"Get the latest web design tips and AI insights delivered to your inbox."}</p>
            if *subscribed || *form.outcome() == SubmissionOutcome::Succeeded {
                <p class="newsletter-success">{"Thanks for subscribing! Check your inbox for a confirmation."}</p>
            } else {
                <form class="newsletter-form" onsubmit={onsubmit} novalidate={true}>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        value={form.draft().email.clone()}
                        oninput={oninput}
                        disabled={pending}
                    />
                    <button type="submit" class="btn-primary" disabled={pending}>
                        {if pending { "Subscribing..." } else { "Subscribe" }}
                    </button>
                </form>
                if let Some(error) = form.error("email") {
                    <p class="field-error">{error}</p>
                }
                if let Some(message) = form.outcome().failure() {
                    <p class="form-error">{message}</p>
                }
            }
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    let columns = COLUMNS.iter().map(|(title, links)| {
        html! {
            <div class="footer-column">
                <h3>{*title}</h3>
                <ul>
                    { for links.iter().map(|(name, route)| html! {
                        <li><Link<Route> to={route.clone()} classes="footer-link">{*name}</Link<Route>></li>
                    }) }
                </ul>
            </div>
        }
    });

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        <span class="logo-mark">{company::SHORT_NAME}</span>
                        <span>{company::COMPANY_NAME}</span>
                    </Link<Route>>
                    <p>{company::TAGLINE}</p>
                    <ul class="footer-contact">
                        <li>{company::REGION}</li>
                        <li><a href={company::tel()}>{company::PHONE}</a></li>
                        <li><a href={company::mailto()}>{company::EMAIL}</a></li>
                        <li>{company::HOURS_SHORT}</li>
                    </ul>
                </div>
                { for columns }
            </div>
            <Newsletter />
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, company::COMPANY_NAME)}</p>
            </div>
        </footer>
    }
}
