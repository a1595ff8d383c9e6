use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::accordion::Accordion;
use crate::components::scroll::use_scroll_to_top;
use crate::content::company;
use crate::content::pricing::FAQS;
use crate::Route;

#[function_component(Faq)]
pub fn faq() -> Html {
    use_scroll_to_top();

    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked "}<span class="gradient-text">{"Questions"}</span></h1>
                <p>{"Find answers to common questions about our services, pricing, and process. Can't find what you're looking for? Contact us!"}</p>
            </section>

            <section class="faq-section">
                <Accordion items={FAQS} />
            </section>

            <section class="faq-contact">
                <h2>{"Still Have Questions?"}</h2>
                <p>{"We're here to help! Get in touch with us and we'll answer any questions you have."}</p>
                <div class="faq-contact-methods">
                    <div>
                        <span class="label">{"Call us"}</span>
                        <a href={company::tel()}>{company::PHONE}</a>
                    </div>
                    <div>
                        <span class="label">{"Email us"}</span>
                        <a href={company::mailto()}>{company::EMAIL}</a>
                    </div>
                </div>
                <div class="hero-actions">
                    <Link<Route> to={Route::Contact} classes="btn-primary">{"Contact Us"}</Link<Route>>
                    <Link<Route> to={Route::HowItWorks} classes="btn-outline">{"Learn How It Works"}</Link<Route>>
                </div>
            </section>
        </div>
    }
}
