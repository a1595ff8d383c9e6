use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_scroll_to_top;
use crate::content::company;
use crate::Route;

#[function_component(Help)]
pub fn help() -> Html {
    use_scroll_to_top();
    html! {
        <div class="help-page">
            <section class="page-hero">
                <h1>{"Help Center"}</h1>
                <p>{"We're here to help! Choose the best way to get the support you need."}</p>
            </section>
            <section class="help-grid">
                <div class="help-card">
                    <h3>{"FAQ"}</h3>
                    <p>{"Find answers to common questions"}</p>
                    <Link<Route> to={Route::Faq}>{"View FAQ Section"}</Link<Route>>
                </div>
                <div class="help-card">
                    <h3>{"Contact Support"}</h3>
                    <p>{"Get in touch with our team"}</p>
                    <Link<Route> to={Route::Contact}>{"Contact Us"}</Link<Route>>
                </div>
                <div class="help-card">
                    <h3>{"Phone Support"}</h3>
                    <p>{"Call us during business hours"}</p>
                    <a href={company::tel()}>{company::PHONE}</a>
                </div>
                <div class="help-card">
                    <h3>{"Email Support"}</h3>
                    <p>{"Send us a detailed message"}</p>
                    <a href={company::mailto()}>{company::EMAIL}</a>
                </div>
            </section>
        </div>
    }
}
