use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_scroll_to_top;
use crate::content::company;
use crate::Route;

const LAST_UPDATED: &str = "October 21, 2025";

fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_scroll_to_top();
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>
            <p class="legal-updated">{format!("Last updated: {}", LAST_UPDATED)}</p>

            <section>
                <h2>{"Information We Collect"}</h2>
                <p>{"We collect information you provide directly to us, such as when you:"}</p>
                <ul>
                    <li>{"Fill out our contact form"}</li>
                    <li>{"Request a quote for our services"}</li>
                    <li>{"Subscribe to our newsletter"}</li>
                    <li>{"Leave a review"}</li>
                    <li>{"Communicate with us via email or phone"}</li>
                </ul>
            </section>

            <section>
                <h2>{"Information Stored in Your Browser"}</h2>
                <p>
                    {"Unfinished contact and review forms are saved in your browser's local storage so you don't lose your progress. They are removed once the form is sent. Your light or dark theme choice and newsletter signup status are stored the same way. None of this leaves your device until you submit a form."}
                </p>
            </section>

            <section>
                <h2>{"How We Use Your Information"}</h2>
                <p>{"We use the information we collect to:"}</p>
                <ul>
                    <li>{"Provide, maintain, and improve our services"}</li>
                    <li>{"Send quotes, confirmations and related information"}</li>
                    <li>{"Respond to your comments and questions"}</li>
                </ul>
            </section>

            <section>
                <h2>{"Information Sharing"}</h2>
                <p>
                    {"We do not sell, trade, or otherwise transfer your personal information to third parties without your consent, except for the email delivery service that sends form submissions to us, or as required by law."}
                </p>
            </section>

            <section>
                <h2>{"Contact Us"}</h2>
                <p>
                    {"If you have any questions about this Privacy Policy, please contact us at "}
                    <a href={company::mailto()}>{company::EMAIL}</a>
                </p>
            </section>
            { legal_links() }
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    use_scroll_to_top();
    html! {
        <div class="legal-content terms-of-service">
            <h1>{"Terms of Service"}</h1>
            <p class="legal-updated">{format!("Last updated: {}", LAST_UPDATED)}</p>

            <section>
                <h2>{"Agreement to Terms"}</h2>
                <p>
                    {"By accessing and using our website and services, you agree to be bound by these Terms of Service and our Privacy Policy. If you do not agree to these terms, please do not use our services."}
                </p>
            </section>

            <section>
                <h2>{"Our Services"}</h2>
                <p>{"We provide AI-powered website design and development services for small businesses, including:"}</p>
                <ul>
                    <li>{"Website design and development"}</li>
                    <li>{"Website redesign and optimization"}</li>
                    <li>{"Website maintenance and support"}</li>
                </ul>
            </section>

            <section>
                <h2>{"Payment and Refunds"}</h2>
                <p>
                    {"We offer a 30-day money-back guarantee for our services. If you're not satisfied with our work, you can request a full refund within 30 days of project completion."}
                </p>
            </section>

            <section>
                <h2>{"Intellectual Property"}</h2>
                <p>
                    {"Upon full payment, you own the final website and all custom content we create for you. We retain the right to showcase your project in our portfolio and marketing materials."}
                </p>
            </section>

            <section>
                <h2>{"Limitation of Liability"}</h2>
                <p>
                    {"Our liability is limited to the amount paid for our services. We are not liable for any indirect, incidental, or consequential damages."}
                </p>
            </section>

            <section>
                <h2>{"Contact Information"}</h2>
                <p>
                    {"If you have questions about these Terms of Service, please "}
                    <Link<Route> to={Route::Contact}>{"contact us"}</Link<Route>>
                    {"."}
                </p>
            </section>
            { legal_links() }
        </div>
    }
}
