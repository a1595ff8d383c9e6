use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::field::{SelectField, TextAreaField, TextField};
use crate::components::scroll::{scroll_to_top, use_scroll_to_top};
use crate::content::company;
use crate::forms::contact::{
    ContactDraft, BUDGETS, BUSINESS_TYPES, FEATURES, HEAR_ABOUT, PROJECT_TYPES, TIMELINES,
};
use crate::forms::{use_form, SubmissionOutcome, UseFormHandle};
use crate::Route;

const PROCESS_STEPS: &[(&str, &str, &str)] = &[
    ("01", "Submit Project Details", "Tell us about your business and project requirements"),
    ("02", "Free Consultation", "We will schedule a call to discuss your needs and provide a custom quote"),
    ("03", "Project Kickoff", "Once approved, we start your website and deliver in 5-7 days"),
];

/// Builds an `onchange` for one text field of the draft.
fn setter(
    form: &UseFormHandle<ContactDraft>,
    field: &'static str,
    apply: fn(&mut ContactDraft, String),
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| form.edit(field, move |draft| apply(draft, value)))
}

#[function_component(ThankYou)]
fn thank_you() -> Html {
    html! {
        <div class="thank-you">
            <div class="thank-you-icon">{"✓"}</div>
            <h1>{"Thank You!"}</h1>
            <p>
                {"We have received your project details and will get back to you within 24 hours with a custom quote and next steps."}
            </p>
            <div class="thank-you-next">
                <h3>{"What happens next?"}</h3>
                <ul>
                    <li>{"We will review your project requirements"}</li>
                    <li>{"Prepare a custom quote and timeline"}</li>
                    <li>{"Schedule a consultation call"}</li>
                    <li>{"Send you a detailed project proposal"}</li>
                </ul>
            </div>
            <Link<Route> to={Route::Home} classes="btn-primary">{"Back to Home"}</Link<Route>>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    use_scroll_to_top();
    let form = use_form::<ContactDraft>(Callback::from(|_| scroll_to_top()));

    if *form.outcome() == SubmissionOutcome::Succeeded {
        return html! { <div class="contact-page"><ThankYou /></div> };
    }

    let draft = form.draft();
    let pending = form.outcome().is_pending();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            form.submit();
        })
    };

    let project_types = PROJECT_TYPES.iter().map(|(value, label, description)| {
        let checked = draft.project_type == *value;
        let onchange = {
            let form = form.clone();
            Callback::from(move |_: Event| {
                form.edit("projectType", move |d| d.project_type = value.to_string())
            })
        };
        html! {
            <label class={classes!("project-type", checked.then_some("selected"))}>
                <input type="radio" name="projectType" value={*value} checked={checked} onchange={onchange} />
                <div class="project-type-label">{*label}</div>
                <div class="project-type-description">{*description}</div>
            </label>
        }
    });

    let features = FEATURES.iter().map(|feature| {
        let checked = draft.features.iter().any(|f| f == feature);
        let onchange = {
            let form = form.clone();
            Callback::from(move |_: Event| form.edit("features", move |d| d.toggle_feature(feature)))
        };
        html! {
            <label class="feature-option">
                <input type="checkbox" checked={checked} onchange={onchange} />
                <span>{*feature}</span>
            </label>
        }
    });

    html! {
        <div class="contact-page">
            <section class="page-hero">
                <h1>{"Let's Build Your "}<span class="gradient-text">{"Dream Website"}</span></h1>
                <p>{"Tell us about your project and we'll send a custom quote within 24 hours."}</p>
                <div class="hero-badges">
                    <span>{"Free consultation"}</span>
                    <span>{"24-hour response"}</span>
                    <span>{"Custom quote"}</span>
                </div>
            </section>

            <section class="process-steps">
                { for PROCESS_STEPS.iter().map(|(step, title, description)| html! {
                    <div class="process-step">
                        <div class="step-number">{*step}</div>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }) }
            </section>

            <section class="contact-main">
                <div class="contact-form-card">
                    <h2>{"Project Details"}</h2>
                    <form onsubmit={onsubmit} novalidate={true}>
                        <fieldset class="form-field">
                            <legend>{"What type of project do you need? *"}</legend>
                            <div class="project-types">{ for project_types }</div>
                        </fieldset>

                        <div class="form-row">
                            <TextField id="name" label="Your Name" required=true
                                value={draft.name.clone()} placeholder="John Smith"
                                error={form.error("name")}
                                onchange={setter(&form, "name", |d, v| d.name = v)} />
                            <TextField id="email" label="Email Address" required=true input_type="email"
                                value={draft.email.clone()} placeholder="john@example.com"
                                error={form.error("email")}
                                onchange={setter(&form, "email", |d, v| d.email = v)} />
                        </div>

                        <div class="form-row">
                            <TextField id="phone" label="Phone Number" input_type="tel"
                                value={draft.phone.clone()} placeholder={company::PHONE}
                                error={form.error("phone")}
                                onchange={setter(&form, "phone", |d, v| d.phone = v)} />
                            <TextField id="businessName" label="Business Name" required=true
                                value={draft.business_name.clone()} placeholder="Your Business Name"
                                error={form.error("businessName")}
                                onchange={setter(&form, "businessName", |d, v| d.business_name = v)} />
                        </div>

                        <div class="form-row">
                            <SelectField id="businessType" label="Business Type" required=true
                                value={draft.business_type.clone()} options={BUSINESS_TYPES}
                                placeholder="Select your industry"
                                error={form.error("businessType")}
                                onchange={setter(&form, "businessType", |d, v| d.business_type = v)} />
                            <SelectField id="timeline" label="Preferred Timeline"
                                value={draft.timeline.clone()} options={TIMELINES}
                                placeholder="Select timeline"
                                onchange={setter(&form, "timeline", |d, v| d.timeline = v)} />
                        </div>

                        <SelectField id="budget" label="Budget Range"
                            value={draft.budget.clone()} options={BUDGETS}
                            placeholder="Select budget range"
                            onchange={setter(&form, "budget", |d, v| d.budget = v)} />

                        <fieldset class="form-field">
                            <legend>{"What features do you need? (Select all that apply)"}</legend>
                            <div class="feature-grid">{ for features }</div>
                        </fieldset>

                        <TextAreaField id="description" label="Project Description"
                            value={draft.description.clone()}
                            placeholder="Tell us more about your project, goals, and any specific requirements..."
                            onchange={setter(&form, "description", |d, v| d.description = v)} />

                        <SelectField id="hearAbout" label="How did you hear about us?"
                            value={draft.hear_about.clone()} options={HEAR_ABOUT}
                            placeholder="Select an option"
                            onchange={setter(&form, "hearAbout", |d, v| d.hear_about = v)} />

                        if let Some(message) = form.outcome().failure() {
                            <div class="form-error" role="alert">{message}</div>
                        }

                        <button type="submit" class="btn-primary btn-block" disabled={pending}>
                            {if pending { "Sending..." } else { "Get My Free Quote" }}
                        </button>
                    </form>
                </div>

                <aside class="contact-sidebar">
                    <div class="contact-card">
                        <h3>{"Phone"}</h3>
                        <a href={company::tel()}>{company::PHONE}</a>
                        <p>{company::HOURS_SHORT}</p>
                    </div>
                    <div class="contact-card">
                        <h3>{"Email"}</h3>
                        <a href={company::mailto()}>{company::EMAIL}</a>
                        <p>{"Response within 24 hours"}</p>
                    </div>
                    <div class="contact-card">
                        <h3>{"Business Hours"}</h3>
                        { for company::BUSINESS_HOURS.iter().map(|h| html! {
                            <p>{format!("{}: {}", h.day, h.hours)}</p>
                        }) }
                    </div>
                </aside>
            </section>
        </div>
    }
}
