use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::field::{TextAreaField, TextField};
use crate::components::scroll::{scroll_to_top, use_scroll_to_top};
use crate::content::company;
use crate::forms::review::{ReviewDraft, MAX_RATING};
use crate::forms::{use_form, SubmissionOutcome};
use crate::Route;

fn rating_label(rating: u8) -> String {
    match rating {
        0 => "Select rating".to_string(),
        1 => "1 Star".to_string(),
        n => format!("{} Stars", n),
    }
}

/// Stars lit up to the hovered star, else up to the chosen rating.
fn lit(star: u8, hovered: u8, rating: u8) -> bool {
    let level = if hovered > 0 { hovered } else { rating };
    star <= level
}

#[function_component(ThankYou)]
fn thank_you() -> Html {
    html! {
        <div class="thank-you">
            <div class="thank-you-icon">{"✓"}</div>
            <h1>{"Thank You!"}</h1>
            <p>
                {"We truly appreciate you taking the time to share your experience with us. Your feedback helps us improve and helps other businesses find us!"}
            </p>
            <div class="thank-you-next">
                <h3>{"What happens next?"}</h3>
                <ul>
                    <li>{"We'll review your testimonial"}</li>
                    <li>{"If you approved, we may feature it on our website and marketing materials"}</li>
                    <li>{"You'll receive a confirmation email"}</li>
                </ul>
            </div>
            <Link<Route> to={Route::Home} classes="btn-primary">{"Back to Home"}</Link<Route>>
        </div>
    }
}

#[function_component(LeaveReview)]
pub fn leave_review() -> Html {
    use_scroll_to_top();
    let hovered = use_state(|| 0u8);
    let form = use_form::<ReviewDraft>(Callback::from(|_| scroll_to_top()));

    if *form.outcome() == SubmissionOutcome::Succeeded {
        return html! { <div class="review-page"><ThankYou /></div> };
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
    let retry = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| form.submit())
    };

    let stars = (1..=MAX_RATING).map(|star| {
        let onclick = {
            let form = form.clone();
            Callback::from(move |_: MouseEvent| form.edit("rating", move |d| d.rating = star))
        };
        let onmouseenter = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(star))
        };
        let onmouseleave = {
            let hovered = hovered.clone();
            Callback::from(move |_: MouseEvent| hovered.set(0))
        };
        let on = lit(star, *hovered, draft.rating);
        html! {
            <button
                type="button"
                class={classes!("star", on.then_some("lit"))}
                aria-label={format!("Rate {} star{}", star, if star > 1 { "s" } else { "" })}
                aria-checked={(draft.rating == star).to_string()}
                role="radio"
                {onclick}
                {onmouseenter}
                {onmouseleave}
            >
                {if on { "★" } else { "☆" }}
            </button>
        }
    });

    let toggle_public = {
        let form = form.clone();
        Callback::from(move |_: Event| {
            form.edit("displayPublicly", move |d| d.display_publicly = !d.display_publicly)
        })
    };

    let name = {
        let form = form.clone();
        Callback::from(move |v: String| form.edit("name", move |d| d.name = v))
    };
    let business_name = {
        let form = form.clone();
        Callback::from(move |v: String| form.edit("businessName", move |d| d.business_name = v))
    };
    let email = {
        let form = form.clone();
        Callback::from(move |v: String| form.edit("email", move |d| d.email = v))
    };
    let review = {
        let form = form.clone();
        Callback::from(move |v: String| form.edit("review", move |d| d.review = v))
    };

    html! {
        <div class="review-page">
            <section class="page-hero">
                <h1>{"Share Your "}<span class="gradient-text">{"Experience"}</span></h1>
                <p>
                    {"We'd love to hear about your experience working with us! Your feedback helps us improve and helps other businesses make informed decisions."}
                </p>
            </section>

            <section class="review-form-section">
                <div class="review-form-card">
                    <h2>{"Leave a Review"}</h2>
                    <form onsubmit={onsubmit} novalidate={true}>
                        <div class="form-row">
                            <TextField id="name" label="Your Name" required=true
                                value={draft.name.clone()} placeholder="John Smith"
                                error={form.error("name")} onchange={name} />
                            <TextField id="businessName" label="Business Name" required=true
                                value={draft.business_name.clone()} placeholder="Your Business Name"
                                error={form.error("businessName")} onchange={business_name} />
                        </div>
                        <TextField id="email" label="Email Address" required=true input_type="email"
                            value={draft.email.clone()} placeholder="john@example.com"
                            error={form.error("email")} onchange={email} />

                        <div class={classes!("form-field", form.errors().contains("rating").then_some("has-error"))}>
                            <label id="rating-label">{"How would you rate your experience? *"}</label>
                            <div class="star-rating" role="radiogroup" aria-labelledby="rating-label">
                                { for stars }
                                <span class="rating-text">{rating_label(draft.rating)}</span>
                            </div>
                            if let Some(error) = form.error("rating") {
                                <p class="field-error" role="alert">{error}</p>
                            }
                        </div>

                        <TextAreaField id="review" label="Your Review" required=true rows={6}
                            value={draft.review.clone()}
                            placeholder="Tell us about your experience working with us. What did you like? How did we help your business?"
                            error={form.error("review")}
                            hint={format!("{} characters (minimum 20)", draft.review.chars().count())}
                            onchange={review} />

                        <label class="checkbox-field">
                            <input type="checkbox" checked={draft.display_publicly} onchange={toggle_public} />
                            <span>{"I give permission to display my review publicly on your website and marketing materials"}</span>
                        </label>

                        if let Some(message) = form.outcome().failure() {
                            <div class="form-error" role="alert">
                                <p>{message}</p>
                                <button type="button" class="btn-outline" onclick={retry} disabled={pending}>
                                    {"Try Again"}
                                </button>
                                <p class="form-error-alt">
                                    {"Or email us at "}<a href={company::mailto()}>{company::EMAIL}</a>
                                </p>
                            </div>
                        }

                        <button type="submit" class="btn-primary btn-block" disabled={pending}>
                            {if pending { "Submitting..." } else { "Submit Review" }}
                        </button>
                    </form>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_preview_overrides_rating() {
        assert!(lit(4, 4, 2));
        assert!(!lit(3, 0, 2));
        assert!(lit(2, 0, 2));
        assert!(!lit(5, 3, 5));
    }

    #[test]
    fn rating_text_pluralizes() {
        assert_eq!(rating_label(0), "Select rating");
        assert_eq!(rating_label(1), "1 Star");
        assert_eq!(rating_label(4), "4 Stars");
    }
}
