use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::accordion::Accordion;
use crate::components::scroll::use_scroll_to_top;
use crate::content::pricing::{compare, dollars, Plan, Quote, AGENCY, FAQS, OURS, PLANS, VALUE_PROPS};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub plan: &'static Plan,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let plan = props.plan;
    html! {
        <div class={classes!("pricing-card", plan.popular.then_some("popular"))}>
            if plan.popular {
                <div class="popular-badge">{"Most Popular"}</div>
            }
            <h3>{plan.name}</h3>
            <p class="plan-description">{plan.description}</p>
            <div class="plan-price">
                <span class="price">{dollars(plan.price)}</span>
                <span class="original-price">{dollars(plan.original_price)}</span>
            </div>
            <p class="plan-savings">{format!("Save {}", dollars(plan.discount()))}</p>
            <ul class="plan-features">
                { for plan.features.iter().map(|f| html! {
                    <li class={classes!(if f.included { "included" } else { "excluded" })}>
                        <span class="feature-mark">{if f.included { "✓" } else { "✗" }}</span>
                        {f.name}
                    </li>
                }) }
            </ul>
            <dl class="plan-terms">
                <dt>{"Delivery"}</dt><dd>{plan.delivery_time}</dd>
                <dt>{"Revisions"}</dt><dd>{plan.revisions}</dd>
                <dt>{"Support"}</dt><dd>{plan.support}</dd>
            </dl>
            <Link<Route> to={Route::Contact} classes="btn-primary btn-block">{"Get Started"}</Link<Route>>
        </div>
    }
}

fn quote_column(title: &str, class: &'static str, quote: &Quote) -> Html {
    html! {
        <div class={classes!("quote-column", class)}>
            <h3>{title}</h3>
            <dl>
                <dt>{"Design"}</dt><dd>{dollars(quote.design_cost)}</dd>
                <dt>{"Development"}</dt><dd>{dollars(quote.development_cost)}</dd>
                <dt>{"Timeline"}</dt>
                <dd>{format!("{} week{}", quote.time_weeks, if quote.time_weeks == 1 { "" } else { "s" })}</dd>
                <dt>{"Per revision"}</dt><dd>{dollars(quote.revision_cost)}</dd>
                <dt class="total">{"Total"}</dt><dd class="total">{dollars(quote.total())}</dd>
            </dl>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    use_scroll_to_top();
    let comparison = compare(&AGENCY, &OURS);

    html! {
        <div class="pricing-page">
            <section class="page-hero">
                <h1>{"Simple, Transparent "}<span class="gradient-text">{"Pricing"}</span></h1>
                <p>{"Professional websites at a fraction of agency prices. No hidden fees, no surprises."}</p>
            </section>

            <section class="pricing-grid">
                { for PLANS.iter().map(|plan| html! { <PricingCard {plan} /> }) }
            </section>

            <section class="value-props">
                { for VALUE_PROPS.iter().map(|prop| html! {
                    <div class="value-prop">
                        <div class="value-icon">{prop.icon}</div>
                        <h3>{prop.title}</h3>
                        <p>{prop.description}</p>
                        <span class="value-stat">{prop.stat}</span>
                    </div>
                }) }
            </section>

            <section class="cost-comparison">
                <h2>{"See How Much You Save"}</h2>
                <div class="quote-grid">
                    { quote_column("Traditional Agency", "agency", &AGENCY) }
                    { quote_column("Everyman's Website Design", "ours", &OURS) }
                </div>
                <div class="savings-summary">
                    <div>
                        <span class="savings-value">{dollars(comparison.savings)}</span>
                        <span>{format!("saved ({}% less)", comparison.savings_percent)}</span>
                    </div>
                    <div>
                        <span class="savings-value">{comparison.weeks_saved}</span>
                        <span>{"weeks sooner"}</span>
                    </div>
                </div>
            </section>

            <section class="faq-section">
                <h2>{"Pricing Questions"}</h2>
                <Accordion items={FAQS} />
            </section>
        </div>
    }
}
