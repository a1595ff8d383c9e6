use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::scroll::use_scroll_to_top;
use crate::Route;

const SUGGESTIONS: &[(&str, Route)] = &[
    ("Services", Route::Services),
    ("Portfolio", Route::Portfolio),
    ("Pricing", Route::Pricing),
    ("Blog", Route::Blog),
    ("Contact", Route::Contact),
];

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_scroll_to_top();
    html! {
        <div class="not-found-page">
            <h1 class="not-found-code">{"404"}</h1>
            <h2>{"Page Not Found"}</h2>
            <p>{"Oops! The page you're looking for doesn't exist. It might have been moved or deleted."}</p>
            <Link<Route> to={Route::Home} classes="btn-primary">{"Go Home"}</Link<Route>>
            <div class="not-found-suggestions">
                <p>{"Looking for something? Try these pages:"}</p>
                <ul>
                    { for SUGGESTIONS.iter().map(|(name, route)| html! {
                        <li><Link<Route> to={route.clone()}>{*name}</Link<Route>></li>
                    }) }
                </ul>
            </div>
        </div>
    }
}
