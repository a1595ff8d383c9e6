use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod storage;
mod styles;
mod theme;
mod forms;
mod blog;
mod content;
mod components {
    pub mod accordion;
    pub mod field;
    pub mod footer;
    pub mod modal;
    pub mod scroll;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod faq;
    pub mod help;
    pub mod home;
    pub mod how_it_works;
    pub mod leave_review;
    pub mod not_found;
    pub mod portfolio;
    pub mod pricing;
    pub mod services;
    pub mod termsprivacy;
}

use components::footer::Footer;
use pages::{
    about::About,
    blog::{Blog, BlogPostPage},
    contact::Contact,
    faq::Faq,
    help::Help,
    home::Home,
    how_it_works::HowItWorks,
    leave_review::LeaveReview,
    not_found::NotFound,
    portfolio::Portfolio,
    pricing::Pricing,
    services::Services,
    termsprivacy::{PrivacyPolicy, TermsOfService},
};
use styles::GlobalStyles;
use theme::{ThemeAction, ThemeContext, ThemeProvider};

/// Header turns opaque once the page scrolls past this many pixels.
const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/portfolio")]
    Portfolio,
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/pricing")]
    Pricing,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    BlogPost { id: u32 },
    #[at("/faq")]
    Faq,
    #[at("/leave-review")]
    LeaveReview,
    #[at("/help")]
    Help,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        Route::HowItWorks => {
            info!("Rendering How It Works page");
            html! { <HowItWorks /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogPost { id } => {
            info!("Rendering Blog post {}", id);
            html! { <BlogPostPage {id} /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::LeaveReview => {
            info!("Rendering Leave Review page");
            html! { <LeaveReview /> }
        },
        Route::Help => {
            info!("Rendering Help page");
            html! { <Help /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        },
    }
}

const NAV_LINKS: &[(&str, Route)] = &[
    ("Services", Route::Services),
    ("Portfolio", Route::Portfolio),
    ("How It Works", Route::HowItWorks),
    ("Pricing", Route::Pricing),
    ("About", Route::About),
    ("Blog", Route::Blog),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll = use_window_scroll();
    let is_scrolled = scroll.1 > SCROLLED_THRESHOLD;
    let theme = use_context::<ThemeContext>();
    let route = use_route::<Route>();

    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            route,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let dark = theme.as_ref().map(|t| t.dark).unwrap_or(false);
    let toggle_theme = Callback::from(move |_: MouseEvent| {
        if let Some(theme) = &theme {
            theme.dispatch(ThemeAction::Toggle);
        }
    });

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-mark">{content::company::SHORT_NAME}</span>
                    <span class="logo-text">{content::company::COMPANY_NAME}</span>
                </Link<Route>>

                <button
                    class="theme-toggle"
                    onclick={toggle_theme}
                    aria-label={if dark { "Switch to light mode" } else { "Switch to dark mode" }}
                >
                    {if dark { "☀" } else { "☾" }}
                </button>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu" aria-expanded={(*menu_open).to_string()}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(name, route)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">{*name}</Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-cta btn-primary">
                            {"Get Started"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <GlobalStyles />
            <BrowserRouter>
                <Nav />
                <main class="site-main">
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
