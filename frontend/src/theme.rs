use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use crate::storage::{KeyValueStore, LocalStore};

pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,
}

pub enum ThemeAction {
    Toggle,
}

impl Theme {
    /// Stored preference wins; otherwise follow the OS.
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        let dark = stored
            .and_then(|raw| serde_json::from_str::<bool>(raw).ok())
            .unwrap_or(prefers_dark);
        Self { dark }
    }
}

impl Reducible for Theme {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => Rc::new(Theme { dark: !self.dark }),
        }
    }
}

pub type ThemeContext = UseReducerHandle<Theme>;

/// Stores the preference as a JSON boolean. Failures are logged only.
pub fn save_preference<S: KeyValueStore>(store: &S, dark: bool) {
    if let Err(e) = store.write(DARK_MODE_KEY, if dark { "true" } else { "false" }) {
        warn!("Theme preference not saved: {}", e);
    }
}

fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn apply(dark: bool) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let targets = [
        document.document_element(),
        document.body().map(Into::into),
    ];
    for element in targets.into_iter().flatten() {
        let classes = element.class_list();
        let result = if dark { classes.add_1("dark") } else { classes.remove_1("dark") };
        if let Err(e) = result {
            warn!("Could not update theme class: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(|| Theme::initial(LocalStore.read(DARK_MODE_KEY).as_deref(), prefers_dark()));

    use_effect_with_deps(
        |dark: &bool| {
            info!("Applying {} theme", if *dark { "dark" } else { "light" });
            save_preference(&LocalStore, *dark);
            apply(*dark);
            || ()
        },
        theme.dark,
    );

    html! {
        <ContextProvider<ThemeContext> context={theme}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[test]
    fn stored_preference_overrides_os() {
        assert!(Theme::initial(Some("true"), false).dark);
        assert!(!Theme::initial(Some("false"), true).dark);
    }

    #[test]
    fn missing_or_corrupt_preference_follows_os() {
        assert!(Theme::initial(None, true).dark);
        assert!(!Theme::initial(Some("yes please"), false).dark);
        assert!(Theme::initial(Some(""), true).dark);
    }

    #[test]
    fn saved_preference_is_read_back() {
        let store = MemoryStore::new();
        save_preference(&store, true);
        assert!(Theme::initial(store.read(DARK_MODE_KEY).as_deref(), false).dark);
        save_preference(&store, false);
        assert!(!Theme::initial(store.read(DARK_MODE_KEY).as_deref(), true).dark);
    }

    #[test]
    fn unsaved_preference_falls_back_to_os() {
        let store = MemoryStore::rejecting_writes();
        save_preference(&store, true);
        assert!(!Theme::initial(store.read(DARK_MODE_KEY).as_deref(), false).dark);
    }

    #[test]
    fn toggle_flips() {
        let theme = Rc::new(Theme { dark: false });
        let theme = theme.reduce(ThemeAction::Toggle);
        assert!(theme.dark);
        assert!(!theme.reduce(ThemeAction::Toggle).dark);
    }
}
