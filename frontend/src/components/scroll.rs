use yew::prelude::*;
use yew_hooks::prelude::*;

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Scrolls the window to the top once, when the calling page mounts.
#[hook]
pub fn use_scroll_to_top() {
    use_mount(scroll_to_top);
}
