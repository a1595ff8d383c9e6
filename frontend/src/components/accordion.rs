use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::pricing::Faq;

/// Clicking the open item closes it; clicking another one moves the
/// single open slot there.
pub fn toggled(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub items: &'static [Faq],
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(|| None::<usize>);

    let items = props.items.iter().enumerate().map(|(index, item)| {
        let is_open = *open == Some(index);
        let toggle = {
            let open = open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                open.set(toggled(*open, index));
            })
        };
        html! {
            <div class={classes!("faq-item", is_open.then_some("open"))}>
                <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                    <span class="question-text">{item.question}</span>
                    <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                </button>
                if is_open {
                    <div class="faq-answer"><p>{item.answer}</p></div>
                }
            </div>
        }
    });

    html! {
        <div class="faq-list">
            { for items }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_item_is_open() {
        assert_eq!(toggled(None, 2), Some(2));
        assert_eq!(toggled(Some(2), 2), None);
        assert_eq!(toggled(Some(2), 0), Some(0));
    }
}
