use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
}

fn label_text(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

fn error_line(id: &str, error: &Option<String>) -> Html {
    match error {
        Some(error) => html! {
            <p id={format!("{}-error", id)} class="field-error" role="alert">{error.clone()}</p>
        },
        None => html! {},
    }
}

/// Labelled `<input>` with its validation message underneath.
#[function_component(TextField)]
pub fn text_field(props: &FieldProps) -> Html {
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onchange.emit(input.value());
        })
    };

    html! {
        <div class={classes!("form-field", props.error.is_some().then_some("has-error"))}>
            <label for={props.id.clone()}>{label_text(&props.label, props.required)}</label>
            <input
                id={props.id.clone()}
                name={props.id.clone()}
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                aria-invalid={props.error.is_some().to_string()}
                oninput={oninput}
            />
            { error_line(&props.id, &props.error) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or(5)]
    pub rows: u32,
    #[prop_or_default]
    pub hint: Option<String>,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaProps) -> Html {
    let oninput = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            onchange.emit(input.value());
        })
    };

    html! {
        <div class={classes!("form-field", props.error.is_some().then_some("has-error"))}>
            <label for={props.id.clone()}>{label_text(&props.label, props.required)}</label>
            <textarea
                id={props.id.clone()}
                name={props.id.clone()}
                rows={props.rows.to_string()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                aria-invalid={props.error.is_some().to_string()}
                oninput={oninput}
            />
            { error_line(&props.id, &props.error) }
            if let Some(hint) = &props.hint {
                <p class="field-hint">{hint.clone()}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub options: &'static [&'static str],
    pub placeholder: AttrValue,
    pub onchange: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub required: bool,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            onchange.emit(select.value());
        })
    };

    html! {
        <div class={classes!("form-field", props.error.is_some().then_some("has-error"))}>
            <label for={props.id.clone()}>{label_text(&props.label, props.required)}</label>
            <select id={props.id.clone()} name={props.id.clone()} onchange={onchange}>
                <option value="" selected={props.value.is_empty()}>{props.placeholder.clone()}</option>
                { for props.options.iter().map(|option| html! {
                    <option value={*option} selected={props.value.as_str() == *option}>{*option}</option>
                }) }
            </select>
            { error_line(&props.id, &props.error) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_labels_get_an_asterisk() {
        assert_eq!(label_text("Your Name", true), "Your Name *");
        assert_eq!(label_text("Phone Number", false), "Phone Number");
    }
}
