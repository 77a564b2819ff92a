use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFormProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub submitting: bool,
    pub submit_label: AttrValue,
    #[prop_or_default]
    pub multiline: bool,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// The single-field form every dialog renders
#[function_component(TextForm)]
pub fn text_form(props: &TextFormProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let field = if props.multiline {
        let on_input = props.on_input.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_input.emit(input.value());
        });
        html! {
            <textarea
                id="modal-field"
                class="modal-input"
                rows="4"
                value={props.value.clone()}
                {oninput}
                disabled={props.submitting}
                required=true
                autofocus=true
            />
        }
    } else {
        let on_input = props.on_input.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        });
        html! {
            <input
                id="modal-field"
                type="text"
                class="modal-input"
                value={props.value.clone()}
                {oninput}
                disabled={props.submitting}
                required=true
                autofocus=true
            />
        }
    };

    html! {
        <form class="modal-form" onsubmit={on_submit}>
            {if let Some(error) = props.error.clone() {
                html! { <div class="modal-error">{error}</div> }
            } else {
                html! {}
            }}

            <div class="form-group">
                <label for="modal-field">{props.label.clone()}</label>
                {field}
            </div>

            <div class="modal-buttons">
                <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={props.submitting}>
                    {"Cancel"}
                </button>
                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                    {if props.submitting { "Saving...".to_string() } else { props.submit_label.to_string() }}
                </button>
            </div>
        </form>
    }
}
