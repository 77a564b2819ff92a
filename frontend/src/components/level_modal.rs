use crate::components::modal_shell::ModalShell;
use crate::components::text_form::TextForm;
use crate::hooks::use_form_modal::{use_form_modal, SubmitFn};
use shared::{EntityKind, Level};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LevelModalProps {
    pub is_open: bool,
    /// `None` creates a new level
    #[prop_or_default]
    pub level: Option<Level>,
    pub on_submit: SubmitFn,
    pub on_close: Callback<()>,
}

#[function_component(LevelModal)]
pub fn level_modal(props: &LevelModalProps) -> Html {
    let modal = use_form_modal(
        props.is_open,
        props.level.as_ref().map(|level| level.name.clone()),
        EntityKind::Level.field_label(),
        props.on_submit.clone(),
        props.on_close.clone(),
    );

    if !props.is_open {
        return html! {};
    }

    let state = &*modal.state;
    let (title, submit_label) = match props.level {
        Some(_) => ("Edit Level", "Update"),
        None => ("Create Level", "Create"),
    };

    html! {
        <ModalShell title={title} class="level-modal" on_dismiss={modal.actions.on_cancel.clone()}>
            <TextForm
                label="Level Name"
                value={state.value.clone()}
                error={state.error.clone().map(AttrValue::from)}
                submitting={state.is_submitting()}
                submit_label={submit_label}
                on_input={modal.actions.on_input.clone()}
                on_submit={modal.actions.on_submit.clone()}
                on_cancel={modal.actions.on_cancel.clone()}
            />
        </ModalShell>
    }
}
