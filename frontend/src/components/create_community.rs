use crate::components::modal_shell::ModalShell;
use crate::components::text_form::TextForm;
use crate::hooks::use_form_modal::{use_form_modal, SubmitFn};
use shared::EntityKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CreateCommunityProps {
    pub is_open: bool,
    /// Present when editing an existing community
    #[prop_or_default]
    pub initial_name: Option<String>,
    pub on_submit: SubmitFn,
    pub on_close: Callback<()>,
}

#[function_component(CreateCommunity)]
pub fn create_community(props: &CreateCommunityProps) -> Html {
    let modal = use_form_modal(
        props.is_open,
        props.initial_name.clone(),
        EntityKind::Community.field_label(),
        props.on_submit.clone(),
        props.on_close.clone(),
    );

    if !props.is_open {
        return html! {};
    }

    let state = &*modal.state;
    let (title, submit_label) = if props.initial_name.is_some() {
        ("Edit Community", "Update")
    } else {
        ("Create Community", "Create")
    };

    html! {
        <ModalShell title={title} class="community-modal" on_dismiss={modal.actions.on_cancel.clone()}>
            <TextForm
                label="Community Name"
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
