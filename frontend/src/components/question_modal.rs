use crate::components::modal_shell::ModalShell;
use crate::components::text_form::TextForm;
use crate::hooks::use_form_modal::{use_form_modal, SubmitFn};
use shared::{EntityKind, Question};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QuestionModalProps {
    pub is_open: bool,
    #[prop_or_default]
    pub question: Option<Question>,
    pub on_submit: SubmitFn,
    pub on_close: Callback<()>,
}

/// Multi-line; the text is sent exactly as typed
#[function_component(QuestionModal)]
pub fn question_modal(props: &QuestionModalProps) -> Html {
    let modal = use_form_modal(
        props.is_open,
        props.question.as_ref().map(|question| question.text.clone()),
        EntityKind::Question.field_label(),
        props.on_submit.clone(),
        props.on_close.clone(),
    );

    if !props.is_open {
        return html! {};
    }

    let state = &*modal.state;
    let (title, submit_label) = match props.question {
        Some(_) => ("Edit Question", "Update"),
        None => ("Create Question", "Create"),
    };

    html! {
        <ModalShell title={title} class="question-modal" on_dismiss={modal.actions.on_cancel.clone()}>
            <TextForm
                label="Question"
                multiline=true
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
