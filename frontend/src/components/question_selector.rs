use crate::components::entity_row::EntityRow;
use crate::state::confirm::PendingDelete;
use shared::Question;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QuestionSelectorProps {
    pub questions: Vec<Question>,
    /// Id of the question being deleted
    #[prop_or_default]
    pub deleting: Option<String>,
    pub on_open: Callback<Question>,
    pub on_edit: Callback<Question>,
    pub on_delete: Callback<PendingDelete>,
}

#[function_component(QuestionSelector)]
pub fn question_selector(props: &QuestionSelectorProps) -> Html {
    if props.questions.is_empty() {
        return html! { <div class="empty-state">{"No questions yet"}</div> };
    }

    html! {
        <div class="question-selector">
            {for props.questions.iter().map(|question| html! {
                <EntityRow<Question>
                    key={question.id.clone()}
                    record={question.clone()}
                    deleting={props.deleting.as_deref() == Some(question.id.as_str())}
                    on_open={props.on_open.clone()}
                    on_edit={props.on_edit.clone()}
                    on_delete={props.on_delete.clone()}
                />
            })}
        </div>
    }
}
