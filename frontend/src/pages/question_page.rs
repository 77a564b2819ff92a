use crate::components::list_view::render_loaded;
use crate::components::nav_buttons::NavButtons;
use crate::hooks::use_entity_list::use_entity_list;
use shared::QuestionScope;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct QuestionPageProps {
    pub community_id: String,
    pub level_id: String,
    pub category_id: String,
    pub question_id: String,
}

/// Read-only view of one question's text.
///
/// There is no single-question endpoint, so the category's list is loaded
/// and searched by id.
#[function_component(QuestionPage)]
pub fn question_page(props: &QuestionPageProps) -> Html {
    let deps = (
        props.community_id.clone(),
        props.level_id.clone(),
        props.category_id.clone(),
    );
    let list = use_entity_list(deps, |(community_id, level_id, category_id), api| async move {
        let scope = QuestionScope {
            community_id: &community_id,
            level_id: &level_id,
            category_id: &category_id,
        };
        api.list_questions(scope).await
    });

    let body = render_loaded(&list.state, |_| match list.state.find(&props.question_id) {
        Some(question) => html! {
            <p class="question-text">{question.text.clone()}</p>
        },
        None => html! { <div class="empty-state">{"Question not found"}</div> },
    });

    html! {
        <main class="page question-page">
            <div class="page-header">
                <h2>{"Question"}</h2>
                <NavButtons />
            </div>
            {body}
        </main>
    }
}
