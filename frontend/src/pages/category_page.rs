use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::list_view::render_loaded;
use crate::components::nav_buttons::NavButtons;
use crate::components::question_modal::QuestionModal;
use crate::components::question_selector::QuestionSelector;
use crate::hooks::use_api::use_scoped_api;
use crate::hooks::use_entity_list::use_entity_list;
use crate::hooks::use_form_modal::SubmitFn;
use crate::hooks::use_notices::use_notifier;
use crate::hooks::use_pending_delete::use_pending_delete;
use crate::router::Route;
use crate::services::logging::Logger;
use crate::services::mutations::save_record;
use shared::{Question, QuestionScope};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

const COMPONENT: &str = "CategoryPage";

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryPageProps {
    pub community_id: String,
    pub level_id: String,
    pub category_id: String,
}

impl CategoryPageProps {
    fn scope(&self) -> QuestionScope<'_> {
        QuestionScope {
            community_id: &self.community_id,
            level_id: &self.level_id,
            category_id: &self.category_id,
        }
    }
}

/// Questions of one category
#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    let (api, _scope) = use_scoped_api();
    let navigator = use_navigator();
    let notifier = use_notifier();
    let list = use_entity_list(props.clone(), |ids, api| async move {
        api.list_questions(ids.scope()).await
    });

    let modal_open = use_state(|| false);
    let editing = use_state(|| Option::<Question>::None);

    let on_submit = {
        let api = api.clone();
        let notifier = notifier.clone();
        let dispatch = list.dispatch.clone();
        let editing = (*editing).clone();
        let ids = props.clone();
        SubmitFn::new(move |text: String| {
            let api = api.clone();
            let notifier = notifier.clone();
            let dispatch = dispatch.clone();
            let editing = editing.clone();
            let ids = ids.clone();
            async move {
                let request = async {
                    match &editing {
                        Some(existing) => api.update_question(ids.scope(), &existing.id, &text).await,
                        None => api.create_question(ids.scope(), &text).await,
                    }
                };
                let saved = save_record(&dispatch, &notifier, editing.as_ref(), request).await?;
                Logger::info_with_component(COMPONENT, &format!("Saved question {}", saved.id));
                Ok(())
            }
        })
    };

    let delete = use_pending_delete(
        {
            let api = api.clone();
            SubmitFn::new(move |id: String| {
                let api = api.clone();
                async move { api.delete_question(&id).await }
            })
        },
        list.dispatch.clone(),
    );

    let on_create = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            modal_open.set(true);
        })
    };

    let on_edit = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        Callback::from(move |question: Question| {
            editing.set(Some(question));
            modal_open.set(true);
        })
    };

    let on_close = {
        let modal_open = modal_open.clone();
        let editing = editing.clone();
        Callback::from(move |_: ()| {
            modal_open.set(false);
            editing.set(None);
        })
    };

    let on_open = {
        let ids = props.clone();
        Callback::from(move |question: Question| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Question {
                    community_id: ids.community_id.clone(),
                    level_id: ids.level_id.clone(),
                    category_id: ids.category_id.clone(),
                    question_id: question.id,
                });
            }
        })
    };

    let body = render_loaded(&list.state, |questions| {
        html! {
            <QuestionSelector
                questions={questions.to_vec()}
                deleting={delete.deleting.clone()}
                {on_open}
                {on_edit}
                on_delete={delete.actions.request.clone()}
            />
        }
    });

    html! {
        <main class="page category-page">
            <div class="page-header">
                <h2>{"Questions"}</h2>
                <NavButtons />
                <button class="btn btn-primary" onclick={on_create}>{"Create Question"}</button>
            </div>

            {body}

            <QuestionModal
                is_open={*modal_open}
                question={(*editing).clone()}
                {on_submit}
                {on_close}
            />

            {if let Some(pending) = delete.pending.clone() {
                html! {
                    <ConfirmDialog
                        {pending}
                        on_confirm={delete.actions.confirm.clone()}
                        on_decline={delete.actions.decline.clone()}
                    />
                }
            } else {
                html! {}
            }}
        </main>
    }
}
