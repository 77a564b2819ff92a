use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::entity_row::EntityRow;
use crate::components::level_modal::LevelModal;
use crate::components::list_view::render_list;
use crate::components::nav_buttons::NavButtons;
use crate::hooks::use_api::use_scoped_api;
use crate::hooks::use_entity_list::use_entity_list;
use crate::hooks::use_form_modal::SubmitFn;
use crate::hooks::use_notices::use_notifier;
use crate::hooks::use_pending_delete::use_pending_delete;
use crate::router::Route;
use crate::services::logging::Logger;
use crate::services::mutations::save_record;
use shared::Level;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

const COMPONENT: &str = "LevelSelector";

#[derive(Properties, PartialEq)]
pub struct LevelSelectorProps {
    pub community_id: String,
    /// Fetched one by one, shown in this order
    pub level_ids: Vec<String>,
}

/// Levels of one community. Any failed level fetch fails the whole screen.
#[function_component(LevelSelector)]
pub fn level_selector(props: &LevelSelectorProps) -> Html {
    let (api, _scope) = use_scoped_api();
    let navigator = use_navigator();
    let notifier = use_notifier();
    let list = use_entity_list(props.level_ids.clone(), |ids, api| async move {
        api.get_levels(&ids).await
    });

    let modal_open = use_state(|| false);
    let editing = use_state(|| Option::<Level>::None);

    let on_submit = {
        let api = api.clone();
        let notifier = notifier.clone();
        let dispatch = list.dispatch.clone();
        let editing = (*editing).clone();
        let community_id = props.community_id.clone();
        SubmitFn::new(move |name: String| {
            let api = api.clone();
            let notifier = notifier.clone();
            let dispatch = dispatch.clone();
            let editing = editing.clone();
            let community_id = community_id.clone();
            async move {
                let request = async {
                    match &editing {
                        Some(existing) => api.update_level(&existing.id, &name).await,
                        None => api.create_level(&community_id, &name).await,
                    }
                };
                let saved = save_record(&dispatch, &notifier, editing.as_ref(), request).await?;
                Logger::info_with_component(COMPONENT, &format!("Saved level {}", saved.id));
                Ok(())
            }
        })
    };

    let delete = use_pending_delete(
        {
            let api = api.clone();
            SubmitFn::new(move |id: String| {
                let api = api.clone();
                async move { api.delete_level(&id).await }
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
        Callback::from(move |level: Level| {
            editing.set(Some(level));
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
        let community_id = props.community_id.clone();
        Callback::from(move |level: Level| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Level {
                    community_id: community_id.clone(),
                    level_id: level.id,
                });
            }
        })
    };

    let rows = render_list(&list.state, |level: &Level| {
        html! {
            <EntityRow<Level>
                key={level.id.clone()}
                record={level.clone()}
                deleting={delete.deleting.as_deref() == Some(level.id.as_str())}
                on_open={on_open.clone()}
                on_edit={on_edit.clone()}
                on_delete={delete.actions.request.clone()}
            />
        }
    });

    html! {
        <div class="level-selector">
            <div class="page-header">
                <h2>{"Levels"}</h2>
                <NavButtons />
                <button class="btn btn-primary" onclick={on_create}>{"Create Level"}</button>
            </div>

            {rows}

            <LevelModal
                is_open={*modal_open}
                level={(*editing).clone()}
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
        </div>
    }
}
