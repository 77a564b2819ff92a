use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::create_community::CreateCommunity;
use crate::components::entity_row::EntityRow;
use crate::components::list_view::render_list;
use crate::hooks::use_api::use_scoped_api;
use crate::hooks::use_entity_list::use_entity_list;
use crate::hooks::use_form_modal::SubmitFn;
use crate::hooks::use_notices::use_notifier;
use crate::hooks::use_pending_delete::use_pending_delete;
use crate::router::Route;
use crate::services::logging::Logger;
use crate::services::mutations::save_record;
use shared::Community;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

const COMPONENT: &str = "CommunityList";

/// Root screen: every community as a card
#[function_component(CommunityList)]
pub fn community_list() -> Html {
    let (api, _scope) = use_scoped_api();
    let navigator = use_navigator();
    let notifier = use_notifier();
    let list = use_entity_list((), |_, api| async move { api.list_communities().await });

    let modal_open = use_state(|| false);
    let editing = use_state(|| Option::<Community>::None);

    let on_submit = {
        let api = api.clone();
        let notifier = notifier.clone();
        let dispatch = list.dispatch.clone();
        let editing = (*editing).clone();
        SubmitFn::new(move |name: String| {
            let api = api.clone();
            let notifier = notifier.clone();
            let dispatch = dispatch.clone();
            let editing = editing.clone();
            async move {
                let request = async {
                    match &editing {
                        Some(existing) => api.update_community(&existing.id, &name).await,
                        None => api.create_community(&name).await,
                    }
                };
                let saved = save_record(&dispatch, &notifier, editing.as_ref(), request).await?;
                Logger::info_with_component(COMPONENT, &format!("Saved community {}", saved.id));
                Ok(())
            }
        })
    };

    let delete = use_pending_delete(
        {
            let api = api.clone();
            SubmitFn::new(move |id: String| {
                let api = api.clone();
                async move { api.delete_community(&id).await }
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
        Callback::from(move |community: Community| {
            editing.set(Some(community));
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

    let on_open = Callback::from(move |community: Community| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Community {
                community_id: community.id,
            });
        }
    });

    let rows = render_list(&list.state, |community: &Community| {
        html! {
            <EntityRow<Community>
                key={community.id.clone()}
                record={community.clone()}
                deleting={delete.deleting.as_deref() == Some(community.id.as_str())}
                on_open={on_open.clone()}
                on_edit={on_edit.clone()}
                on_delete={delete.actions.request.clone()}
            />
        }
    });

    html! {
        <div class="community-list">
            <div class="page-header">
                <h2>{"Communities"}</h2>
                <button class="btn btn-primary" onclick={on_create}>{"Create Community"}</button>
            </div>

            {rows}

            <CreateCommunity
                is_open={*modal_open}
                initial_name={(*editing).as_ref().map(|community| community.name.clone())}
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
