use crate::components::category_modal::CategoryModal;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::entity_row::EntityRow;
use crate::components::list_view::render_list;
use crate::components::nav_buttons::NavButtons;
use crate::components::text_form::TextForm;
use crate::hooks::use_api::use_scoped_api;
use crate::hooks::use_entity_list::use_entity_list;
use crate::hooks::use_form_modal::{use_form_modal, SubmitFn};
use crate::hooks::use_notices::use_notifier;
use crate::hooks::use_pending_delete::use_pending_delete;
use crate::router::Route;
use crate::services::logging::Logger;
use crate::services::mutations::save_record;
use shared::{Category, EntityKind};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

const COMPONENT: &str = "CategorySelector";

#[derive(Properties, PartialEq)]
pub struct CategorySelectorProps {
    pub community_id: String,
    pub level_id: String,
}

/// Categories of one level, with create and edit forms in a modal
#[function_component(CategorySelector)]
pub fn category_selector(props: &CategorySelectorProps) -> Html {
    let (api, _scope) = use_scoped_api();
    let navigator = use_navigator();
    let notifier = use_notifier();
    let list = use_entity_list(
        (props.community_id.clone(), props.level_id.clone()),
        |(community_id, level_id), api| async move {
            api.list_categories(&community_id, &level_id).await
        },
    );

    let modal_open = use_state(|| false);
    let editing = use_state(|| Option::<Category>::None);

    let on_submit = {
        let api = api.clone();
        let notifier = notifier.clone();
        let dispatch = list.dispatch.clone();
        let editing = (*editing).clone();
        let community_id = props.community_id.clone();
        let level_id = props.level_id.clone();
        SubmitFn::new(move |name: String| {
            let api = api.clone();
            let notifier = notifier.clone();
            let dispatch = dispatch.clone();
            let editing = editing.clone();
            let community_id = community_id.clone();
            let level_id = level_id.clone();
            async move {
                let request = async {
                    match &editing {
                        Some(existing) => {
                            api.update_category(&existing.id, &community_id, &level_id, &name)
                                .await
                        }
                        None => api.create_category(&community_id, &level_id, &name).await,
                    }
                };
                let saved = save_record(&dispatch, &notifier, editing.as_ref(), request).await?;
                Logger::info_with_component(COMPONENT, &format!("Saved category {}", saved.id));
                Ok(())
            }
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

    let form = use_form_modal(
        *modal_open,
        (*editing).as_ref().map(|category| category.name.clone()),
        EntityKind::Category.field_label(),
        on_submit,
        on_close,
    );

    let delete = use_pending_delete(
        {
            let api = api.clone();
            SubmitFn::new(move |id: String| {
                let api = api.clone();
                async move { api.delete_category(&id).await }
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
        Callback::from(move |category: Category| {
            editing.set(Some(category));
            modal_open.set(true);
        })
    };

    let on_open = {
        let community_id = props.community_id.clone();
        let level_id = props.level_id.clone();
        Callback::from(move |category: Category| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Category {
                    community_id: community_id.clone(),
                    level_id: level_id.clone(),
                    category_id: category.id,
                });
            }
        })
    };

    let rows = render_list(&list.state, |category: &Category| {
        html! {
            <EntityRow<Category>
                key={category.id.clone()}
                record={category.clone()}
                deleting={delete.deleting.as_deref() == Some(category.id.as_str())}
                on_open={on_open.clone()}
                on_edit={on_edit.clone()}
                on_delete={delete.actions.request.clone()}
            />
        }
    });

    let modal = if *modal_open {
        let state = &*form.state;
        let (title, submit_label) = if editing.is_some() {
            ("Edit Category", "Update")
        } else {
            ("Add Category", "Add")
        };
        html! {
            <CategoryModal title={title} on_dismiss={form.actions.on_cancel.clone()}>
                <TextForm
                    label="Category Name"
                    value={state.value.clone()}
                    error={state.error.clone().map(AttrValue::from)}
                    submitting={state.is_submitting()}
                    submit_label={submit_label}
                    on_input={form.actions.on_input.clone()}
                    on_submit={form.actions.on_submit.clone()}
                    on_cancel={form.actions.on_cancel.clone()}
                />
            </CategoryModal>
        }
    } else {
        html! {}
    };

    html! {
        <div class="category-selector">
            <div class="page-header">
                <h2>{"Categories"}</h2>
                <NavButtons />
                <button class="btn btn-primary" onclick={on_create}>{"Add Category"}</button>
            </div>

            {rows}
            {modal}

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
