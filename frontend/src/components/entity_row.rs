use crate::state::confirm::PendingDelete;
use shared::Entity;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EntityRowProps<T: Entity + 'static> {
    pub record: T,
    /// Its DELETE is in flight
    #[prop_or_default]
    pub deleting: bool,
    pub on_open: Callback<T>,
    pub on_edit: Callback<T>,
    pub on_delete: Callback<PendingDelete>,
}

/// One card of a collection: label opens it, buttons edit or delete it
#[function_component(EntityRow)]
pub fn entity_row<T: Entity + 'static>(props: &EntityRowProps<T>) -> Html {
    let on_open = {
        let record = props.record.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(record.clone()))
    };

    let on_edit = {
        let record = props.record.clone();
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_edit.emit(record.clone());
        })
    };

    let on_delete = {
        let record = props.record.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(PendingDelete::of(&record));
        })
    };

    html! {
        <div class={classes!("entity-row", T::KIND.display_name())}>
            <span class="entity-label" onclick={on_open}>{props.record.label().to_string()}</span>
            <div class="entity-actions">
                <button class="btn btn-small" onclick={on_edit} disabled={props.deleting}>{"Edit"}</button>
                <button class="btn btn-small btn-danger" onclick={on_delete} disabled={props.deleting}>
                    {"Delete"}
                </button>
            </div>
            {if props.deleting {
                html! { <p class="entity-deleting">{"Deleting..."}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
