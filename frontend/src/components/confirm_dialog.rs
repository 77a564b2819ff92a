use crate::components::modal_shell::ModalShell;
use crate::state::confirm::PendingDelete;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub pending: PendingDelete,
    pub on_confirm: Callback<()>,
    pub on_decline: Callback<()>,
}

/// Asks before a delete; declining sends nothing
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_decline = {
        let on_decline = props.on_decline.clone();
        Callback::from(move |_: MouseEvent| on_decline.emit(()))
    };

    html! {
        <ModalShell title="Confirm delete" class="confirm-dialog" on_dismiss={props.on_decline.clone()}>
            <p class="confirm-prompt">{props.pending.prompt()}</p>
            <div class="modal-buttons">
                <button class="btn btn-secondary" onclick={on_decline}>{"Cancel"}</button>
                <button class="btn btn-danger" onclick={on_confirm}>{"Delete"}</button>
            </div>
        </ModalShell>
    }
}
