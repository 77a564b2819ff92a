use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalShellProps {
    pub title: AttrValue,
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Backdrop plus centered panel. Clicking the backdrop asks to dismiss;
/// clicks inside the panel stay inside.
#[function_component(ModalShell)]
pub fn modal_shell(props: &ModalShellProps) -> Html {
    let on_backdrop_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_dismiss.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class={classes!("modal", props.class.clone())} onclick={on_modal_click}>
                <h3 class="modal-title">{props.title.clone()}</h3>
                {props.children.clone()}
            </div>
        </div>
    }
}
