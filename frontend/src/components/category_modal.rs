use crate::components::modal_shell::ModalShell;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryModalProps {
    pub title: AttrValue,
    pub on_dismiss: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Frame only; the category screen supplies the form
#[function_component(CategoryModal)]
pub fn category_modal(props: &CategoryModalProps) -> Html {
    html! {
        <ModalShell title={props.title.clone()} class="category-modal" on_dismiss={props.on_dismiss.clone()}>
            {props.children.clone()}
        </ModalShell>
    }
}
