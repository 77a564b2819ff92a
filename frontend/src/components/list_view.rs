use crate::state::list_state::ListState;
use shared::Entity;
use yew::prelude::*;

/// Loading and error bodies; `ready` renders the loaded records
pub fn render_loaded<T>(state: &ListState<T>, ready: impl FnOnce(&[T]) -> Html) -> Html {
    match state {
        ListState::Loading => html! { <div class="loading">{"Loading..."}</div> },
        ListState::Failed(message) => {
            html! { <div class="error-message">{format!("Error: {}", message)}</div> }
        }
        ListState::Ready(items) => ready(items),
    }
}

/// Loading, error, empty or the rows in server order
pub fn render_list<T: Entity>(state: &ListState<T>, render: impl Fn(&T) -> Html) -> Html {
    render_loaded(state, |items| {
        if items.is_empty() {
            html! {
                <div class="empty-state">{format!("No {} entries yet", T::KIND)}</div>
            }
        } else {
            html! {
                <div class="entity-list">
                    {for items.iter().map(render)}
                </div>
            }
        }
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use shared::Category;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn grammar() -> Category {
        Category {
            id: "k1".to_string(),
            name: "Grammar".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_loading_and_failure_skip_ready_body() {
        let loading = render_loaded(&ListState::<Category>::Loading, |_| {
            panic!("ready body rendered while loading")
        });
        assert_eq!(
            loading,
            html! { <div class="loading">{"Loading..."}</div> }
        );

        let failed = render_loaded(&ListState::<Category>::Failed("boom".to_string()), |_| {
            panic!("ready body rendered after failure")
        });
        assert_eq!(
            failed,
            html! { <div class="error-message">{"Error: boom"}</div> }
        );
    }

    #[wasm_bindgen_test]
    fn test_ready_body_gets_records() {
        let ready = render_loaded(&ListState::Ready(vec![grammar()]), |items| {
            html! { <span>{items.len()}</span> }
        });
        assert_eq!(ready, html! { <span>{1}</span> });
    }

    #[wasm_bindgen_test]
    fn test_empty_list_message_names_kind() {
        let empty = render_list(&ListState::<Category>::Ready(Vec::new()), |_| html! {});
        assert_eq!(
            empty,
            html! { <div class="empty-state">{"No category entries yet"}</div> }
        );
    }
}
