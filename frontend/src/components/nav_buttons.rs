use crate::router::Route;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

/// Back and Home, shown on every screen below the root
#[function_component(NavButtons)]
pub fn nav_buttons() -> Html {
    let navigator = use_navigator();

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.back();
            }
        })
    };
    let on_home = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Home);
        }
    });

    html! {
        <div class="nav-buttons">
            <button class="btn btn-secondary" onclick={on_back}>{"Back"}</button>
            <button class="btn btn-secondary" onclick={on_home}>{"Home"}</button>
        </div>
    }
}
