use crate::components::nav_buttons::NavButtons;
use yew::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page not-found-page">
            <h2>{"Page not found"}</h2>
            <NavButtons />
        </main>
    }
}
