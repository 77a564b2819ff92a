use crate::components::community_list::CommunityList;
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <main class="page home-page">
            <h1 class="app-title">{"Quiz Admin"}</h1>
            <CommunityList />
        </main>
    }
}
