use crate::components::category_selector::CategorySelector;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LevelPageProps {
    pub community_id: String,
    pub level_id: String,
}

#[function_component(LevelPage)]
pub fn level_page(props: &LevelPageProps) -> Html {
    html! {
        <main class="page level-page">
            <CategorySelector
                community_id={props.community_id.clone()}
                level_id={props.level_id.clone()}
            />
        </main>
    }
}
