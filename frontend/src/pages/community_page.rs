use crate::components::level_selector::LevelSelector;
use crate::components::list_view::render_loaded;
use crate::hooks::use_entity_list::use_entity_list;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CommunityPageProps {
    pub community_id: String,
}

/// One community and its levels
#[function_component(CommunityPage)]
pub fn community_page(props: &CommunityPageProps) -> Html {
    // Single record through the list loader so loading and failure render alike
    let community = use_entity_list(props.community_id.clone(), |id, api| async move {
        api.get_community(&id).await.map(|community| vec![community])
    });

    let body = render_loaded(&community.state, |records| match records.first() {
        Some(community) => html! {
            <>
                <h1 class="community-name">{community.name.clone()}</h1>
                <LevelSelector
                    community_id={community.id.clone()}
                    level_ids={community.level_ids()}
                />
            </>
        },
        None => html! { <div class="error-message">{"Community not found"}</div> },
    });

    html! {
        <main class="page community-page">
            {body}
        </main>
    }
}
