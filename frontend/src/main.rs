use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod pages;
mod router;
mod services;
mod state;

use components::notice_banner::NoticeProvider;
use pages::category_page::CategoryPage;
use pages::community_page::CommunityPage;
use pages::home::HomePage;
use pages::level_page::LevelPage;
use pages::not_found::NotFoundPage;
use pages::question_page::QuestionPage;
use router::Route;
use services::api::ApiClient;
use services::logging::Logger;
use shared::AppConfig;

#[derive(Properties, PartialEq)]
struct AppProps {
    api: ApiClient,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<ApiClient> context={props.api.clone()}>
            <NoticeProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </NoticeProvider>
        </ContextProvider<ApiClient>>
    }
}

/// Page for the current route. Keys force a fresh page when ids change.
fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Community { community_id } => {
            let key = community_id.clone();
            html! { <CommunityPage key={key} {community_id} /> }
        }
        Route::Level {
            community_id,
            level_id,
        } => {
            let key = format!("{}/{}", community_id, level_id);
            html! { <LevelPage key={key} {community_id} {level_id} /> }
        }
        Route::Category {
            community_id,
            level_id,
            category_id,
        } => {
            let key = format!("{}/{}/{}", community_id, level_id, category_id);
            html! { <CategoryPage key={key} {community_id} {level_id} {category_id} /> }
        }
        Route::Question {
            community_id,
            level_id,
            category_id,
            question_id,
        } => html! {
            <QuestionPage {community_id} {level_id} {category_id} {question_id} />
        },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

fn main() {
    let config = match services::config::load() {
        Ok(config) => {
            Logger::init(config.log_level);
            config
        }
        Err(e) => {
            let config = AppConfig::default();
            Logger::init(config.log_level);
            Logger::warn_with_component("App", &format!("Invalid configuration, using defaults: {}", e));
            config
        }
    };
    Logger::info_with_component(
        "App",
        &format!("Starting quiz admin against {}", config.api_base_url),
    );

    yew::Renderer::<App>::with_props(AppProps {
        api: ApiClient::new(config),
    })
    .render();
}
