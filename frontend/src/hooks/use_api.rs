use crate::services::api::ApiClient;
use crate::services::task::TaskScope;
use shared::AppConfig;
use yew::prelude::*;

/// The app-wide client from context
#[hook]
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(AppConfig::default()))
}

/// A scope that lives as long as the calling component and is cancelled
/// when it unmounts
#[hook]
pub fn use_task_scope() -> TaskScope {
    let scope = use_memo((), |_| TaskScope::new());

    use_effect_with((), {
        let scope = (*scope).clone();
        move |_| move || scope.cancel()
    });

    (*scope).clone()
}

/// The context client with every request tied to the calling component
#[hook]
pub fn use_scoped_api() -> (ApiClient, TaskScope) {
    let api = use_api();
    let scope = use_task_scope();
    (api.in_scope(&scope), scope)
}
