use crate::hooks::use_api::use_api;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::task::TaskScope;
use crate::state::list_state::{ListAction, ListState};
use shared::{ApiError, Entity};
use std::future::Future;
use yew::prelude::*;

const COMPONENT: &str = "EntityList";

pub struct UseEntityListResult<T: Entity + 'static> {
    pub state: UseReducerHandle<ListState<T>>,
    pub dispatch: UseReducerDispatcher<ListState<T>>,
}

/// Load a collection whenever `deps` changes.
///
/// Each load runs in its own scope, cancelled when `deps` change again or
/// the component unmounts, so a stale response never lands in the list.
#[hook]
pub fn use_entity_list<T, D, F, Fut>(deps: D, loader: F) -> UseEntityListResult<T>
where
    T: Entity + 'static,
    D: PartialEq + Clone + 'static,
    F: FnOnce(D, ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let list = use_reducer(ListState::<T>::default);
    let api = use_api();

    {
        let dispatch = list.dispatcher();
        use_effect_with(deps, move |deps| {
            let scope = TaskScope::new();
            dispatch.dispatch(ListAction::Loading);
            Logger::debug_with_component(COMPONENT, &format!("Loading {} list", T::KIND));

            let load = loader(deps.clone(), api.in_scope(&scope));
            let guard = scope.clone();
            scope.spawn(async move {
                match guard.guard(load).await {
                    Ok(records) => {
                        Logger::debug_with_component(
                            COMPONENT,
                            &format!("Loaded {} {} records", records.len(), T::KIND),
                        );
                        dispatch.dispatch(ListAction::Loaded(records));
                    }
                    Err(e) if e.is_cancelled() => {}
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to load {} list: {}", T::KIND, e),
                        );
                        dispatch.dispatch(ListAction::Failed(e.to_string()));
                    }
                }
            });

            move || scope.cancel()
        });
    }

    let dispatch = list.dispatcher();
    UseEntityListResult {
        state: list,
        dispatch,
    }
}
