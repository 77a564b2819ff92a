use crate::hooks::use_api::use_task_scope;
use crate::hooks::use_form_modal::SubmitFn;
use crate::hooks::use_notices::use_notifier;
use crate::services::logging::Logger;
use crate::services::mutations::delete_record;
use crate::state::confirm::{ConfirmAction, DeleteConfirm, PendingDelete};
use crate::state::list_state::ListState;
use futures_util::future::LocalBoxFuture;
use shared::{ApiError, Entity};
use yew::prelude::*;

const COMPONENT: &str = "PendingDelete";

pub struct UsePendingDeleteResult {
    /// Awaiting the user's answer
    pub pending: Option<PendingDelete>,
    /// Id of the record whose DELETE is in flight
    pub deleting: Option<String>,
    pub actions: UsePendingDeleteActions,
}

#[derive(Clone, PartialEq)]
pub struct UsePendingDeleteActions {
    pub request: Callback<PendingDelete>,
    pub confirm: Callback<()>,
    pub decline: Callback<()>,
}

/// The DELETE a confirmation sends, or `None` when no prompt awaits one
fn confirmed_request(
    flow: &DeleteConfirm,
    delete: &SubmitFn,
) -> Option<(PendingDelete, LocalBoxFuture<'static, Result<(), ApiError>>)> {
    let mut next = flow.clone();
    let target = next.confirm()?;
    let sent = delete.call(target.id.clone());
    Some((target, sent))
}

/// Two-step delete: `request` only records the intent, `confirm` runs
/// `delete` with the id and drops the row from `list` once the server agrees.
#[hook]
pub fn use_pending_delete<T>(
    delete: SubmitFn,
    list: UseReducerDispatcher<ListState<T>>,
) -> UsePendingDeleteResult
where
    T: Entity + 'static,
{
    let flow = use_reducer(DeleteConfirm::default);
    let notifier = use_notifier();
    let scope = use_task_scope();

    let request = {
        let dispatch = flow.dispatcher();
        Callback::from(move |target: PendingDelete| dispatch.dispatch(ConfirmAction::Request(target)))
    };

    let decline = {
        let dispatch = flow.dispatcher();
        Callback::from(move |_: ()| dispatch.dispatch(ConfirmAction::Decline))
    };

    let confirm = {
        let flow = flow.clone();
        Callback::from(move |_: ()| {
            let Some((target, sent)) = confirmed_request(&flow, &delete) else {
                return;
            };
            flow.dispatch(ConfirmAction::Confirm);
            Logger::info_with_component(
                COMPONENT,
                &format!("Deleting {} {}", target.kind, target.id),
            );

            let dispatch = flow.dispatcher();
            let notifier = notifier.clone();
            let list = list.clone();
            let guard = scope.clone();
            scope.spawn(async move {
                let request = guard.guard(sent);
                match delete_record::<T, _, _, _>(&list, &notifier, &target, request).await {
                    Err(e) if e.is_cancelled() => return,
                    Err(e) => Logger::error_with_component(
                        COMPONENT,
                        &format!("Failed to delete {} {}: {}", target.kind, target.id, e),
                    ),
                    Ok(()) => {}
                }
                dispatch.dispatch(ConfirmAction::Finish);
            });
        })
    };

    UsePendingDeleteResult {
        pending: flow.pending().cloned(),
        deleting: flow.deleting().map(str::to_string),
        actions: UsePendingDeleteActions {
            request,
            confirm,
            decline,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_delete(calls: Rc<Cell<usize>>) -> SubmitFn {
        SubmitFn::new(move |_id: String| {
            calls.set(calls.get() + 1);
            async { Ok(()) }
        })
    }

    fn grammar() -> PendingDelete {
        PendingDelete::of(&Category {
            id: "k1".to_string(),
            name: "Grammar".to_string(),
        })
    }

    #[test]
    fn test_declined_delete_never_calls_server() {
        let calls = Rc::new(Cell::new(0));
        let delete = counting_delete(calls.clone());
        let mut flow = DeleteConfirm::default();
        flow.request(grammar());
        flow.decline();

        assert!(confirmed_request(&flow, &delete).is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_confirm_without_prompt_sends_nothing() {
        let calls = Rc::new(Cell::new(0));
        let delete = counting_delete(calls.clone());

        assert!(confirmed_request(&DeleteConfirm::default(), &delete).is_none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_confirmed_delete_sends_once_for_target() {
        let calls = Rc::new(Cell::new(0));
        let delete = counting_delete(calls.clone());
        let mut flow = DeleteConfirm::default();
        flow.request(grammar());

        let sent = confirmed_request(&flow, &delete).map(|(target, _)| target.id);
        assert_eq!(sent, Some("k1".to_string()));
        assert_eq!(calls.get(), 1);
    }
}
