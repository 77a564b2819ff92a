use crate::hooks::use_api::use_task_scope;
use crate::services::logging::Logger;
use crate::state::modal_state::{FormAction, FormModal, ModalPhase};
use futures_util::future::{FutureExt, LocalBoxFuture};
use shared::ApiError;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

const COMPONENT: &str = "FormModal";

/// Injected action a dialog runs with its submitted text.
///
/// Owners build it over their scoped client; the dialog only awaits the
/// outcome and never talks to the backend itself.
#[derive(Clone)]
pub struct SubmitFn(Rc<dyn Fn(String) -> LocalBoxFuture<'static, Result<(), ApiError>>>);

impl SubmitFn {
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        Self(Rc::new(move |value| action(value).boxed_local()))
    }

    pub fn call(&self, value: String) -> LocalBoxFuture<'static, Result<(), ApiError>> {
        (self.0)(value)
    }
}

impl PartialEq for SubmitFn {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub struct UseFormModalResult {
    pub state: UseReducerHandle<FormModal>,
    pub actions: UseFormModalActions,
}

#[derive(Clone, PartialEq)]
pub struct UseFormModalActions {
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Drive a single-field dialog. Opening resets it to `initial`; success
/// closes it through `on_close`; failure keeps it open with the error.
#[hook]
pub fn use_form_modal(
    is_open: bool,
    initial: Option<String>,
    field_label: &'static str,
    submit: SubmitFn,
    on_close: Callback<()>,
) -> UseFormModalResult {
    let modal = use_reducer(move || FormModal::new(field_label));
    let scope = use_task_scope();

    // Reset state when modal opens
    use_effect_with((is_open, initial), {
        let dispatch = modal.dispatcher();
        move |(is_open, initial)| {
            if *is_open {
                dispatch.dispatch(FormAction::Open(initial.clone()));
            }
            || ()
        }
    });

    let on_input = {
        let dispatch = modal.dispatcher();
        Callback::from(move |value: String| dispatch.dispatch(FormAction::Edit(value)))
    };

    let on_submit = {
        let modal = modal.clone();
        let on_close = on_close.clone();
        Callback::from(move |_: ()| {
            if modal.phase != ModalPhase::Open {
                return;
            }

            let mut next = (*modal).clone();
            let value = match next.begin_submit() {
                Ok(value) => value,
                Err(message) => {
                    modal.dispatch(FormAction::Reject(message));
                    return;
                }
            };
            modal.dispatch(FormAction::BeginSubmit);

            let dispatch = modal.dispatcher();
            let on_close = on_close.clone();
            let pending = submit.call(value);
            let guard = scope.clone();
            scope.spawn(async move {
                match guard.guard(pending).await {
                    Ok(()) => {
                        dispatch.dispatch(FormAction::Finish(Ok(())));
                        on_close.emit(());
                    }
                    Err(e) if e.is_cancelled() => {}
                    Err(e) => {
                        Logger::error_with_component(
                            COMPONENT,
                            &format!("Failed to save {}: {}", field_label, e),
                        );
                        dispatch.dispatch(FormAction::Finish(Err(e.to_string())));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            if modal.is_submitting() {
                return;
            }
            modal.dispatch(FormAction::Cancel);
            on_close.emit(());
        })
    };

    UseFormModalResult {
        state: modal,
        actions: UseFormModalActions {
            on_input,
            on_submit,
            on_cancel,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::pin::pin;
    use std::task::{Context, Poll};

    fn block_on_ready<F: Future>(fut: F) -> F::Output {
        let waker = futures_util::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        match pin!(fut).as_mut().poll(&mut cx) {
            Poll::Ready(output) => output,
            Poll::Pending => panic!("future was not ready"),
        }
    }

    #[test]
    fn test_submit_fn_receives_text() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let submit = SubmitFn::new(move |text| {
            sink.borrow_mut().push(text);
            async { Ok(()) }
        });

        assert_eq!(block_on_ready(submit.call(" Beginner ".to_string())), Ok(()));
        assert_eq!(*seen.borrow(), vec![" Beginner ".to_string()]);
    }

    #[test]
    fn test_submit_fn_passes_errors_through() {
        let submit = SubmitFn::new(|_| async { Err(ApiError::from_status(409, "Conflict", "")) });
        let result = block_on_ready(submit.call("x".to_string()));
        assert_eq!(result.unwrap_err().status(), Some(409));
    }

    #[test]
    fn test_submit_fn_compares_by_identity() {
        let submit = SubmitFn::new(|_| async { Ok(()) });
        assert!(submit == submit.clone());
        assert!(submit != SubmitFn::new(|_| async { Ok(()) }));
    }
}
