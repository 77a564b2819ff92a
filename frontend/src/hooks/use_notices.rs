use crate::services::mutations::NoticeSink;
use crate::state::notices::{NoticeAction, NoticeKind, NoticeQueue};
use yew::prelude::*;

/// Handle for raising inline notices from any screen
#[derive(Clone, PartialEq, Default)]
pub struct Notifier {
    dispatch: Option<UseReducerDispatcher<NoticeQueue>>,
}

impl Notifier {
    pub fn new(dispatch: UseReducerDispatcher<NoticeQueue>) -> Self {
        Self {
            dispatch: Some(dispatch),
        }
    }

    pub fn dismiss(&self, id: u64) {
        if let Some(dispatch) = &self.dispatch {
            dispatch.dispatch(NoticeAction::Dismiss(id));
        }
    }

    fn push(&self, kind: NoticeKind, message: String) {
        if let Some(dispatch) = &self.dispatch {
            dispatch.dispatch(NoticeAction::Push(kind, message));
        }
    }
}

impl NoticeSink for Notifier {
    fn notify(&self, kind: NoticeKind, message: String) {
        self.push(kind, message);
    }
}

/// Outside a `NoticeProvider` notices are dropped
#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}
