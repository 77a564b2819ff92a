//! # Mutations Module
//!
//! Create, update and delete as seen by a screen: await the server, then
//! mirror only an acknowledged change into the local list and report it.
//! A failed request leaves the list exactly as it was.

use crate::state::confirm::{preview, PendingDelete};
use crate::state::list_state::{ListAction, ListState};
use crate::state::notices::NoticeKind;
use shared::{ApiError, Entity};
use std::future::Future;
use yew::UseReducerDispatcher;

/// Where acknowledged changes go; a screen's list reducer in the app
pub trait ListSink<T> {
    fn apply(&self, action: ListAction<T>);
}

impl<T: Entity + 'static> ListSink<T> for UseReducerDispatcher<ListState<T>> {
    fn apply(&self, action: ListAction<T>) {
        self.dispatch(action);
    }
}

/// Where user-facing outcomes go
pub trait NoticeSink {
    fn notify(&self, kind: NoticeKind, message: String);
}

/// Await a create (`editing` is `None`) or an update of `editing`, then
/// append or replace by the edited id.
///
/// Failures raise no notice; the open dialog shows them instead.
pub async fn save_record<T, L, N, F>(
    list: &L,
    notices: &N,
    editing: Option<&T>,
    request: F,
) -> Result<T, ApiError>
where
    T: Entity,
    L: ListSink<T>,
    N: NoticeSink,
    F: Future<Output = Result<T, ApiError>>,
{
    let record = request.await?;
    match editing {
        Some(existing) => {
            notices.notify(
                NoticeKind::Success,
                format!("Updated {} \"{}\"", T::KIND, preview(record.label())),
            );
            list.apply(ListAction::Replace {
                id: existing.id().to_string(),
                record: record.clone(),
            });
        }
        None => {
            notices.notify(
                NoticeKind::Success,
                format!("Created {} \"{}\"", T::KIND, preview(record.label())),
            );
            list.apply(ListAction::Append(record.clone()));
        }
    }
    Ok(record)
}

/// Await a confirmed delete. Success drops the row; failure keeps it and
/// raises an error notice. A cancelled request does neither.
pub async fn delete_record<T, L, N, F>(
    list: &L,
    notices: &N,
    target: &PendingDelete,
    request: F,
) -> Result<(), ApiError>
where
    L: ListSink<T>,
    N: NoticeSink,
    F: Future<Output = Result<(), ApiError>>,
{
    match request.await {
        Ok(()) => {
            notices.notify(NoticeKind::Success, target.success_message());
            list.apply(ListAction::Remove(target.id.clone()));
            Ok(())
        }
        Err(e) if e.is_cancelled() => Err(e),
        Err(e) => {
            notices.notify(NoticeKind::Error, target.failure_message(&e.to_string()));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::notices::NoticeQueue;
    use shared::{Category, Community, Question};
    use std::cell::{Cell, RefCell};
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

    impl<T: Entity> ListSink<T> for RefCell<ListState<T>> {
        fn apply(&self, action: ListAction<T>) {
            let next = self.borrow().apply(action);
            if let Some(next) = next {
                *self.borrow_mut() = next;
            }
        }
    }

    impl NoticeSink for RefCell<NoticeQueue> {
        fn notify(&self, kind: NoticeKind, message: String) {
            self.borrow_mut().push(kind, message);
        }
    }

    fn notices(queue: &RefCell<NoticeQueue>) -> Vec<(NoticeKind, String)> {
        queue
            .borrow()
            .iter()
            .map(|notice| (notice.kind, notice.message.clone()))
            .collect()
    }

    fn community(id: &str, name: &str) -> Community {
        Community {
            id: id.to_string(),
            name: name.to_string(),
            levels: Vec::new(),
        }
    }

    fn communities() -> RefCell<ListState<Community>> {
        RefCell::new(ListState::Ready(vec![community("c1", "Rust"), community("c2", "Go")]))
    }

    fn server_error() -> ApiError {
        ApiError::from_status(500, "Internal Server Error", "")
    }

    #[test]
    fn test_create_appends_acknowledged_record() {
        let list = communities();
        let queue = RefCell::new(NoticeQueue::default());
        let result = block_on_ready(save_record(&list, &queue, None, async {
            Ok(community("c3", "Zig"))
        }));

        assert_eq!(result.map(|c| c.id), Ok("c3".to_string()));
        let ids: Vec<String> = list.borrow().items().iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert_eq!(
            notices(&queue),
            vec![(NoticeKind::Success, "Created community \"Zig\"".to_string())]
        );
    }

    #[test]
    fn test_update_replaces_by_edited_id() {
        let list = communities();
        let queue = RefCell::new(NoticeQueue::default());
        let existing = community("c2", "Go");
        let result = block_on_ready(save_record(&list, &queue, Some(&existing), async {
            Ok(community("c2", "Golang"))
        }));

        assert!(result.is_ok());
        assert_eq!(
            *list.borrow(),
            ListState::Ready(vec![community("c1", "Rust"), community("c2", "Golang")])
        );
    }

    #[test]
    fn test_failed_save_leaves_list_unchanged() {
        let list = communities();
        let queue = RefCell::new(NoticeQueue::default());
        let existing = community("c1", "Rust");

        let created = block_on_ready(save_record(&list, &queue, None, async {
            Err::<Community, _>(server_error())
        }));
        let updated = block_on_ready(save_record(&list, &queue, Some(&existing), async {
            Err::<Community, _>(ApiError::Network("offline".to_string()))
        }));

        assert_eq!(created.unwrap_err().status(), Some(500));
        assert_eq!(updated, Err(ApiError::Network("offline".to_string())));
        assert_eq!(*list.borrow(), *communities().borrow());
        assert!(notices(&queue).is_empty());
    }

    #[test]
    fn test_saved_question_text_kept_verbatim() {
        let list = RefCell::new(ListState::<Question>::Ready(Vec::new()));
        let queue = RefCell::new(NoticeQueue::default());
        let text = "  What is   2 + 2?\n";
        let saved = block_on_ready(save_record(&list, &queue, None, async {
            Ok(Question {
                id: "q1".to_string(),
                text: text.to_string(),
            })
        }));

        assert_eq!(saved.map(|q| q.text), Ok(text.to_string()));
        assert_eq!(list.borrow().find("q1").map(|q| q.text.as_str()), Some(text));
    }

    #[test]
    fn test_delete_removes_row_and_reports() {
        let list = communities();
        let queue = RefCell::new(NoticeQueue::default());
        let target = PendingDelete::of(&community("c1", "Rust"));

        let result = block_on_ready(delete_record::<Community, _, _, _>(
            &list,
            &queue,
            &target,
            async { Ok(()) },
        ));

        assert_eq!(result, Ok(()));
        assert_eq!(*list.borrow(), ListState::Ready(vec![community("c2", "Go")]));
        assert_eq!(
            notices(&queue),
            vec![(NoticeKind::Success, "Deleted community \"Rust\"".to_string())]
        );
    }

    #[test]
    fn test_failed_delete_keeps_row_and_raises_notice() {
        let list = communities();
        let queue = RefCell::new(NoticeQueue::default());
        let target = PendingDelete::of(&community("c1", "Rust"));

        let result = block_on_ready(delete_record::<Community, _, _, _>(&list, &queue, &target, async {
            Err(server_error())
        }));

        assert_eq!(result.unwrap_err().status(), Some(500));
        assert_eq!(*list.borrow(), *communities().borrow());
        let raised = notices(&queue);
        assert_eq!(raised.len(), 1);
        assert_eq!(raised[0].0, NoticeKind::Error);
        assert!(raised[0].1.starts_with("Failed to delete community \"Rust\""));
    }

    #[test]
    fn test_cancelled_delete_is_silent() {
        let list = RefCell::new(ListState::Ready(vec![Category {
            id: "k1".to_string(),
            name: "Grammar".to_string(),
        }]));
        let queue = RefCell::new(NoticeQueue::default());
        let target = PendingDelete::of(&list.borrow().items()[0]);
        let polled = Cell::new(false);

        let result = block_on_ready(delete_record::<Category, _, _, _>(&list, &queue, &target, async {
            polled.set(true);
            Err(ApiError::Cancelled)
        }));

        assert!(polled.get());
        assert_eq!(result, Err(ApiError::Cancelled));
        assert_eq!(list.borrow().items().len(), 1);
        assert!(notices(&queue).is_empty());
    }
}
