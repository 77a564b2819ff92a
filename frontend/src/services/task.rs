use shared::ApiError;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::future::Future;
use std::rc::{Rc, Weak};

type AbortHook = Box<dyn FnOnce()>;

#[derive(Default)]
struct ScopeInner {
    cancelled: Cell<bool>,
    next_key: Cell<u64>,
    hooks: RefCell<BTreeMap<u64, AbortHook>>,
}

/// Lifetime of a screen's network work.
///
/// Cancelling runs every registered abort hook and makes [`TaskScope::guard`]
/// discard any result that arrives afterwards.
#[derive(Clone, Default)]
pub struct TaskScope {
    inner: Rc<ScopeInner>,
}

impl PartialEq for TaskScope {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Idempotent
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let hooks = std::mem::take(&mut *self.inner.hooks.borrow_mut());
        for (_, hook) in hooks {
            hook();
        }
    }

    /// Register work to run on cancellation. The hook is dropped unrun when
    /// the returned registration is dropped first; on an already cancelled
    /// scope it runs immediately.
    pub fn on_cancel(&self, hook: impl FnOnce() + 'static) -> CancelRegistration {
        if self.is_cancelled() {
            hook();
            return CancelRegistration {
                scope: Weak::new(),
                key: 0,
            };
        }

        let key = self.inner.next_key.get();
        self.inner.next_key.set(key + 1);
        self.inner.hooks.borrow_mut().insert(key, Box::new(hook));
        CancelRegistration {
            scope: Rc::downgrade(&self.inner),
            key,
        }
    }

    /// Await `fut`, turning a result that lands after cancellation into
    /// [`ApiError::Cancelled`].
    pub async fn guard<T, F>(&self, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        if self.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let result = fut.await;
        if self.is_cancelled() {
            Err(ApiError::Cancelled)
        } else {
            result
        }
    }

    /// Spawn on the browser event loop
    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        if self.is_cancelled() {
            return;
        }
        wasm_bindgen_futures::spawn_local(fut);
    }
}

/// Deregisters its abort hook when dropped
pub struct CancelRegistration {
    scope: Weak<ScopeInner>,
    key: u64,
}

impl Drop for CancelRegistration {
    fn drop(&mut self) {
        if let Some(inner) = self.scope.upgrade() {
            if let Ok(mut hooks) = inner.hooks.try_borrow_mut() {
                hooks.remove(&self.key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn pending(scope: &TaskScope) -> usize {
        scope.inner.hooks.borrow().len()
    }

    #[test]
    fn test_cancel_runs_hooks_once() {
        let scope = TaskScope::new();
        let fired = Rc::new(Cell::new(0));

        let counter = fired.clone();
        let _registration = scope.on_cancel(move || counter.set(counter.get() + 1));
        assert_eq!(pending(&scope), 1);

        scope.cancel();
        scope.cancel();
        assert!(scope.is_cancelled());
        assert_eq!(fired.get(), 1);
        assert_eq!(pending(&scope), 0);
    }

    #[test]
    fn test_dropped_registration_is_not_run() {
        let scope = TaskScope::new();
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        let registration = scope.on_cancel(move || flag.set(true));
        drop(registration);
        assert_eq!(pending(&scope), 0);

        scope.cancel();
        assert!(!fired.get());
    }

    #[test]
    fn test_hook_on_cancelled_scope_runs_immediately() {
        let scope = TaskScope::new();
        scope.cancel();

        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let _registration = scope.on_cancel(move || flag.set(true));
        assert!(fired.get());
    }

    #[test]
    fn test_guard_passes_results_through() {
        let scope = TaskScope::new();
        let result = block_on_ready(scope.guard(async { Ok::<_, ApiError>(7) }));
        assert_eq!(result, Ok(7));

        let failed = block_on_ready(scope.guard(async {
            Err::<u8, _>(ApiError::Network("down".to_string()))
        }));
        assert_eq!(failed, Err(ApiError::Network("down".to_string())));
    }

    #[test]
    fn test_guard_discards_late_results() {
        let scope = TaskScope::new();
        let inner = scope.clone();
        // the screen goes away while the request is in flight
        let result = block_on_ready(scope.guard(async move {
            inner.cancel();
            Ok::<_, ApiError>("stale")
        }));
        assert_eq!(result, Err(ApiError::Cancelled));

        let after = block_on_ready(scope.guard(async { Ok::<_, ApiError>(1) }));
        assert_eq!(after, Err(ApiError::Cancelled));
    }

    #[test]
    fn test_clones_share_state() {
        let scope = TaskScope::new();
        let other = scope.clone();
        assert!(scope == other);
        assert!(scope != TaskScope::new());
        other.cancel();
        assert!(scope.is_cancelled());
    }
}
