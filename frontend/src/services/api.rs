use crate::services::logging::Logger;
use crate::services::task::{CancelRegistration, TaskScope};
use futures_util::future::try_join_all;
use gloo::net::http::{Request, RequestBuilder, Response};
use gloo::timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    ApiError, AppConfig, Category, CategoryPayload, Community, Endpoint, HttpMethod, Level,
    NamePayload, Question, QuestionPayload, QuestionScope,
};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use web_sys::{AbortController, AbortSignal};

const COMPONENT: &str = "ApiClient";

/// API client for communicating with the backend server.
///
/// Built once from [`AppConfig`] at startup and shared through context.
/// Screens call [`ApiClient::in_scope`] so their requests are aborted when
/// they unmount.
#[derive(Clone)]
pub struct ApiClient {
    config: Rc<AppConfig>,
    scope: Option<TaskScope>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && self.scope == other.scope
    }
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Rc::new(config),
            scope: None,
        }
    }

    /// Same client, with every request tied to `scope`
    pub fn in_scope(&self, scope: &TaskScope) -> Self {
        Self {
            config: self.config.clone(),
            scope: Some(scope.clone()),
        }
    }

    // Communities

    pub async fn list_communities(&self) -> Result<Vec<Community>, ApiError> {
        self.fetch(Endpoint::ListCommunities, None::<&()>).await
    }

    pub async fn get_community(&self, id: &str) -> Result<Community, ApiError> {
        self.fetch(Endpoint::GetCommunity(id), None::<&()>).await
    }

    pub async fn create_community(&self, name: &str) -> Result<Community, ApiError> {
        let body = NamePayload {
            name: name.to_string(),
        };
        self.fetch(Endpoint::CreateCommunity, Some(&body)).await
    }

    pub async fn update_community(&self, id: &str, name: &str) -> Result<Community, ApiError> {
        let body = NamePayload {
            name: name.to_string(),
        };
        self.fetch(Endpoint::UpdateCommunity(id), Some(&body)).await
    }

    pub async fn delete_community(&self, id: &str) -> Result<(), ApiError> {
        self.execute(Endpoint::DeleteCommunity(id)).await
    }

    // Levels

    pub async fn get_level(&self, id: &str) -> Result<Level, ApiError> {
        self.fetch(Endpoint::GetLevel(id), None::<&()>).await
    }

    /// One request per id, all in flight together; any failure fails the lot
    pub async fn get_levels(&self, ids: &[String]) -> Result<Vec<Level>, ApiError> {
        fetch_each(ids, |id| async move {
            self.get_level(&id).await.map_err(|e| {
                Logger::error_with_component(
                    COMPONENT,
                    &format!("Failed to fetch level with ID {}: {}", id, e),
                );
                e
            })
        })
        .await
    }

    pub async fn create_level(&self, community_id: &str, name: &str) -> Result<Level, ApiError> {
        let body = NamePayload {
            name: name.to_string(),
        };
        self.fetch(Endpoint::CreateLevel { community_id }, Some(&body))
            .await
    }

    pub async fn update_level(&self, id: &str, name: &str) -> Result<Level, ApiError> {
        let body = NamePayload {
            name: name.to_string(),
        };
        self.fetch(Endpoint::UpdateLevel(id), Some(&body)).await
    }

    pub async fn delete_level(&self, id: &str) -> Result<(), ApiError> {
        self.execute(Endpoint::DeleteLevel(id)).await
    }

    // Categories

    pub async fn list_categories(
        &self,
        community_id: &str,
        level_id: &str,
    ) -> Result<Vec<Category>, ApiError> {
        let endpoint = Endpoint::ListCategories {
            community_id,
            level_id,
        };
        self.fetch(endpoint, None::<&()>).await
    }

    pub async fn create_category(
        &self,
        community_id: &str,
        level_id: &str,
        name: &str,
    ) -> Result<Category, ApiError> {
        let body = category_payload(community_id, level_id, name);
        self.fetch(Endpoint::CreateCategory { level_id }, Some(&body))
            .await
    }

    pub async fn update_category(
        &self,
        id: &str,
        community_id: &str,
        level_id: &str,
        name: &str,
    ) -> Result<Category, ApiError> {
        let body = category_payload(community_id, level_id, name);
        self.fetch(Endpoint::UpdateCategory(id), Some(&body)).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        self.execute(Endpoint::DeleteCategory(id)).await
    }

    // Questions

    pub async fn list_questions(&self, scope: QuestionScope<'_>) -> Result<Vec<Question>, ApiError> {
        self.fetch(Endpoint::ListQuestions(scope), None::<&()>).await
    }

    pub async fn create_question(
        &self,
        scope: QuestionScope<'_>,
        text: &str,
    ) -> Result<Question, ApiError> {
        let body = QuestionPayload {
            text: text.to_string(),
        };
        self.fetch(Endpoint::CreateQuestion(scope), Some(&body)).await
    }

    pub async fn update_question(
        &self,
        scope: QuestionScope<'_>,
        question_id: &str,
        text: &str,
    ) -> Result<Question, ApiError> {
        let body = QuestionPayload {
            text: text.to_string(),
        };
        let endpoint = Endpoint::UpdateQuestion { scope, question_id };
        self.fetch(endpoint, Some(&body)).await
    }

    pub async fn delete_question(&self, id: &str) -> Result<(), ApiError> {
        self.execute(Endpoint::DeleteQuestion(id)).await
    }

    // Transport

    async fn fetch<B, R>(&self, endpoint: Endpoint<'_>, body: Option<&B>) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let method = endpoint.method();
        let path = endpoint.path();
        self.guarded(async {
            let (response, in_flight) = self.send(method, &path, body).await?;
            // still armed: a stalled body times out or aborts with the scope
            let decoded = response.json::<R>().await;
            decoded.map_err(|e| {
                let error = in_flight.failure(ApiError::Decode(e.to_string()));
                log_failure(method, &path, &error);
                error
            })
        })
        .await
    }

    async fn execute(&self, endpoint: Endpoint<'_>) -> Result<(), ApiError> {
        let method = endpoint.method();
        let path = endpoint.path();
        self.guarded(async { self.send(method, &path, None::<&()>).await.map(|_| ()) })
            .await
    }

    async fn guarded<T, F>(&self, fut: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        match &self.scope {
            Some(scope) => scope.guard(fut).await,
            None => fut.await,
        }
    }

    /// Resolves once headers arrive. The returned [`InFlight`] keeps the
    /// request abortable and must be held until the body is consumed.
    async fn send<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<(Response, InFlight), ApiError> {
        let url = self.config.url(path);
        Logger::debug_with_component(COMPONENT, &format!("{} {}", method, path));

        let in_flight = InFlight::arm(self.scope.as_ref(), self.config.request_timeout_ms);
        let builder = builder_for(method, &url).abort_signal(in_flight.signal.as_ref());
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let error = in_flight.failure(ApiError::Network(e.to_string()));
                log_failure(method, path, &error);
                return Err(error);
            }
        };

        if !response.ok() {
            let text = response.text().await.unwrap_or_default();
            let error = ApiError::from_status(response.status(), &response.status_text(), &text);
            Logger::error_with_component(
                COMPONENT,
                &format!("{} {} returned {}: {}", method, path, response.status(), error),
            );
            return Err(error);
        }

        Ok((response, in_flight))
    }
}

/// Abort handles of one request: the scope hook and the timeout.
/// Dropping it disarms both.
struct InFlight {
    signal: Option<AbortSignal>,
    timed_out: Rc<Cell<bool>>,
    timeout_ms: Option<u32>,
    scope: Option<TaskScope>,
    _registration: Option<CancelRegistration>,
    _timeout: Option<Timeout>,
}

impl InFlight {
    fn arm(scope: Option<&TaskScope>, timeout_ms: Option<u32>) -> Self {
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(AbortController::signal);

        let registration = match (scope, controller.clone()) {
            (Some(scope), Some(controller)) => Some(scope.on_cancel(move || controller.abort())),
            _ => None,
        };
        let timed_out = Rc::new(Cell::new(false));
        let timeout = match (timeout_ms, controller) {
            (Some(millis), Some(controller)) => {
                let timed_out = timed_out.clone();
                Some(Timeout::new(millis, move || {
                    timed_out.set(true);
                    controller.abort();
                }))
            }
            _ => None,
        };

        Self {
            signal,
            timed_out,
            timeout_ms,
            scope: scope.cloned(),
            _registration: registration,
            _timeout: timeout,
        }
    }

    /// Name an aborted request after whatever aborted it
    fn failure(&self, fallback: ApiError) -> ApiError {
        classify_failure(
            self.timed_out.get(),
            self.scope.as_ref().is_some_and(TaskScope::is_cancelled),
            self.timeout_ms,
            fallback,
        )
    }
}

fn classify_failure(
    timed_out: bool,
    cancelled: bool,
    timeout_ms: Option<u32>,
    fallback: ApiError,
) -> ApiError {
    if timed_out {
        ApiError::Timeout(timeout_ms.unwrap_or_default())
    } else if cancelled {
        ApiError::Cancelled
    } else {
        fallback
    }
}

fn log_failure(method: HttpMethod, path: &str, error: &ApiError) {
    if !error.is_cancelled() {
        Logger::error_with_component(COMPONENT, &format!("{} {} failed: {}", method, path, error));
    }
}

fn builder_for(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Get => Request::get(url),
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

fn category_payload(community_id: &str, level_id: &str, name: &str) -> CategoryPayload {
    CategoryPayload {
        name: name.to_string(),
        community: community_id.to_string(),
        level: level_id.to_string(),
    }
}

/// Run `fetch` for every id concurrently and join all-or-nothing, keeping
/// id order. No partial result survives a single failure.
pub async fn fetch_each<T, F, Fut>(ids: &[String], fetch: F) -> Result<Vec<T>, ApiError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    try_join_all(ids.iter().cloned().map(fetch)).await
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

    fn level(id: &str) -> Level {
        Level {
            id: id.to_string(),
            name: format!("Level {}", id),
        }
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_fetch_each_keeps_id_order() {
        let result = block_on_ready(fetch_each(&ids(&["A", "B", "C"]), |id| async move {
            Ok(level(&id))
        }));
        assert_eq!(result, Ok(vec![level("A"), level("B"), level("C")]));
    }

    #[test]
    fn test_fetch_each_fails_whole_batch() {
        let result = block_on_ready(fetch_each(&ids(&["A", "B", "C"]), |id| async move {
            if id == "B" {
                Err(ApiError::from_status(404, "Not Found", ""))
            } else {
                Ok(level(&id))
            }
        }));
        assert_eq!(result.unwrap_err().status(), Some(404));
    }

    #[test]
    fn test_fetch_each_issues_one_call_per_id() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let result = block_on_ready(fetch_each(&ids(&["A", "B"]), move |id| {
            counter.set(counter.get() + 1);
            async move { Ok(level(&id)) }
        }));
        assert_eq!(result.map(|levels| levels.len()), Ok(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_fetch_each_empty() {
        let result = block_on_ready(fetch_each(&[], |id| async move { Ok(level(&id)) }));
        assert_eq!(result, Ok(Vec::new()));
    }

    #[test]
    fn test_aborted_request_named_after_cause() {
        let decode = || ApiError::Decode("unexpected end of input".to_string());
        assert_eq!(classify_failure(true, false, Some(15000), decode()), ApiError::Timeout(15000));
        // the timer wins when both fired
        assert_eq!(classify_failure(true, true, Some(500), decode()), ApiError::Timeout(500));
        assert_eq!(classify_failure(false, true, Some(500), decode()), ApiError::Cancelled);
        assert_eq!(classify_failure(false, false, None, decode()), decode());
    }

    #[test]
    fn test_in_scope_clients_compare_by_scope() {
        let client = ApiClient::new(AppConfig::default());
        let scope = TaskScope::new();
        assert!(client == client.clone());
        assert!(client.in_scope(&scope) == client.in_scope(&scope));
        assert!(client.in_scope(&scope) != client);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_in_flight_aborts_while_held() {
        let scope = TaskScope::new();
        let in_flight = InFlight::arm(Some(&scope), Some(60_000));
        let signal = in_flight.signal.clone().unwrap();

        // headers are in; the body is still being read
        assert!(!signal.aborted());
        scope.cancel();
        assert!(signal.aborted());
        assert_eq!(
            in_flight.failure(ApiError::Decode("body".to_string())),
            ApiError::Cancelled
        );
    }

    #[wasm_bindgen_test]
    fn test_dropped_in_flight_is_disarmed() {
        let scope = TaskScope::new();
        let in_flight = InFlight::arm(Some(&scope), Some(60_000));
        let signal = in_flight.signal.clone().unwrap();

        drop(in_flight);
        scope.cancel();
        assert!(!signal.aborted());
    }
}
