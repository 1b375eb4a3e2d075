use std::time::Duration;

use dioxus::{logger::tracing::warn, prelude::ServerFnError};
use server::ServerError;

/// Observable state of one server-function request, as seen by a view.
#[derive(Clone, PartialEq)]
pub enum RequestState<T> {
    Pending,
    Ready(T),
    Failed(ServerFnError<ServerError>),
    TimedOut,
}

impl<T> RequestState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(3);

// Browser builds have no tokio reactor; timers there go through the
// wasm-bindgen event loop instead.

#[cfg(not(target_arch = "wasm32"))]
async fn bounded<F: Future>(limit: Duration, future: F) -> Option<F::Output> {
    tokio::time::timeout(limit, future).await.ok()
}

#[cfg(target_arch = "wasm32")]
async fn bounded<F: Future>(limit: Duration, future: F) -> Option<F::Output> {
    use futures_util::future::{select, Either};

    let future = std::pin::pin!(future);
    let deadline = std::pin::pin!(gloo_timers::future::sleep(limit));
    match select(future, deadline).await {
        Either::Left((value, _)) => Some(value),
        Either::Right(((), _)) => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_for(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep_for(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Timeout and retry settings for server-function calls.
pub struct RetryPolicy {
    pub wait_timeout: Duration,
    pub retry_interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            wait_timeout: DEFAULT_WAIT_TIMEOUT,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}

impl RetryPolicy {
    /// Runs one request, bounding it by the wait timeout.
    pub async fn request<T, F>(&self, future: F) -> RequestState<T>
    where
        F: Future<Output = Result<T, ServerFnError<ServerError>>>,
    {
        let Some(value) = bounded(self.wait_timeout, future).await else {
            warn!("Request timed out after {:?}", self.wait_timeout);
            return RequestState::TimedOut;
        };
        match value {
            Ok(value) => RequestState::Ready(value),
            Err(err) => RequestState::Failed(err),
        }
    }

    /// Re-issues the request until it succeeds, publishing every
    /// intermediate state.
    pub async fn request_loop<T, F>(
        &self,
        mut make_request: impl FnMut() -> F,
        mut publish: impl FnMut(RequestState<T>),
    ) where
        F: Future<Output = Result<T, ServerFnError<ServerError>>>,
    {
        loop {
            let state = self.request(make_request()).await;
            let done = matches!(state, RequestState::Ready(_));
            publish(state);
            if done {
                break;
            }
            sleep_for(self.retry_interval).await;
            publish(RequestState::Pending);
        }
    }
}

/// Hook wrapper: issues the given server-function call with the default
/// retry policy and returns its latest [`RequestState`]. Values used inside
/// the call must be `Copy` (read them out of signals).
#[macro_export]
macro_rules! use_server_request {
    ($future:expr) => {{
        let mut state =
            dioxus::prelude::use_signal(|| $crate::packet::RequestState::Pending);
        dioxus::prelude::use_future(move || async move {
            $crate::packet::RetryPolicy::default()
                .request_loop(|| $future, |value| state.set(value))
                .await;
        });
        let value = state.read();
        value.clone()
    }};
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dioxus::prelude::ServerFnError;
    use server::ServerError;

    use crate::packet::{RequestState, RetryPolicy};

    fn quick_policy() -> RetryPolicy {
        RetryPolicy {
            wait_timeout: Duration::from_millis(20),
            retry_interval: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_request_passes_through_success() {
        let state = quick_policy().request(async { Ok(42u32) }).await;
        assert_eq!(state.as_ready(), Some(&42));
        assert!(!state.is_pending());
    }

    #[tokio::test]
    async fn test_request_wraps_server_errors() {
        let state: RequestState<u32> = quick_policy()
            .request(async {
                Err(ServerFnError::WrappedServerError(
                    ServerError::SessionNotFound,
                ))
            })
            .await;
        assert!(matches!(
            state,
            RequestState::Failed(ServerFnError::WrappedServerError(
                ServerError::SessionNotFound
            ))
        ));
    }

    #[tokio::test]
    async fn test_request_times_out() {
        let state: RequestState<u32> = quick_policy()
            .request(std::future::pending::<Result<u32, _>>())
            .await;
        assert!(matches!(state, RequestState::TimedOut));
    }

    #[tokio::test]
    async fn test_request_loop_retries_failures_until_success() {
        let mut attempts = 0u32;
        let mut states: Vec<RequestState<u32>> = Vec::new();
        quick_policy()
            .request_loop(
                || {
                    attempts += 1;
                    let attempt = attempts;
                    async move {
                        if attempt == 1 {
                            Err(ServerFnError::WrappedServerError(
                                ServerError::SessionStoreError,
                            ))
                        } else {
                            Ok(7u32)
                        }
                    }
                },
                |state| states.push(state),
            )
            .await;

        assert_eq!(attempts, 2);
        assert_eq!(states.len(), 3);
        assert!(matches!(states[0], RequestState::Failed(_)));
        assert!(states[1].is_pending());
        assert_eq!(states[2].as_ready(), Some(&7));
    }
}
