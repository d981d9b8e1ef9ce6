//! API Client
//!
//! HTTP core for the TaskFlow REST backend, organized by domain. All calls
//! share the base URL, cookie credentials, and the session coordination
//! contract: mutating requests opportunistically refresh a known-stale
//! session first, and any 401 response gets exactly one refresh-and-retry
//! before the session is torn down.

mod auth;
mod categories;
mod task_files;
mod tasks;

use gloo_net::http::{Method, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

use crate::context::SessionContext;
use crate::error::{field_errors_from_value, ApiError};
use crate::session;

pub use tasks::TaskDraft;

/// Single configured origin; all paths are relative to it.
pub const API_BASE_URL: &str = "https://task-flow-drf-api-6a658d5dbfee.herokuapp.com";

const REFRESH_ENDPOINT: &str = "/dj-rest-auth/token/refresh/";

fn endpoint(path: &str) -> String {
    format!("{API_BASE_URL}{path}")
}

/// Request payload. Kept separate from the built request so a 401 retry can
/// rebuild the original request once.
enum Body {
    Empty,
    Json(serde_json::Value),
    Form(web_sys::FormData),
}

/// Shared API handle provided via context. Copy, like the context slots it
/// carries; the expiry callback redirects to sign-in and is installed by the
/// app shell.
#[derive(Clone, Copy)]
pub struct Api {
    session: SessionContext,
    on_session_expired: UnsyncCallback<()>,
}

impl Api {
    pub fn new(session: SessionContext, on_session_expired: UnsyncCallback<()>) -> Self {
        Self {
            session,
            on_session_expired,
        }
    }

    /// GET a JSON resource relative to the base URL
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request_json(Method::GET, endpoint(path), Body::Empty)
            .await
    }

    /// GET an absolute URL, as handed back in paged `next` continuations
    pub(crate) async fn get_absolute<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        self.request_json(Method::GET, url.to_string(), Body::Empty)
            .await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let value = serde_json::to_value(body).map_err(|err| {
            ApiError::Network(gloo_net::Error::SerdeError(err))
        })?;
        self.request_json(Method::POST, endpoint(path), Body::Json(value))
            .await
    }

    /// POST with an empty body (logout, refresh-adjacent endpoints)
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::POST, endpoint(path), Body::Empty)
            .await
            .map(|_| ())
    }

    /// POST multipart form data (file-bearing requests)
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        self.request_json(Method::POST, endpoint(path), Body::Form(form))
            .await
    }

    pub(crate) async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let value = serde_json::to_value(body).map_err(|err| {
            ApiError::Network(gloo_net::Error::SerdeError(err))
        })?;
        self.request_json(Method::PUT, endpoint(path), Body::Json(value))
            .await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let value = serde_json::to_value(body).map_err(|err| {
            ApiError::Network(gloo_net::Error::SerdeError(err))
        })?;
        self.request_json(Method::PATCH, endpoint(path), Body::Json(value))
            .await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::DELETE, endpoint(path), Body::Empty)
            .await
            .map(|_| ())
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        body: Body,
    ) -> Result<T, ApiError> {
        let response = self.send(method, url, body).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send one logical request under the session coordination contract.
    async fn send(&self, method: Method, url: String, body: Body) -> Result<Response, ApiError> {
        if should_pre_refresh(&method, session::has_refresh_marker()) {
            if self.refresh().await.is_err() {
                // Matches the original client: tear down, then let the
                // request itself fail normally.
                self.expire_session();
            }
        }

        let response = build_request(&method, &url, &body)?.send().await?;
        if let RetryStep::Complete = retry_step(response.status(), false) {
            return into_api_result(response).await;
        }

        // Exactly one refresh-and-retry per logical request; never loops.
        if self.refresh().await.is_err() {
            self.expire_session();
        }
        let retried = build_request(&method, &url, &body)?.send().await?;
        if let RetryStep::TearDown = retry_step(retried.status(), true) {
            self.expire_session();
            return Err(ApiError::Unauthorized);
        }
        into_api_result(retried).await
    }

    /// Silent token refresh against the session endpoint. Bypasses `send`
    /// so a failing refresh can never recurse into another refresh.
    pub(crate) async fn refresh(&self) -> Result<(), ApiError> {
        let response = RequestBuilder::new(&endpoint(REFRESH_ENDPOINT))
            .method(Method::POST)
            .credentials(web_sys::RequestCredentials::Include)
            .build()?
            .send()
            .await?;
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::Status(response.status()))
        }
    }

    /// Global session teardown: clear the user slot and the local marker,
    /// then hand control to the shell's redirect.
    fn expire_session(&self) {
        let was_signed_in = self.session.is_signed_in();
        self.session.clear();
        session::clear_marker();
        if was_signed_in {
            self.on_session_expired.run(());
        }
    }

    pub(crate) fn session(&self) -> SessionContext {
        self.session
    }
}

fn is_mutating(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Opportunistic refresh happens before state-changing requests, and only
/// when a marker says a refresh-capable session ever existed.
fn should_pre_refresh(method: &Method, has_marker: bool) -> bool {
    is_mutating(method) && has_marker
}

/// What a response status means for the retry protocol
enum RetryStep {
    /// Hand the response to the caller as-is
    Complete,
    /// First 401: refresh once and resend the original request
    RefreshAndRetry,
    /// 401 on the retried request: give up and tear the session down
    TearDown,
}

fn retry_step(status: u16, already_retried: bool) -> RetryStep {
    if status != 401 {
        RetryStep::Complete
    } else if already_retried {
        RetryStep::TearDown
    } else {
        RetryStep::RefreshAndRetry
    }
}

fn build_request(
    method: &Method,
    url: &str,
    body: &Body,
) -> Result<gloo_net::http::Request, ApiError> {
    let builder = RequestBuilder::new(url)
        .method(method.clone())
        .credentials(web_sys::RequestCredentials::Include);
    let request = match body {
        Body::Empty => builder.build()?,
        Body::Json(value) => builder.json(value)?,
        // multipart/form-data; the browser fills in the boundary header
        Body::Form(form) => builder.body(JsValue::from(form.clone()))?,
    };
    Ok(request)
}

/// Map non-success statuses into the error taxonomy. 400 payloads become
/// field-keyed validation errors for inline rendering.
async fn into_api_result(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    if status == 400 {
        if let Ok(value) = response.json::<serde_json::Value>().await {
            return Err(ApiError::Validation(field_errors_from_value(value)));
        }
    }
    Err(ApiError::Status(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_are_not_mutating() {
        assert!(!is_mutating(&Method::GET));
        assert!(!is_mutating(&Method::HEAD));
    }

    #[test]
    fn test_writes_are_mutating() {
        assert!(is_mutating(&Method::POST));
        assert!(is_mutating(&Method::PUT));
        assert!(is_mutating(&Method::PATCH));
        assert!(is_mutating(&Method::DELETE));
    }

    #[test]
    fn test_no_pre_refresh_without_marker() {
        assert!(!should_pre_refresh(&Method::POST, false));
        assert!(!should_pre_refresh(&Method::PUT, false));
        assert!(!should_pre_refresh(&Method::DELETE, false));
    }

    #[test]
    fn test_pre_refresh_needs_mutating_method_and_marker() {
        assert!(should_pre_refresh(&Method::POST, true));
        assert!(should_pre_refresh(&Method::PATCH, true));
        assert!(!should_pre_refresh(&Method::GET, true));
    }

    #[test]
    fn test_first_401_gets_exactly_one_refresh_and_retry() {
        assert!(matches!(retry_step(401, false), RetryStep::RefreshAndRetry));
        assert!(matches!(retry_step(200, false), RetryStep::Complete));
        assert!(matches!(retry_step(500, false), RetryStep::Complete));
    }

    #[test]
    fn test_second_401_tears_down_instead_of_looping() {
        assert!(matches!(retry_step(401, true), RetryStep::TearDown));
        // any non-401 outcome of the retry goes back to the caller
        assert!(matches!(retry_step(204, true), RetryStep::Complete));
        assert!(matches!(retry_step(403, true), RetryStep::Complete));
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            endpoint("/tasks/"),
            format!("{API_BASE_URL}/tasks/")
        );
    }
}
