//! HTTP Transport
//!
//! One configured request path for the whole app: base prefix, bearer-token
//! injection, request timeout, global progress accounting, and centralized
//! error-to-notification translation. Callers get the parsed payload or an
//! `ApiError`; every global side effect happens here, once.

use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::progress;
use crate::session;
use crate::toast;

const BASE_URL: &str = "/api/v1";
const REQUEST_TIMEOUT_MS: u32 = 10_000;
const FALLBACK_MESSAGE: &str = "请求失败";

/// Transport-level failure, classified by what the server (or the network)
/// gave back. Raised to the caller after the user-facing side effects ran.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No usable response: connection refused, DNS, body decode.
    Network(String),
    /// The fixed request ceiling elapsed.
    Timeout,
    /// 401: the stored token is no longer valid.
    SessionExpired,
    /// 422-class structured validation errors.
    Validation(Vec<FieldError>),
    /// Any other non-2xx with whatever message could be extracted.
    Server { status: u16, message: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "network error: {message}"),
            ApiError::Timeout => write!(f, "request timed out"),
            ApiError::SessionExpired => write!(f, "session expired"),
            ApiError::Validation(errors) => write!(f, "{}", render_field_errors(errors)),
            ApiError::Server { status, message } => write!(f, "{message} (status {status})"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Server-provided text when there is any, otherwise the caller's
    /// context-specific fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Validation(errors) => render_field_errors(errors),
            ApiError::Network(_) | ApiError::Timeout | ApiError::SessionExpired => {
                fallback.to_string()
            }
        }
    }
}

/// Error envelope the backend emits: FastAPI `detail` preferred, generic
/// `message` as fallback.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    detail: Option<Detail>,
    #[serde(default)]
    message: Option<String>,
}

/// `detail` is either a plain string or a list of field-validation errors.
/// Decoded into a tagged variant here so nothing downstream inspects shapes
/// at runtime.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum Detail {
    Message(String),
    Fields(Vec<FieldError>),
}

/// One entry of a 422 validation list. `loc` mixes strings and indices.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

// ========================
// Request Methods
// ========================

pub(super) async fn get<T: DeserializeOwned>(
    path: &str,
    params: &[(&'static str, String)],
) -> Result<T, ApiError> {
    // Trailing slash keeps FastAPI from answering with a 307 redirect,
    // which would strip the auth header on cross-origin requests.
    let url = format!("{BASE_URL}{}", normalize_get_path(path));
    let mut builder = Request::get(&url);
    if !params.is_empty() {
        builder = builder.query(params.iter().map(|(key, value)| (*key, value.as_str())));
    }
    let request = authorized(builder)
        .build()
        .map_err(|err| network_failure(err.to_string()))?;
    send(request).await
}

pub(super) async fn post<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = format!("{BASE_URL}{path}");
    let request = authorized(Request::post(&url))
        .json(body)
        .map_err(|err| network_failure(err.to_string()))?;
    send(request).await
}

/// POST without a body, ignoring the response payload (job triggers).
pub(super) async fn post_empty(path: &str) -> Result<(), ApiError> {
    let url = format!("{BASE_URL}{path}");
    let request = authorized(Request::post(&url))
        .build()
        .map_err(|err| network_failure(err.to_string()))?;
    send_ignore_body(request).await
}

pub(super) async fn put<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let url = format!("{BASE_URL}{path}");
    let request = authorized(Request::put(&url))
        .json(body)
        .map_err(|err| network_failure(err.to_string()))?;
    send(request).await
}

/// DELETE; the backend answers 204 with no body.
pub(super) async fn delete(path: &str) -> Result<(), ApiError> {
    let url = format!("{BASE_URL}{path}");
    let request = authorized(Request::delete(&url))
        .build()
        .map_err(|err| network_failure(err.to_string()))?;
    send_ignore_body(request).await
}

// ========================
// Transport Core
// ========================

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn send<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    progress::start();
    let result = run(request).await;
    progress::done();
    result
}

async fn send_ignore_body(request: Request) -> Result<(), ApiError> {
    progress::start();
    let result = run_ignore_body(request).await;
    progress::done();
    result
}

async fn run<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = dispatch(request).await?;
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| network_failure(err.to_string()))
    } else {
        Err(classify_failure(response).await)
    }
}

async fn run_ignore_body(request: Request) -> Result<(), ApiError> {
    let response = dispatch(request).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(classify_failure(response).await)
    }
}

async fn dispatch(request: Request) -> Result<Response, ApiError> {
    let send = request.send();
    futures::pin_mut!(send);
    match select(send, TimeoutFuture::new(REQUEST_TIMEOUT_MS)).await {
        Either::Left((result, _)) => result.map_err(|err| network_failure(err.to_string())),
        Either::Right(((), _)) => {
            toast::error("请求超时");
            Err(ApiError::Timeout)
        }
    }
}

async fn classify_failure(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let envelope: Option<ErrorBody> = serde_json::from_str(&body).ok();

    if status == 401 {
        // The session is invalid; clear the durable slot and let the route
        // guard redirect on the next gated access. Skip the toast when the
        // user is already looking at the login view.
        session::clear_token();
        if !on_login_view() {
            toast::error("Session expired. Please login again.");
        }
        return ApiError::SessionExpired;
    }

    let message = failure_message(status, envelope.as_ref());
    toast::error(&message);
    match envelope.and_then(|envelope| envelope.detail) {
        Some(Detail::Fields(errors)) => ApiError::Validation(errors),
        _ => ApiError::Server { status, message },
    }
}

fn network_failure(text: String) -> ApiError {
    let message = if text.is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        text
    };
    toast::error(&message);
    ApiError::Network(message)
}

fn on_login_view() -> bool {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .is_some_and(|pathname| pathname.contains("/login"))
}

// ========================
// Pure Helpers
// ========================

fn normalize_get_path(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// User-facing message for a non-2xx response, in priority order: structured
/// `detail` (string or serialized field errors), then `message`, then a
/// generic fallback carrying the status.
fn failure_message(status: u16, envelope: Option<&ErrorBody>) -> String {
    if let Some(envelope) = envelope {
        if let Some(detail) = &envelope.detail {
            return match detail {
                Detail::Message(text) => text.clone(),
                Detail::Fields(errors) => render_field_errors(errors),
            };
        }
        if let Some(message) = &envelope.message {
            return message.clone();
        }
    }
    format!("{FALLBACK_MESSAGE} ({status})")
}

fn render_field_errors(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return FALLBACK_MESSAGE.to_string();
    }
    errors
        .iter()
        .map(|error| {
            // The last string segment of `loc` names the offending field.
            match error.loc.iter().rev().find_map(|segment| segment.as_str()) {
                Some(field) => format!("{field}: {}", error.msg),
                None => error.msg.clone(),
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> ErrorBody {
        serde_json::from_str(json).expect("envelope should parse")
    }

    #[test]
    fn test_normalize_get_path() {
        assert_eq!(normalize_get_path("/articles"), "/articles/");
        assert_eq!(normalize_get_path("/articles/"), "/articles/");
        assert_eq!(normalize_get_path("/articles/15"), "/articles/15/");
    }

    #[test]
    fn test_detail_string_wins() {
        let body = envelope(r#"{"detail": "Incorrect email or password", "message": "nope"}"#);
        assert_eq!(
            failure_message(400, Some(&body)),
            "Incorrect email or password"
        );
    }

    #[test]
    fn test_structured_detail_is_rendered_readably() {
        let body = envelope(
            r#"{"detail": [
                {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"},
                {"loc": ["body", "password"], "msg": "Password must contain at least one digit", "type": "value_error"}
            ]}"#,
        );
        assert_eq!(
            failure_message(422, Some(&body)),
            "email: value is not a valid email address; password: Password must contain at least one digit"
        );
    }

    #[test]
    fn test_message_fallback() {
        let body = envelope(r#"{"message": "internal error"}"#);
        assert_eq!(failure_message(500, Some(&body)), "internal error");
    }

    #[test]
    fn test_generic_fallback_carries_status() {
        assert_eq!(failure_message(502, None), "请求失败 (502)");
        let body = envelope(r#"{}"#);
        assert_eq!(failure_message(500, Some(&body)), "请求失败 (500)");
    }

    #[test]
    fn test_field_error_without_string_loc() {
        let errors = vec![FieldError {
            loc: vec![serde_json::json!(0)],
            msg: "invalid".to_string(),
            kind: String::new(),
        }];
        assert_eq!(render_field_errors(&errors), "invalid");
    }

    #[test]
    fn test_message_or_prefers_server_text() {
        let err = ApiError::Server {
            status: 400,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.message_or("Registration failed"), "Email already registered");
        assert_eq!(ApiError::Timeout.message_or("Login failed"), "Login failed");
    }
}
