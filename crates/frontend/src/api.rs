//! HTTP plumbing for the kkomason backend.
//!
//! All traffic funnels through [`ApiClient`]: one base address, JSON
//! bodies, cookies included, a bearer header whenever the session
//! holds a token, and a deadline so no call can hang forever.

use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use web_sys::{AbortController, RequestCredentials};

use crate::config::ApiConfig;
use crate::session::SessionReader;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Transport-level failure. Services translate these into the single
/// message a view renders.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {ms}ms")]
    Timeout { ms: u32 },

    #[error("HTTP {status}")]
    Status { status: u16, message: Option<String> },

    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Thin typed client over `fetch`.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    session: SessionReader,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SessionReader) -> Self {
        Self { config, session }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET `path` and decode a JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let controller = new_abort_controller()?;
        let request = self
            .prepare(Request::get(&self.url(path)), &controller)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = self.dispatch(request, controller).await?;
        decode(response).await
    }

    /// POST `body` as JSON to `path` and decode a JSON response.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let controller = new_abort_controller()?;
        let request = self
            .prepare(Request::post(&self.url(path)), &controller)
            .json(body)
            .map_err(|err| ApiError::Network(format!("failed to encode request body: {err}")))?;
        let response = self.dispatch(request, controller).await?;
        decode(response).await
    }

    /// POST with no body, ignoring any response payload.
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        let controller = new_abort_controller()?;
        let request = self
            .prepare(Request::post(&self.url(path)), &controller)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        self.dispatch(request, controller).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// Every request carries cookies, a JSON content type and, when a
    /// non-empty token is present, the bearer header.
    fn prepare(&self, builder: RequestBuilder, controller: &AbortController) -> RequestBuilder {
        let builder = builder
            .credentials(RequestCredentials::Include)
            .header("Content-Type", "application/json")
            .abort_signal(Some(&controller.signal()));
        match self.session.token() {
            Some(token) if !token.is_empty() => {
                builder.header("Authorization", &format!("Bearer {token}"))
            }
            _ => builder,
        }
    }

    /// Races the request against the configured deadline; on timeout
    /// the request is aborted so the browser drops the socket.
    async fn dispatch(&self, request: Request, controller: AbortController) -> Result<Response> {
        let ms = self.config.timeout_ms;
        let send = request.send();
        let deadline = TimeoutFuture::new(ms);
        pin_mut!(send);
        pin_mut!(deadline);

        let response = match select(send, deadline).await {
            Either::Left((sent, _)) => sent.map_err(|err| ApiError::Network(err.to_string()))?,
            Either::Right(((), _)) => {
                controller.abort();
                return Err(ApiError::Timeout { ms });
            }
        };

        if response.ok() {
            Ok(response)
        } else {
            Err(status_error(response).await)
        }
    }
}

fn new_abort_controller() -> Result<AbortController> {
    AbortController::new()
        .map_err(|_| ApiError::Network("failed to create abort controller".to_string()))
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Status {
        status,
        message: extract_message(&body),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Pulls a human-readable message out of an error body: the `message`
/// field of a JSON object, a bare JSON string, plain text as-is.
fn extract_message(body: &str) -> Option<String> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => (!text.trim().is_empty()).then_some(text),
        Ok(value) => value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        Err(_) => {
            let text = body.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_message_prefers_the_json_message_field() {
        let body = r#"{"message":"아이디 또는 비밀번호가 올바르지 않습니다.","status":401}"#;
        assert_eq!(
            extract_message(body).as_deref(),
            Some("아이디 또는 비밀번호가 올바르지 않습니다.")
        );
    }

    #[test]
    fn extract_message_accepts_plain_text_bodies() {
        assert_eq!(
            extract_message("잘못된 요청입니다.").as_deref(),
            Some("잘못된 요청입니다.")
        );
        assert_eq!(
            extract_message(r#""권한이 없습니다.""#).as_deref(),
            Some("권한이 없습니다.")
        );
    }

    #[test]
    fn extract_message_rejects_unusable_bodies() {
        assert_eq!(extract_message(""), None);
        assert_eq!(extract_message("  \n"), None);
        assert_eq!(extract_message(r#"{"error":"denied"}"#), None);
        assert_eq!(extract_message(r#"{"message":42}"#), None);
    }

    #[test]
    fn errors_render_compact_descriptions() {
        assert_eq!(
            ApiError::Timeout { ms: 10_000 }.to_string(),
            "request timed out after 10000ms"
        );
        assert_eq!(
            ApiError::Status {
                status: 500,
                message: None
            }
            .to_string(),
            "HTTP 500"
        );
    }
}
