//! Thin authenticated wrappers over the course platform REST API.
//!
//! Every operation takes the configured API base and an optional bearer
//! token explicitly; nothing in this layer reads ambient storage. Request
//! plumbing lives here: header assembly, status checking, and the
//! body-to-message rules shared by all endpoints. Per-resource functions
//! live in the submodules.
//!
//! Failure message priority on a non-2xx response:
//! 1. a structured `message` field when the body is JSON,
//! 2. the text body, truncated and newline-collapsed,
//! 3. a generic fallback naming the operation and status code.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

mod error;
pub mod comments;
pub mod lessons;
pub mod video;

pub use error::ApiError;

/// Attaches the `Accept` header and, when present, the bearer token.
fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Assembles the user-facing message for a failed response.
///
/// `is_json` reflects the response `Content-Type`; `body` is the raw body
/// text either way.
fn failure_message(op: &str, status: u16, is_json: bool, body: &str) -> String {
    if is_json {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                if !message.is_empty() {
                    return message.to_string();
                }
            }
        }
    }
    if !body.trim().is_empty() {
        let excerpt: String = body.chars().take(180).collect();
        return format!("Server error ({}): {}", status, excerpt.replace('\n', " "));
    }
    format!("{} failed (status {})", op, status)
}

/// Converts a non-2xx response into `ApiError::Server`, passing a
/// successful one through.
async fn check_status(resp: Response, op: &str) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let is_json = resp
        .headers()
        .get("content-type")
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Server {
        status,
        message: failure_message(op, status, is_json, &body),
    })
}

async fn send(builder: RequestBuilder, token: Option<&str>, op: &str) -> Result<Response, ApiError> {
    let resp = with_auth(builder, token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(resp, op).await
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    url: &str,
    token: Option<&str>,
    op: &str,
) -> Result<T, ApiError> {
    let resp = send(Request::get(url), token, op).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    token: Option<&str>,
    op: &str,
) -> Result<T, ApiError> {
    let request = with_auth(Request::post(url), token)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = check_status(resp, op).await?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn delete(url: &str, token: Option<&str>, op: &str) -> Result<(), ApiError> {
    send(Request::delete(url), token, op).await?;
    Ok(())
}

pub(crate) async fn get_text(url: &str, token: Option<&str>, op: &str) -> Result<String, ApiError> {
    let resp = send(Request::get(url), token, op).await?;
    resp.text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get_bytes(url: &str, token: Option<&str>, op: &str) -> Result<Vec<u8>, ApiError> {
    let resp = send(Request::get(url), token, op).await?;
    resp.binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_message_takes_priority() {
        let msg = failure_message(
            "Lesson list fetch",
            500,
            true,
            r#"{"message":"server down"}"#,
        );
        assert_eq!(msg, "server down");
    }

    #[test]
    fn text_body_is_truncated_and_newline_collapsed() {
        let body = format!("line one\nline two\n{}", "x".repeat(400));
        let msg = failure_message("Lesson list fetch", 502, false, &body);
        assert!(msg.starts_with("Server error (502): line one line two"));
        // "Server error (502): " prefix plus 180 body chars.
        assert_eq!(msg.chars().count(), 20 + 180);
        assert!(!msg.contains('\n'));
    }

    #[test]
    fn json_without_message_field_falls_back_to_body_excerpt() {
        let msg = failure_message("Comment creation", 422, true, r#"{"errors":["bad"]}"#);
        assert_eq!(msg, r#"Server error (422): {"errors":["bad"]}"#);
    }

    #[test]
    fn empty_body_yields_generic_fallback() {
        let msg = failure_message("Comment deletion", 503, false, "");
        assert_eq!(msg, "Comment deletion failed (status 503)");

        let msg = failure_message("Comment deletion", 503, false, "  \n ");
        assert_eq!(msg, "Comment deletion failed (status 503)");
    }
}
