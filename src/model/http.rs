/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! HTTP transport shared by every EdgeLink operation
//!
//! One attempt per call: the request is sent, the body is decoded according
//! to its content type and the outcome is classified. Nothing is retried.

use crate::application::rate_limiter::RateLimiter;
use crate::error::{ApiFailure, AppError};
use crate::model::requests::{ApiRequest, RequestBody};
use crate::model::responses::{ApiResponse, ResponseBody};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, error, warn};

/// Sends `request` to `base_url` and classifies the answer
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Optional throttle awaited before sending
/// * `base_url` - Service base URL without trailing slash
/// * `request` - Method, path, query and body of the call
/// * `headers` - Headers built by the auth layer
///
/// # Returns
///
/// * `Ok(ApiResponse)` - The status matched the expected one (any 2xx when
///   the request has no expectation)
/// * `Err(AppError::Transport)` - The service was never reached
/// * `Err(AppError::Auth | Client | Server | UnexpectedStatus)` - The service
///   answered with another status; the body is kept for inspection
pub async fn make_http_request(
    client: &Client,
    rate_limiter: Option<&RateLimiter>,
    base_url: &str,
    request: &ApiRequest,
    headers: HeaderMap,
) -> Result<ApiResponse, AppError> {
    if let Some(limiter) = rate_limiter {
        limiter.wait().await;
    }

    let url = build_url(base_url, &request.path);
    debug!("{} {}", request.method, url);

    let mut builder = client.request(request.method.clone(), &url).headers(headers);
    if !request.query.is_empty() {
        builder = builder.query(&request.query);
    }
    match &request.body {
        Some(RequestBody::Json(value)) => builder = builder.json(value),
        Some(RequestBody::Raw { content, .. }) => builder = builder.body(content.clone()),
        None => {}
    }

    let response = builder.send().await.map_err(|e| {
        error!("{} {} failed before reaching the service: {}", request.method, url, e);
        AppError::Transport(e)
    })?;

    let status = response.status();
    let body = read_body(response).await?;
    debug!("Response status: {}", status);

    if request.is_success(status) {
        return Ok(ApiResponse { status, body });
    }

    let failure = ApiFailure::new(status, body);
    if status.is_success() {
        warn!(
            "{} {} answered {} instead of {:?}",
            request.method, url, status, request.expected_status
        );
    } else if status.is_server_error() {
        error!("{} {} failed: {}", request.method, url, failure);
    } else {
        warn!("{} {} rejected: {}", request.method, url, failure);
    }
    Err(AppError::from_failure(failure))
}

/// Joins the base URL and a path, tolerating missing or doubled slashes
///
/// Absolute URLs are returned untouched.
#[must_use]
pub fn build_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Reads and decodes a response body
///
/// JSON content types are parsed (falling back to text when the payload is
/// not valid JSON), `text/*` is kept as text, anything else as bytes.
pub async fn read_body(response: Response) -> Result<ResponseBody, AppError> {
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase())
        .unwrap_or_default();

    let bytes = response.bytes().await?;
    Ok(decode_body(status, &content_type, bytes.to_vec()))
}

fn decode_body(status: StatusCode, content_type: &str, bytes: Vec<u8>) -> ResponseBody {
    if bytes.is_empty() || status == StatusCode::NO_CONTENT {
        return ResponseBody::Empty;
    }
    let is_json = content_type.contains("json");
    let is_text = content_type.starts_with("text/") || content_type.is_empty();

    if is_json || is_text {
        if is_json {
            if let Ok(value) = serde_json::from_slice(&bytes) {
                return ResponseBody::Json(value);
            }
            warn!("Response declared JSON but could not be parsed");
        }
        return match String::from_utf8(bytes) {
            Ok(text) => ResponseBody::Text(text),
            Err(e) => ResponseBody::Bytes(e.into_bytes()),
        };
    }
    ResponseBody::Bytes(bytes)
}
