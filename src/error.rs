/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types for the EdgeLink client
//!
//! Failures are split into transport failures (the request never produced an
//! HTTP response) and classified HTTP failures, which always carry the status
//! code and the body returned by the service.

use crate::model::responses::ResponseBody;
use reqwest::StatusCode;
use std::fmt;

/// Application-level error code the service returns for Pro-only features
pub const PRO_REQUIRED_CODE: &str = "PRO_REQUIRED";

/// A non-successful HTTP response as returned by the service
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Body of the response, parsed as JSON when possible
    pub body: ResponseBody,
}

impl ApiFailure {
    /// Creates a new failure from a status and body
    pub fn new(status: StatusCode, body: ResponseBody) -> Self {
        Self { status, body }
    }

    /// Application-level error code (the `code` field of a JSON error body)
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.body.as_json()?.get("code")?.as_str()
    }

    /// Human readable message from the error body
    ///
    /// Looks at the `error` and `message` fields of a JSON body and falls back
    /// to the raw text for non-JSON bodies.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.body {
            ResponseBody::Json(value) => value
                .get("error")
                .or_else(|| value.get("message"))
                .and_then(|v| v.as_str())
                .map(String::from),
            ResponseBody::Text(text) if !text.is_empty() => Some(text.clone()),
            _ => None,
        }
    }

    /// Whether the service rejected the call because it needs a Pro plan
    #[must_use]
    pub fn is_pro_required(&self) -> bool {
        self.code() == Some(PRO_REQUIRED_CODE)
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => write!(f, "{}: {}", self.status, message),
            None => write!(f, "{}", self.status),
        }
    }
}

/// Main error type of the library
#[derive(Debug)]
pub enum AppError {
    /// Connection, DNS, TLS, timeout or body read failure
    Transport(reqwest::Error),
    /// 401 or 403 returned by the service
    Auth(ApiFailure),
    /// Any other 4xx returned by the service
    Client(ApiFailure),
    /// 5xx returned by the service
    Server(ApiFailure),
    /// Non-error status that is not the one the operation expects
    UnexpectedStatus(ApiFailure),
    /// The operation needs a session token obtained through login or signup
    MissingSessionToken,
    /// No email/password credential is configured
    MissingCredentials,
    /// Argument rejected before any request was sent
    InvalidInput(String),
    /// The service answered but the body could not be understood
    Decode(String),
    /// A header value could not be built
    InvalidHeader(String),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// CSV serialization failure
    Csv(csv::Error),
}

impl AppError {
    /// Builds the classified error for a failed response
    ///
    /// 401/403 map to [`AppError::Auth`], other 4xx to [`AppError::Client`],
    /// 5xx to [`AppError::Server`] and anything else to
    /// [`AppError::UnexpectedStatus`].
    pub fn from_failure(failure: ApiFailure) -> Self {
        let status = failure.status;
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            AppError::Auth(failure)
        } else if status.is_client_error() {
            AppError::Client(failure)
        } else if status.is_server_error() {
            AppError::Server(failure)
        } else {
            AppError::UnexpectedStatus(failure)
        }
    }

    /// The failed response, when the error came from the service
    #[must_use]
    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            AppError::Auth(f)
            | AppError::Client(f)
            | AppError::Server(f)
            | AppError::UnexpectedStatus(f) => Some(f),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Transport(e) => e.status(),
            _ => self.failure().map(|f| f.status),
        }
    }

    /// Whether the service answered 404
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Client(f) if f.status == StatusCode::NOT_FOUND)
    }

    /// Whether the service rejected the call with a `PRO_REQUIRED` code
    #[must_use]
    pub fn is_pro_required(&self) -> bool {
        self.failure().is_some_and(ApiFailure::is_pro_required)
    }

    /// Whether the request never reached the service
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport(e) => write!(f, "transport error: {e}"),
            AppError::Auth(failure) => write!(f, "authentication failed: {failure}"),
            AppError::Client(failure) => write!(f, "request rejected: {failure}"),
            AppError::Server(failure) => write!(f, "server error: {failure}"),
            AppError::UnexpectedStatus(failure) => write!(f, "unexpected status: {failure}"),
            AppError::MissingSessionToken => write!(f, "session token required, login first"),
            AppError::MissingCredentials => write!(f, "no email/password credentials configured"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Decode(msg) => write!(f, "could not decode response: {msg}"),
            AppError::InvalidHeader(msg) => write!(f, "invalid header: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Csv(e) => write!(f, "csv error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Transport(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Csv(err)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidHeader(err.to_string())
    }
}
