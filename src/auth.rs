/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Authentication state for the EdgeLink API
//!
//! Two credential modes are supported:
//! - a long-lived API key (`elk_...`), fixed for the lifetime of the client
//! - email/password, exchanged for a short-lived session token on login
//!
//! The API key always wins when both an API key and a session token exist.
//! Only login/signup write the session token and only logout clears it.

use crate::constants::{API_KEY_PREFIX, JSON_CONTENT_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::requests::AuthMode;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT as USER_AGENT_HEADER,
};
use std::fmt;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Credential a client is configured with
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Long-lived API key
    ApiKey(String),
    /// Email and password used to obtain a session token
    Session {
        /// Account email
        email: String,
        /// Account password
        password: String,
    },
}

impl Credential {
    /// API key credential
    pub fn api_key(key: impl Into<String>) -> Self {
        Credential::ApiKey(key.into())
    }

    /// Email/password credential
    pub fn session(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credential::Session {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::ApiKey(_) => f.debug_tuple("ApiKey").field(&"<redacted>").finish(),
            Credential::Session { email, .. } => f
                .debug_struct("Session")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// Authentication state of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No token can be resolved
    Unauthenticated,
    /// Requests carry the configured API key
    ApiKey,
    /// Requests carry a session token from login or signup
    SessionToken,
}

/// Holds the credential and the session token of one client
pub struct Auth {
    credential: Option<Credential>,
    session_token: RwLock<Option<String>>,
}

impl Auth {
    /// Creates the auth state for a credential; `None` means anonymous
    pub fn new(credential: Option<Credential>) -> Self {
        if let Some(Credential::ApiKey(key)) = &credential {
            if !key.starts_with(API_KEY_PREFIX) {
                warn!("API key does not start with {API_KEY_PREFIX}");
            }
        }
        Self {
            credential,
            session_token: RwLock::new(None),
        }
    }

    /// The configured credential
    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// The configured API key, if any
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        match &self.credential {
            Some(Credential::ApiKey(key)) => Some(key),
            _ => None,
        }
    }

    /// Returns the API key if set, else the session token if set
    pub async fn resolve_token(&self) -> Option<String> {
        if let Some(key) = self.api_key() {
            return Some(key.to_string());
        }
        self.session_token.read().await.clone()
    }

    /// Returns the session token, ignoring any API key
    pub async fn session_token(&self) -> Option<String> {
        self.session_token.read().await.clone()
    }

    /// Current state, derived from the credential and the session token
    pub async fn state(&self) -> AuthState {
        if self.api_key().is_some() {
            AuthState::ApiKey
        } else if self.session_token.read().await.is_some() {
            AuthState::SessionToken
        } else {
            AuthState::Unauthenticated
        }
    }

    /// Builds request headers
    ///
    /// `Content-Type` defaults to `application/json`. `Authorization` is
    /// present only when a token resolves.
    pub async fn build_headers(&self, content_type: Option<&str>) -> Result<HeaderMap, AppError> {
        self.headers_for(AuthMode::Resolved, content_type).await
    }

    /// Builds request headers for the given token selection
    pub async fn headers_for(
        &self,
        mode: AuthMode,
        content_type: Option<&str>,
    ) -> Result<HeaderMap, AppError> {
        let token = match mode {
            AuthMode::Resolved => self.resolve_token().await,
            AuthMode::SessionOnly => Some(
                self.session_token()
                    .await
                    .ok_or(AppError::MissingSessionToken)?,
            ),
            AuthMode::None => None,
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(content_type.unwrap_or(JSON_CONTENT_TYPE))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/csv, */*"));
        headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// Stores the session token returned by login or signup
    pub async fn store_session_token(&self, token: String) {
        let mut session = self.session_token.write().await;
        if session.is_some() {
            debug!("Replacing existing session token");
        }
        *session = Some(token);
    }

    /// Clears the session token
    pub async fn clear_session(&self) {
        let mut session = self.session_token.write().await;
        if session.take().is_some() {
            info!("Session token cleared");
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("credential", &self.credential)
            .field("session_token", &"<redacted>")
            .finish()
    }
}
