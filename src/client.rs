/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client for the EdgeLink API
//!
//! This module provides the single entry point every operation goes through:
//! - Credential handling (API key or email/password session)
//! - Header construction with the resolved bearer token
//! - One HTTP attempt per call with classified failures
//!
//! # Example
//! ```ignore
//! use edgelink_client::prelude::*;
//!
//! let config = Config::with_base_url("https://go.shortedbro.xyz", Credentials::api_key("elk_..."));
//! let client = Client::new(config).await?;
//!
//! let created = client.shorten(ShortenRequest::new("https://example.com")).await?;
//! let link = client.get_link(&created.slug).await?;
//! ```

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::auth::{Auth, AuthState, Credential};
use crate::constants::{DEFAULT_PLAN, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::{AuthResponse, LoginRequest, SignupRequest};
use crate::model::endpoint;
use crate::model::http::make_http_request;
use crate::model::requests::{ApiRequest, AuthMode, RequestBody};
use crate::model::responses::ApiResponse;
use reqwest::header::HeaderMap;
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the EdgeLink API
///
/// Cheap to share behind an `Arc`; the session token is the only mutable
/// state and is guarded by a lock.
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
    rate_limiter: Option<RateLimiter>,
}

impl Client {
    /// Creates a new client, logging in when configured with email/password
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and transport settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Ready to use client
    /// * `Err(AppError)` - If the HTTP client cannot be built or login fails
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;

        if let Some(Credential::Session { email, password }) = client.auth.credential().cloned() {
            client.login(&email, &password).await?;
        }
        Ok(client)
    }

    /// Creates a new client without any network activity
    ///
    /// A client configured with email/password stays unauthenticated until
    /// [`Client::login`] or [`Client::relogin`] is called.
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if config.rest_api.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.rest_api.timeout));
        }
        let http_client = builder.build()?;

        let rate_limiter = config
            .rate_limiter
            .as_ref()
            .map(RateLimiter::new)
            .transpose()?;

        let auth = Arc::new(Auth::new(config.credentials.credential()));

        Ok(Self {
            auth,
            http_client,
            config: Arc::new(config),
            rate_limiter,
        })
    }

    /// Configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Authentication state holder
    #[must_use]
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Current authentication state
    pub async fn auth_state(&self) -> AuthState {
        self.auth.state().await
    }

    /// Returns the API key if set, else the session token if set
    pub async fn resolve_token(&self) -> Option<String> {
        self.auth.resolve_token().await
    }

    /// Builds the headers a request would carry
    pub async fn build_headers(&self, content_type: Option<&str>) -> Result<HeaderMap, AppError> {
        self.auth.build_headers(content_type).await
    }

    /// Logs in with email and password and stores the session token
    ///
    /// The request is sent without an `Authorization` header. The stored
    /// token is left untouched when login fails.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = endpoint::LOGIN
            .request(&[])?
            .with_json(&body)?
            .with_auth(AuthMode::None);

        let response: AuthResponse = self.request(&request).await?.json()?;
        self.auth.store_session_token(response.token.clone()).await;

        info!(
            "Logged in as {} (plan: {})",
            response.user.email, response.user.plan
        );
        Ok(response)
    }

    /// Logs in again with the configured email/password credential
    pub async fn relogin(&self) -> Result<AuthResponse, AppError> {
        match self.auth.credential() {
            Some(Credential::Session { email, password }) => {
                let (email, password) = (email.clone(), password.clone());
                self.login(&email, &password).await
            }
            _ => Err(AppError::MissingCredentials),
        }
    }

    /// Creates an account and stores the returned session token
    ///
    /// `plan` defaults to `free`.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        plan: Option<&str>,
    ) -> Result<AuthResponse, AppError> {
        let body = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            plan: plan.unwrap_or(DEFAULT_PLAN).to_string(),
        };
        let request = endpoint::SIGNUP
            .request(&[])?
            .with_json(&body)?
            .with_auth(AuthMode::None);

        let response: AuthResponse = self.request(&request).await?.json()?;
        self.auth.store_session_token(response.token.clone()).await;

        info!("Account created, user id: {}", response.user.user_id);
        Ok(response)
    }

    /// Forgets the session token; an API key stays active
    pub async fn logout(&self) {
        if self.auth.api_key().is_some() {
            warn!("Logging out of an API key client only clears the session token");
        }
        self.auth.clear_session().await;
    }

    /// Issues one call to the service
    ///
    /// This is the only place where headers are resolved and responses are
    /// classified. The credential is never modified here.
    pub async fn request(&self, request: &ApiRequest) -> Result<ApiResponse, AppError> {
        let content_type = request.body.as_ref().and_then(RequestBody::content_type);
        let headers = self.auth.headers_for(request.auth, content_type).await?;

        make_http_request(
            &self.http_client,
            self.rate_limiter.as_ref(),
            self.config.base_url(),
            request,
            headers,
        )
        .await
    }

    /// Issues a call and deserializes the JSON answer
    pub async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, AppError> {
        let response = self.request(&request).await?;
        debug!("{} {} -> {}", request.method, request.path, response.status);
        response.json()
    }

    /// Makes a GET request, any 2xx is success
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.call(ApiRequest::new(Method::GET, path)).await
    }

    /// Makes a POST request with a JSON body, any 2xx is success
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.call(ApiRequest::new(Method::POST, path).with_json(body)?)
            .await
    }

    /// Makes a PUT request with a JSON body, any 2xx is success
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.call(ApiRequest::new(Method::PUT, path).with_json(body)?)
            .await
    }

    /// Makes a DELETE request, any 2xx is success
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.call(ApiRequest::new(Method::DELETE, path)).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url())
            .field("auth", &self.auth)
            .field("rate_limited", &self.rate_limiter.is_some())
            .finish()
    }
}
