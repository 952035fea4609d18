/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /auth/login`
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /auth/signup`
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
    /// Plan to subscribe to, `free` by default
    pub plan: String,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("plan", &self.plan)
            .finish()
    }
}

/// Account owner as returned by the auth endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    /// Account email
    #[serde(default)]
    pub email: String,
    /// Subscribed plan
    #[serde(default)]
    pub plan: String,
    /// User identifier
    #[serde(default)]
    pub user_id: String,
    /// Any other field returned by the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Answer of login and signup
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    /// Short-lived session token
    pub token: String,
    /// Authenticated user
    #[serde(default)]
    pub user: User,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}
