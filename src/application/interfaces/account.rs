use crate::error::AppError;
use crate::model::responses::{ApiKeyList, CreatedApiKey, Usage};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the profile of the authenticated user
    async fn get_profile(&self) -> Result<Value, AppError>;

    /// Gets usage counters and plan limits
    async fn get_usage(&self) -> Result<Usage, AppError>;

    /// Generates a new API key
    ///
    /// Requires a session token obtained through login or signup; an API key
    /// cannot be used to mint another one.
    ///
    /// # Arguments
    /// * `name` - Name shown in the key list
    /// * `expires_in_days` - Lifetime of the key
    ///
    /// # Returns
    /// * The created key; the full secret is only returned this once
    async fn generate_api_key(
        &self,
        name: &str,
        expires_in_days: u32,
    ) -> Result<CreatedApiKey, AppError>;

    /// Lists the API keys of the account
    async fn list_api_keys(&self) -> Result<ApiKeyList, AppError>;

    /// Revokes an API key
    async fn revoke_api_key(&self, key_id: &str) -> Result<Value, AppError>;
}
