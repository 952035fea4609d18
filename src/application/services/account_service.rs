use crate::application::interfaces::account::AccountService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::endpoint;
use crate::model::requests::{AuthMode, CreateApiKeyRequest};
use crate::model::responses::{ApiKeyList, CreatedApiKey, Usage};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl AccountService for Client {
    async fn get_profile(&self) -> Result<Value, AppError> {
        debug!("Getting user profile");
        self.call(endpoint::PROFILE.request(&[])?).await
    }

    async fn get_usage(&self) -> Result<Usage, AppError> {
        let usage: Usage = self.call(endpoint::USAGE.request(&[])?).await?;

        debug!(
            "Usage obtained: {}/{} links, {}/{} clicks, {}/{} API calls",
            usage.links_used,
            usage.links_limit,
            usage.clicks_used,
            usage.clicks_limit,
            usage.api_calls_used,
            usage.api_calls_limit
        );
        Ok(usage)
    }

    async fn generate_api_key(
        &self,
        name: &str,
        expires_in_days: u32,
    ) -> Result<CreatedApiKey, AppError> {
        info!("Generating API key '{}' valid for {} days", name, expires_in_days);

        let body = CreateApiKeyRequest {
            name: name.to_string(),
            expires_in_days,
        };
        let request = endpoint::CREATE_API_KEY
            .request(&[])?
            .with_json(&body)?
            .with_auth(AuthMode::SessionOnly);

        let created: CreatedApiKey = self.call(request).await?;
        info!("API key '{}' created", created.name);
        Ok(created)
    }

    async fn list_api_keys(&self) -> Result<ApiKeyList, AppError> {
        let keys: ApiKeyList = self.call(endpoint::LIST_API_KEYS.request(&[])?).await?;
        debug!("API keys obtained: {} keys", keys.keys.len());
        Ok(keys)
    }

    async fn revoke_api_key(&self, key_id: &str) -> Result<Value, AppError> {
        info!("Revoking API key {}", key_id);
        self.call(endpoint::REVOKE_API_KEY.request(&[key_id])?)
            .await
    }
}
