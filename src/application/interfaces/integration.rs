use crate::error::AppError;
use crate::model::requests::CreateWebhookRequest;
use crate::model::responses::{DomainList, Webhook, WebhookList};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for custom domains and webhooks
#[async_trait]
pub trait IntegrationService: Send + Sync {
    /// Lists custom domains
    async fn list_domains(&self) -> Result<DomainList, AppError>;

    /// Registers a custom domain
    async fn add_domain(&self, domain_name: &str) -> Result<Value, AppError>;

    /// Asks the service to check DNS ownership of a domain
    async fn verify_domain(&self, domain_id: &str) -> Result<Value, AppError>;

    /// Removes a custom domain
    async fn delete_domain(&self, domain_id: &str) -> Result<Value, AppError>;

    /// Lists webhooks
    async fn list_webhooks(&self) -> Result<WebhookList, AppError>;

    /// Creates a webhook
    async fn create_webhook(&self, request: CreateWebhookRequest) -> Result<Webhook, AppError>;

    /// Deletes a webhook
    async fn delete_webhook(&self, webhook_id: &str) -> Result<Value, AppError>;
}
