use crate::application::interfaces::integration::IntegrationService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::endpoint;
use crate::model::requests::CreateWebhookRequest;
use crate::model::responses::{DomainList, Webhook, WebhookList};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, info};

#[async_trait]
impl IntegrationService for Client {
    async fn list_domains(&self) -> Result<DomainList, AppError> {
        let list: DomainList = self.call(endpoint::LIST_DOMAINS.request(&[])?).await?;
        debug!("Domains obtained: {} domains", list.domains.len());
        Ok(list)
    }

    async fn add_domain(&self, domain_name: &str) -> Result<Value, AppError> {
        if domain_name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "domain name must not be empty".to_string(),
            ));
        }
        info!("Adding domain {}", domain_name);

        let request = endpoint::ADD_DOMAIN
            .request(&[])?
            .with_json(&json!({ "domain_name": domain_name }))?;
        self.call(request).await
    }

    async fn verify_domain(&self, domain_id: &str) -> Result<Value, AppError> {
        info!("Verifying domain {}", domain_id);
        self.call(endpoint::VERIFY_DOMAIN.request(&[domain_id])?)
            .await
    }

    async fn delete_domain(&self, domain_id: &str) -> Result<Value, AppError> {
        info!("Deleting domain {}", domain_id);
        self.call(endpoint::DELETE_DOMAIN.request(&[domain_id])?)
            .await
    }

    async fn list_webhooks(&self) -> Result<WebhookList, AppError> {
        let list: WebhookList = self.call(endpoint::LIST_WEBHOOKS.request(&[])?).await?;
        debug!("Webhooks obtained: {} webhooks", list.webhooks.len());
        Ok(list)
    }

    async fn create_webhook(&self, request: CreateWebhookRequest) -> Result<Webhook, AppError> {
        let request = endpoint::CREATE_WEBHOOK
            .request(&[])?
            .with_json(&request)?;
        let webhook: Webhook = self.call(request).await?;

        info!("Webhook created: {}", webhook.webhook_id);
        Ok(webhook)
    }

    async fn delete_webhook(&self, webhook_id: &str) -> Result<Value, AppError> {
        info!("Deleting webhook {}", webhook_id);
        self.call(endpoint::DELETE_WEBHOOK.request(&[webhook_id])?)
            .await
    }
}
