use crate::application::interfaces::link::LinkService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::endpoint;
use crate::model::requests::{ListLinksQuery, QrFormat, ShortenRequest, UpdateLinkRequest};
use crate::model::responses::{Link, LinksPage, ShortenResponse};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, info};

#[async_trait]
impl LinkService for Client {
    async fn shorten(&self, request: ShortenRequest) -> Result<ShortenResponse, AppError> {
        debug!("Shortening {}", request.url);

        let request = endpoint::SHORTEN.request(&[])?.with_json(&request)?;
        let created: ShortenResponse = self.call(request).await?;

        info!("Created: {}", created.short_url);
        Ok(created)
    }

    async fn list_links(&self, query: ListLinksQuery) -> Result<LinksPage, AppError> {
        let request = endpoint::LIST_LINKS
            .request(&[])?
            .with_query("page", query.page)
            .with_query("limit", query.limit.unwrap_or(self.config().page_size))
            .with_optional_query("search", query.search.as_deref());

        let page: LinksPage = self.call(request).await?;
        debug!(
            "Links obtained: {} on page {} of {} ({} total)",
            page.links.len(),
            query.page,
            page.total_pages,
            page.total
        );
        Ok(page)
    }

    async fn get_link(&self, slug: &str) -> Result<Link, AppError> {
        debug!("Getting link {}", slug);
        self.call(endpoint::GET_LINK.request(&[slug])?).await
    }

    async fn update_link(&self, slug: &str, update: UpdateLinkRequest) -> Result<Value, AppError> {
        if update.is_empty() {
            return Err(AppError::InvalidInput(
                "update_link needs a destination or a new slug".to_string(),
            ));
        }
        info!("Updating link {}", slug);

        let request = endpoint::UPDATE_LINK.request(&[slug])?.with_json(&update)?;
        self.call(request).await
    }

    async fn delete_link(&self, slug: &str) -> Result<Value, AppError> {
        info!("Deleting link {}", slug);
        self.call(endpoint::DELETE_LINK.request(&[slug])?).await
    }

    async fn move_link_to_group(
        &self,
        slug: &str,
        group_id: Option<&str>,
    ) -> Result<Value, AppError> {
        match group_id {
            Some(group_id) => info!("Moving link {} to group {}", slug, group_id),
            None => info!("Removing link {} from its group", slug),
        }

        let request = endpoint::MOVE_LINK
            .request(&[slug])?
            .with_json(&json!({ "group_id": group_id }))?;
        self.call(request).await
    }

    async fn generate_qr(&self, slug: &str, format: QrFormat) -> Result<Vec<u8>, AppError> {
        let request = endpoint::LINK_QR
            .request(&[slug])?
            .with_query("format", format);

        let image = self.request(&request).await?.into_bytes();
        debug!("QR code for {} obtained: {} bytes of {}", slug, image.len(), format);
        Ok(image)
    }
}
