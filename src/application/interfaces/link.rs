use crate::error::AppError;
use crate::model::requests::{ListLinksQuery, QrFormat, ShortenRequest, UpdateLinkRequest};
use crate::model::responses::{Link, LinksPage, ShortenResponse};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the link service
#[async_trait]
pub trait LinkService: Send + Sync {
    /// Creates a short link
    ///
    /// Works anonymously; the service decides whether anonymous links are
    /// accepted.
    async fn shorten(&self, request: ShortenRequest) -> Result<ShortenResponse, AppError>;

    /// Lists links, one page at a time
    async fn list_links(&self, query: ListLinksQuery) -> Result<LinksPage, AppError>;

    /// Gets a single link
    async fn get_link(&self, slug: &str) -> Result<Link, AppError>;

    /// Changes the destination and/or slug of a link
    ///
    /// # Arguments
    /// * `slug` - Current slug
    /// * `update` - Fields to change; at least one must be set
    async fn update_link(&self, slug: &str, update: UpdateLinkRequest) -> Result<Value, AppError>;

    /// Deletes a link
    async fn delete_link(&self, slug: &str) -> Result<Value, AppError>;

    /// Moves a link into a group, or out of any group when `group_id` is `None`
    async fn move_link_to_group(&self, slug: &str, group_id: Option<&str>)
    -> Result<Value, AppError>;

    /// Downloads the QR code image of a link
    async fn generate_qr(&self, slug: &str, format: QrFormat) -> Result<Vec<u8>, AppError>;
}
