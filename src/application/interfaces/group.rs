use crate::error::AppError;
use crate::model::requests::{CreateGroupRequest, UpdateGroupRequest};
use crate::model::responses::{Group, GroupDeleted, GroupDetail, GroupList};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the group service
#[async_trait]
pub trait GroupService: Send + Sync {
    /// Lists all groups of the account
    async fn list_groups(&self) -> Result<GroupList, AppError>;

    /// Creates a group
    async fn create_group(&self, request: CreateGroupRequest) -> Result<Group, AppError>;

    /// Gets a group with one page of its links
    ///
    /// # Arguments
    /// * `group_id` - Group identifier
    /// * `page` - 1-based page number
    /// * `limit` - Page size; the configured page size when `None`
    async fn get_group(
        &self,
        group_id: &str,
        page: u32,
        limit: Option<u32>,
    ) -> Result<GroupDetail, AppError>;

    /// Updates name, description or colour of a group
    async fn update_group(
        &self,
        group_id: &str,
        update: UpdateGroupRequest,
    ) -> Result<Value, AppError>;

    /// Deletes a group; its links become ungrouped
    async fn delete_group(&self, group_id: &str) -> Result<GroupDeleted, AppError>;

    /// Adds links to a group
    async fn add_links_to_group(&self, group_id: &str, slugs: &[String])
    -> Result<Value, AppError>;

    /// Removes links from a group
    async fn remove_links_from_group(
        &self,
        group_id: &str,
        slugs: &[String],
    ) -> Result<Value, AppError>;
}
