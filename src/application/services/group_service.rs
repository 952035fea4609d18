use crate::application::interfaces::group::GroupService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::endpoint;
use crate::model::requests::{CreateGroupRequest, UpdateGroupRequest};
use crate::model::responses::{Group, GroupDeleted, GroupDetail, GroupEnvelope, GroupList};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{debug, info};

fn require_slugs(operation: &str, slugs: &[String]) -> Result<(), AppError> {
    if slugs.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "{operation} needs at least one slug"
        )));
    }
    Ok(())
}

#[async_trait]
impl GroupService for Client {
    async fn list_groups(&self) -> Result<GroupList, AppError> {
        let list: GroupList = self.call(endpoint::LIST_GROUPS.request(&[])?).await?;

        debug!(
            "Groups obtained: {} groups ({} ungrouped links)",
            list.groups.len(),
            list.ungrouped_count
        );
        Ok(list)
    }

    async fn create_group(&self, request: CreateGroupRequest) -> Result<Group, AppError> {
        let request = endpoint::CREATE_GROUP.request(&[])?.with_json(&request)?;
        let envelope: GroupEnvelope = self.call(request).await?;

        info!(
            "Group created: {} ({})",
            envelope.group.name, envelope.group.group_id
        );
        Ok(envelope.group)
    }

    async fn get_group(
        &self,
        group_id: &str,
        page: u32,
        limit: Option<u32>,
    ) -> Result<GroupDetail, AppError> {
        let request = endpoint::GET_GROUP
            .request(&[group_id])?
            .with_query("page", page)
            .with_query("limit", limit.unwrap_or(self.config().page_size));
        let detail: GroupDetail = self.call(request).await?;

        debug!("Group {}: {} links", detail.group.name, detail.total);
        Ok(detail)
    }

    async fn update_group(
        &self,
        group_id: &str,
        update: UpdateGroupRequest,
    ) -> Result<Value, AppError> {
        info!("Updating group {}", group_id);

        let request = endpoint::UPDATE_GROUP
            .request(&[group_id])?
            .with_json(&update)?;
        self.call(request).await
    }

    async fn delete_group(&self, group_id: &str) -> Result<GroupDeleted, AppError> {
        let deleted: GroupDeleted = self
            .call(endpoint::DELETE_GROUP.request(&[group_id])?)
            .await?;

        info!(
            "Group {} deleted ({} links moved to ungrouped)",
            group_id, deleted.links_moved
        );
        Ok(deleted)
    }

    async fn add_links_to_group(
        &self,
        group_id: &str,
        slugs: &[String],
    ) -> Result<Value, AppError> {
        require_slugs("add_links_to_group", slugs)?;
        info!("Adding {} links to group {}", slugs.len(), group_id);

        let request = endpoint::ADD_GROUP_LINKS
            .request(&[group_id])?
            .with_json(&json!({ "slugs": slugs }))?;
        self.call(request).await
    }

    async fn remove_links_from_group(
        &self,
        group_id: &str,
        slugs: &[String],
    ) -> Result<Value, AppError> {
        require_slugs("remove_links_from_group", slugs)?;
        info!("Removing {} links from group {}", slugs.len(), group_id);

        let request = endpoint::REMOVE_GROUP_LINKS
            .request(&[group_id])?
            .with_json(&json!({ "slugs": slugs }))?;
        self.call(request).await
    }
}
