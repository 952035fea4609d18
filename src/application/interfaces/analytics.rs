use crate::error::AppError;
use crate::model::requests::ExportFormat;
use crate::model::responses::ExportData;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the analytics service
///
/// Ranges are passed through as the service expects them (`7d`, `30d`,
/// `90d`, ...). `None` selects the default range of each operation.
#[async_trait]
pub trait AnalyticsService: Send + Sync {
    /// Gets the click summary of a link
    async fn get_stats(&self, slug: &str) -> Result<Value, AppError>;

    /// Gets detailed analytics of a link, `7d` by default
    async fn get_analytics(&self, slug: &str, range: Option<&str>) -> Result<Value, AppError>;

    /// Gets aggregated analytics of a group, `7d` by default
    async fn get_group_analytics(
        &self,
        group_id: &str,
        range: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Gets analytics across the whole account, `7d` by default
    async fn get_overview_analytics(&self, range: Option<&str>) -> Result<Value, AppError>;

    /// Exports analytics of a link, `30d` by default
    async fn export_analytics(
        &self,
        slug: &str,
        format: ExportFormat,
        range: Option<&str>,
    ) -> Result<ExportData, AppError>;
}
