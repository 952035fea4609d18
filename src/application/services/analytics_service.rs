use crate::application::interfaces::analytics::AnalyticsService;
use crate::client::Client;
use crate::constants::{DEFAULT_EXPORT_RANGE, DEFAULT_TIME_RANGE};
use crate::error::AppError;
use crate::model::endpoint;
use crate::model::requests::ExportFormat;
use crate::model::responses::ExportData;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

#[async_trait]
impl AnalyticsService for Client {
    async fn get_stats(&self, slug: &str) -> Result<Value, AppError> {
        debug!("Getting stats for {}", slug);
        self.call(endpoint::LINK_STATS.request(&[slug])?).await
    }

    async fn get_analytics(&self, slug: &str, range: Option<&str>) -> Result<Value, AppError> {
        let range = range.unwrap_or(DEFAULT_TIME_RANGE);
        debug!("Getting analytics for {} over {}", slug, range);

        let request = endpoint::LINK_ANALYTICS
            .request(&[slug])?
            .with_query("range", range);
        self.call(request).await
    }

    async fn get_group_analytics(
        &self,
        group_id: &str,
        range: Option<&str>,
    ) -> Result<Value, AppError> {
        let range = range.unwrap_or(DEFAULT_TIME_RANGE);
        debug!("Getting analytics for group {} over {}", group_id, range);

        let request = endpoint::GROUP_ANALYTICS
            .request(&[group_id])?
            .with_query("range", range);
        self.call(request).await
    }

    async fn get_overview_analytics(&self, range: Option<&str>) -> Result<Value, AppError> {
        let range = range.unwrap_or(DEFAULT_TIME_RANGE);
        debug!("Getting overview analytics over {}", range);

        let request = endpoint::OVERVIEW_ANALYTICS
            .request(&[])?
            .with_query("range", range);
        self.call(request).await
    }

    async fn export_analytics(
        &self,
        slug: &str,
        format: ExportFormat,
        range: Option<&str>,
    ) -> Result<ExportData, AppError> {
        let range = range.unwrap_or(DEFAULT_EXPORT_RANGE);
        debug!("Exporting analytics for {} over {} as {}", slug, range, format);

        let request = endpoint::EXPORT_ANALYTICS
            .request(&[slug])?
            .with_query("format", format)
            .with_query("range", range);
        let response = self.request(&request).await?;

        ExportData::from_response(response, format)
    }
}
