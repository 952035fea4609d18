use crate::application::interfaces::bulk::BulkService;
use crate::application::interfaces::link::LinkService;
use crate::client::Client;
use crate::constants::CSV_CONTENT_TYPE;
use crate::error::AppError;
use crate::model::endpoint;
use crate::model::requests::{ExportFormat, ShortenRequest};
use crate::model::responses::{BulkCreateOutcome, ExportData, ImportReport};
use crate::utils::records::records_to_csv;
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use tracing::{debug, info, warn};

const PROGRESS_EVERY: usize = 10;

fn log_report(report: &ImportReport) {
    info!(
        "Import complete: {}/{} successful",
        report.successful, report.total
    );
    for row in &report.errors {
        warn!("Row {} rejected: {}", row.row, row.error);
    }
}

#[async_trait]
impl BulkService for Client {
    async fn import_links_json(
        &self,
        links: &[Map<String, Value>],
    ) -> Result<ImportReport, AppError> {
        info!("Importing {} links", links.len());

        let request = endpoint::IMPORT_LINKS
            .request(&[])?
            .with_json(&json!({ "links": links }))?;
        let report: ImportReport = self.call(request).await?;

        log_report(&report);
        Ok(report)
    }

    async fn import_links_csv(&self, csv: &str) -> Result<ImportReport, AppError> {
        debug!("Importing CSV of {} bytes", csv.len());

        let request = endpoint::IMPORT_LINKS
            .request(&[])?
            .with_raw(csv, CSV_CONTENT_TYPE);
        let report: ImportReport = self.call(request).await?;

        log_report(&report);
        Ok(report)
    }

    async fn import_links_from_records(
        &self,
        records: &[Map<String, Value>],
    ) -> Result<ImportReport, AppError> {
        let csv = records_to_csv(records)?;
        self.import_links_csv(&csv).await
    }

    async fn bulk_create_links(
        &self,
        requests: Vec<ShortenRequest>,
    ) -> Result<Vec<BulkCreateOutcome>, AppError> {
        let total = requests.len();
        info!("Creating {} links", total);

        let mut outcomes = Vec::with_capacity(total);
        for (index, request) in requests.into_iter().enumerate() {
            let destination = request.url.clone();
            let outcome = match self.shorten(request).await {
                Ok(created) => BulkCreateOutcome {
                    destination,
                    slug: Some(created.slug),
                    short_url: Some(created.short_url),
                    error: None,
                },
                Err(e) => {
                    warn!("Failed to create link for {}: {}", destination, e);
                    BulkCreateOutcome {
                        destination,
                        slug: None,
                        short_url: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            outcomes.push(outcome);

            let done = index + 1;
            if done % PROGRESS_EVERY == 0 || done == total {
                debug!("Progress: {}/{}", done, total);
            }
        }

        let successful = outcomes.iter().filter(|o| o.is_success()).count();
        info!(
            "Bulk create complete: {} successful, {} failed",
            successful,
            total - successful
        );
        Ok(outcomes)
    }

    async fn export_links(&self, format: ExportFormat) -> Result<ExportData, AppError> {
        info!("Exporting links as {}", format);

        let request = endpoint::EXPORT_LINKS
            .request(&[])?
            .with_query("format", format);
        let response = self.request(&request).await?;

        ExportData::from_response(response, format)
    }

    async fn bulk_move_to_group(
        &self,
        slugs: &[String],
        group_id: Option<&str>,
    ) -> Result<Value, AppError> {
        if slugs.is_empty() {
            return Err(AppError::InvalidInput(
                "bulk_move_to_group needs at least one slug".to_string(),
            ));
        }
        info!("Moving {} links to group {:?}", slugs.len(), group_id);

        let request = endpoint::BULK_GROUP
            .request(&[])?
            .with_json(&json!({ "slugs": slugs, "group_id": group_id }))?;
        self.call(request).await
    }
}
