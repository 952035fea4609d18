use crate::error::AppError;
use crate::model::requests::{ExportFormat, ShortenRequest};
use crate::model::responses::{BulkCreateOutcome, ExportData, ImportReport};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Interface for bulk import, export and bulk link operations
#[async_trait]
pub trait BulkService: Send + Sync {
    /// Imports links sent as a JSON array
    async fn import_links_json(&self, links: &[Map<String, Value>])
    -> Result<ImportReport, AppError>;

    /// Imports links from CSV text
    ///
    /// Rows the service rejects do not fail the call; they are listed in
    /// [`ImportReport::errors`].
    async fn import_links_csv(&self, csv: &str) -> Result<ImportReport, AppError>;

    /// Converts records to CSV and imports them
    ///
    /// The header is taken from the keys of the first record. An empty list
    /// is rejected without contacting the service.
    async fn import_links_from_records(
        &self,
        records: &[Map<String, Value>],
    ) -> Result<ImportReport, AppError>;

    /// Creates links one by one, recording the outcome of each
    ///
    /// A failed item never stops the loop.
    async fn bulk_create_links(
        &self,
        requests: Vec<ShortenRequest>,
    ) -> Result<Vec<BulkCreateOutcome>, AppError>;

    /// Exports all links
    async fn export_links(&self, format: ExportFormat) -> Result<ExportData, AppError>;

    /// Moves several links into a group, or out of any group
    async fn bulk_move_to_group(
        &self,
        slugs: &[String],
        group_id: Option<&str>,
    ) -> Result<Value, AppError>;
}
