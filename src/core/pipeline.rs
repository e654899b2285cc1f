//! The per-request pipeline: ingest, authorize, filter/aggregate, serialize.
//! Strictly forward, the first failing stage aborts the request.

use crate::core::{authorize, filter, ingest, serialize};
use crate::domain::model::CsvAttachment;
use crate::domain::ports::ClientRegistry;
use crate::utils::error::Result;

pub struct ReconPipeline<R: ClientRegistry> {
    registry: R,
}

impl<R: ClientRegistry> ReconPipeline<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Processes one uploaded file. The registry lookup is the only
    /// suspension point; everything else runs synchronously on the request.
    pub async fn process(&self, filename: &str, bytes: Vec<u8>) -> Result<CsvAttachment> {
        tracing::info!(filename, size = bytes.len(), "ingesting upload");
        let upload = ingest::ingest(filename, bytes)?;
        tracing::info!(
            rows = upload.table.records.len(),
            amount_column = %upload.amount_column,
            "table parsed"
        );

        let authorized = authorize::resolve(&upload.table, &self.registry).await?;
        tracing::info!(authorized = authorized.len(), "codes authorized");

        let outcome = filter::filter_and_total(&upload.table, &authorized, &upload.amount_column)?;
        tracing::info!(
            retained = outcome.retained(),
            warnings = outcome.warnings.len(),
            total = %outcome.total,
            "rows filtered"
        );

        let attachment = serialize::serialize(
            &outcome,
            &upload.table.columns,
            &upload.amount_column,
            filename,
        )?;
        tracing::info!(
            filename = %attachment.filename,
            bytes = attachment.body.len(),
            "attachment ready"
        );
        Ok(attachment)
    }
}
