//! Ingestion and schema validation: bytes in, RawTable out.

use crate::domain::model::{Record, RawTable, AMOUNT_COLUMNS, CODE_COLUMN, DELIMITER};
use crate::utils::error::{ReconError, Result};
use std::collections::HashMap;
use std::path::Path;

/// The parsed upload plus the amount column the header resolved to.
#[derive(Debug, Clone)]
pub struct IngestedUpload {
    pub table: RawTable,
    pub amount_column: String,
}

/// Decodes and parses an uploaded file into a [`RawTable`].
///
/// Rejects non-`.csv` filenames and non-UTF-8 content, then requires the
/// client-code column and one of the accepted amount spellings. An empty
/// file (header only, or no content at all) yields an empty table; later
/// stages handle zero rows.
pub fn ingest(filename: &str, bytes: Vec<u8>) -> Result<IngestedUpload> {
    let is_csv = Path::new(filename)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(ReconError::InvalidFormat {
            filename: filename.to_string(),
        });
    }

    let text = String::from_utf8(bytes)?;
    if text.trim().is_empty() {
        tracing::debug!(filename, "upload is empty");
        return Ok(IngestedUpload {
            table: RawTable::default(),
            amount_column: AMOUNT_COLUMNS[0].to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    if !columns.iter().any(|c| c == CODE_COLUMN) {
        return Err(ReconError::Schema {
            column: CODE_COLUMN.to_string(),
        });
    }
    let amount_column = AMOUNT_COLUMNS
        .iter()
        .find(|accepted| columns.iter().any(|c| c == *accepted))
        .ok_or_else(|| ReconError::Schema {
            column: AMOUNT_COLUMNS[0].to_string(),
        })?
        .to_string();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        // Short rows pad with empty strings, fields beyond the header drop:
        // every record carries exactly the header's key set.
        let mut fields = HashMap::with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            fields.insert(column.clone(), row.get(i).unwrap_or("").to_string());
        }
        records.push(Record { fields });
    }

    tracing::debug!(
        filename,
        rows = records.len(),
        amount_column = %amount_column,
        "upload parsed"
    );

    Ok(IngestedUpload {
        table: RawTable { columns, records },
        amount_column,
    })
}
