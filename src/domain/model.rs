use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;

/// Column holding the client code of each row.
pub const CODE_COLUMN: &str = "Codice committente";

/// Accepted spellings of the amount column, checked in priority order.
/// First match wins.
pub const AMOUNT_COLUMNS: [&str; 3] = ["Importo totale", "Importo", "Totale documento"];

/// Label placed in the code column of the synthetic total row. Never a
/// valid client code, so re-running the pipeline on its own output cannot
/// double-count the total.
pub const TOTAL_LABEL: &str = "TOTALE";

/// Field delimiter of both input and output tables.
pub const DELIMITER: u8 = b';';

/// Prefix prepended to the original filename for the download attachment.
pub const FILTERED_PREFIX: &str = "filtered_";

pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// One parsed row: raw text values keyed by column name. The key set always
/// equals the table header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub fields: HashMap<String, String>,
}

impl Record {
    /// Raw value of `column`, empty string if the column is unknown.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }
}

/// The parsed table: ordered header plus ordered rows. Header order is
/// preserved from the uploaded file through to the serialized output.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl RawTable {
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Normalized client code: trimmed and upper-cased. Empty values and the
/// total-row sentinel never become codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientCode(String);

impl ClientCode {
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() || normalized == TOTAL_LABEL {
            return None;
        }
        Some(ClientCode(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A retained row whose amount field did not parse. Non-fatal: the row stays
/// in the output, its amount contributes zero to the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowParseWarning {
    /// 1-based data row number in the uploaded file.
    pub row: usize,
    /// The offending raw amount text.
    pub value: String,
}

/// Result of the filter/aggregate stage. Built once per request, consumed by
/// the serializer, never persisted.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Retained rows, original relative order.
    pub records: Vec<Record>,
    /// Sum of the successfully parsed amounts of the retained rows.
    pub total: Decimal,
    pub warnings: Vec<RowParseWarning>,
}

impl FilterOutcome {
    pub fn retained(&self) -> usize {
        self.records.len()
    }
}

/// The serializer's product, ready for transport as a file attachment. The
/// HTTP collaborator is told nothing beyond what is carried here.
#[derive(Debug, Clone)]
pub struct CsvAttachment {
    pub filename: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}
