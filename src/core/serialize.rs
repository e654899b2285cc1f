//! Output serialization: filtered rows plus the synthetic total row, same
//! delimiter and column order as the input.

use crate::domain::amount::format_amount;
use crate::domain::model::{
    CsvAttachment, FilterOutcome, CODE_COLUMN, CSV_CONTENT_TYPE, DELIMITER, FILTERED_PREFIX,
    TOTAL_LABEL,
};
use crate::utils::error::{ReconError, Result};

/// Re-emits the retained rows in the original column order, then appends one
/// total row: the sentinel label in the code column, the formatted total in
/// the amount column, every other column empty.
pub fn serialize(
    outcome: &FilterOutcome,
    columns: &[String],
    amount_column: &str,
    original_filename: &str,
) -> Result<CsvAttachment> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(Vec::new());

    writer.write_record(columns)?;
    for record in &outcome.records {
        writer.write_record(columns.iter().map(|column| record.get(column)))?;
    }

    let formatted_total = format_amount(outcome.total);
    writer.write_record(columns.iter().map(|column| {
        if column == CODE_COLUMN {
            TOTAL_LABEL
        } else if column == amount_column {
            formatted_total.as_str()
        } else {
            ""
        }
    }))?;

    let body = writer.into_inner().map_err(|e| ReconError::Internal {
        message: format!("flushing csv writer: {e}"),
    })?;

    Ok(CsvAttachment {
        filename: format!("{FILTERED_PREFIX}{original_filename}"),
        content_type: CSV_CONTENT_TYPE,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Record;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn outcome(rows: &[(&str, &str)], total: &str) -> FilterOutcome {
        let records = rows
            .iter()
            .map(|(code, amount)| Record {
                fields: HashMap::from([
                    (CODE_COLUMN.to_string(), code.to_string()),
                    ("Importo totale".to_string(), amount.to_string()),
                    ("Note".to_string(), "n".to_string()),
                ]),
            })
            .collect();
        FilterOutcome {
            records,
            total: Decimal::from_str(total).unwrap(),
            warnings: Vec::new(),
        }
    }

    fn columns() -> Vec<String> {
        vec![
            CODE_COLUMN.to_string(),
            "Importo totale".to_string(),
            "Note".to_string(),
        ]
    }

    #[test]
    fn emits_rows_then_total_in_original_layout() {
        let attachment = serialize(
            &outcome(&[("2282", "100,50")], "100.50"),
            &columns(),
            "Importo totale",
            "upload.csv",
        )
        .unwrap();

        let text = String::from_utf8(attachment.body).unwrap();
        assert_eq!(
            text,
            "Codice committente;Importo totale;Note\n\
             2282;100,50;n\n\
             TOTALE;100,50;\n"
        );
    }

    #[test]
    fn total_row_groups_thousands() {
        let attachment = serialize(
            &outcome(&[("2282", "1.234,56")], "1234.56"),
            &columns(),
            "Importo totale",
            "upload.csv",
        )
        .unwrap();
        let text = String::from_utf8(attachment.body).unwrap();
        assert!(text.ends_with("TOTALE;1.234,56;\n"));
    }

    #[test]
    fn attachment_metadata() {
        let attachment = serialize(
            &outcome(&[("2282", "1,00")], "1.00"),
            &columns(),
            "Importo totale",
            "marzo_2024.csv",
        )
        .unwrap();
        assert_eq!(attachment.filename, "filtered_marzo_2024.csv");
        assert_eq!(attachment.content_type, "text/csv");
    }

    #[test]
    fn columns_other_than_code_and_amount_are_empty_on_total_row() {
        let attachment = serialize(
            &outcome(&[("2282", "1,00"), ("2282", "2,00")], "3.00"),
            &columns(),
            "Importo totale",
            "upload.csv",
        )
        .unwrap();
        let text = String::from_utf8(attachment.body).unwrap();
        let total_line = text.lines().last().unwrap();
        assert_eq!(total_line, "TOTALE;3,00;");
    }
}
