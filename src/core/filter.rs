//! Filtering and aggregation: authorized rows kept in order, amounts
//! normalized and summed.

use crate::domain::amount::parse_amount;
use crate::domain::model::{
    ClientCode, FilterOutcome, RawTable, RowParseWarning, CODE_COLUMN,
};
use crate::utils::error::{ReconError, Result};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Single pass over the table: a row is retained when its normalized code is
/// a member of `authorized`. Unparseable amounts contribute zero and become
/// warnings; the row itself stays. Zero retained rows reject the request.
pub fn filter_and_total(
    table: &RawTable,
    authorized: &HashSet<ClientCode>,
    amount_column: &str,
) -> Result<FilterOutcome> {
    let mut records = Vec::new();
    let mut total = Decimal::ZERO;
    let mut warnings = Vec::new();

    for (index, record) in table.records.iter().enumerate() {
        let Some(code) = ClientCode::parse(record.get(CODE_COLUMN)) else {
            continue;
        };
        if !authorized.contains(&code) {
            continue;
        }

        let raw_amount = record.get(amount_column);
        match parse_amount(raw_amount) {
            Ok(amount) => total += amount,
            Err(err) => {
                tracing::warn!(
                    row = index + 1,
                    code = %code,
                    value = raw_amount,
                    %err,
                    "amount not parseable, contributes zero to the total"
                );
                warnings.push(RowParseWarning {
                    row: index + 1,
                    value: raw_amount.to_string(),
                });
            }
        }
        records.push(record.clone());
    }

    if records.is_empty() {
        return Err(ReconError::NoMatchingRows);
    }

    Ok(FilterOutcome {
        records,
        total,
        warnings,
    })
}
