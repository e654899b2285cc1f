//! Authorization resolution: candidate codes in the table, one registry
//! lookup, the authorized subset out.

use crate::domain::model::{ClientCode, RawTable, CODE_COLUMN};
use crate::domain::ports::ClientRegistry;
use crate::utils::error::{ReconError, Result};
use std::collections::HashSet;

/// Distinct, normalized, non-empty codes present in the table.
pub fn candidate_codes(table: &RawTable) -> HashSet<ClientCode> {
    table
        .records
        .iter()
        .filter_map(|record| ClientCode::parse(record.get(CODE_COLUMN)))
        .collect()
}

/// Resolves the authorized subset of the codes appearing in `table`.
///
/// One registry lookup per call regardless of how many candidates the file
/// carries. An authority answer of zero, some or all candidates is valid;
/// only a file with no usable codes at all is an error.
pub async fn resolve<R: ClientRegistry + ?Sized>(
    table: &RawTable,
    registry: &R,
) -> Result<HashSet<ClientCode>> {
    let candidates = candidate_codes(table);
    if candidates.is_empty() {
        return Err(ReconError::NoCodesFound);
    }

    tracing::debug!(candidates = candidates.len(), "resolving codes against registry");
    let answer = registry.filter_existing(&candidates).await?;

    // The registry cannot authorize codes we never asked about.
    let authorized: HashSet<ClientCode> = answer
        .into_iter()
        .filter(|code| candidates.contains(code))
        .collect();

    tracing::debug!(
        candidates = candidates.len(),
        authorized = authorized.len(),
        "registry resolution complete"
    );
    Ok(authorized)
}
