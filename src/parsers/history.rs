use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::models::SearchCriteria;

/// Decode the persisted history slot into criteria records
/// Gracefully handles malformed records by logging and skipping them
/// Returns an error if the slot is not a JSON array or more than 50% of records fail to decode
pub fn parse_history(raw: &str) -> Result<Vec<SearchCriteria>> {
    let value: Value = serde_json::from_str(raw).context("History data is not valid JSON")?;

    let Value::Array(items) = value else {
        bail!("History data is not a list");
    };

    let total_records = items.len();
    let mut records = Vec::with_capacity(total_records);
    let mut skipped_count = 0;

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<SearchCriteria>(item) {
            Ok(criteria) => records.push(criteria),
            Err(e) => {
                tracing::warn!("Skipping malformed history record {}: {}", index + 1, e);
                skipped_count += 1;
            }
        }
    }

    // Check if failure rate is too high
    if total_records > 0 {
        let failure_rate = (skipped_count as f64) / (total_records as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many malformed history records: {} of {} failed ({:.1}%)",
                skipped_count,
                total_records,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        tracing::warn!("Loaded history: {} records ({} skipped)", records.len(), skipped_count);
    }

    Ok(records)
}
