use crate::domain::{DailyRecord, EnrichedRecord};

/// Attach `dollar_volume = close * volume` to every record.
///
/// Total over well-formed input; order-preserving.
pub fn enrich(records: &[DailyRecord]) -> Vec<EnrichedRecord> {
    records
        .iter()
        .copied()
        .map(EnrichedRecord::from_daily)
        .collect()
}
