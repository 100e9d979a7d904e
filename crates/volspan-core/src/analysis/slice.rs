use crate::domain::{EnrichedRecord, Period};

/// Records whose date falls inside the period's closed interval, in the
/// order they appear in the input.
///
/// An empty result means "no data for this period" and is a valid outcome,
/// not an error; downstream stages skip aggregation for it.
pub fn slice_period(records: &[EnrichedRecord], period: &Period) -> Vec<EnrichedRecord> {
    records
        .iter()
        .copied()
        .filter(|record| period.contains(record.date))
        .collect()
}
