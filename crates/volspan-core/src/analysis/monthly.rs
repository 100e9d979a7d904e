use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Month;

use crate::domain::EnrichedRecord;

/// Roll-up of one calendar month's trading activity within a period.
///
/// `avg_price` is the unweighted arithmetic mean of daily closes, matching
/// the reported semantics of the summary table; it is deliberately not
/// volume-weighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub year: i32,
    /// Calendar month, 1..=12.
    pub month: u8,
    pub total_volume: u64,
    pub avg_price: f64,
    pub total_dollar_volume: f64,
}

impl MonthlyBucket {
    /// Full English month name ("January").
    pub fn month_name(&self) -> String {
        Month::try_from(self.month)
            .expect("bucket month is always 1..=12")
            .to_string()
    }
}

#[derive(Default)]
struct MonthAccumulator {
    total_volume: u64,
    close_sum: f64,
    dollar_volume_sum: f64,
    trading_days: u32,
}

/// Group a sliced series by (year, month) and reduce each group.
///
/// Months with zero trading days are never emitted; output is chronological
/// ascending regardless of input order.
pub fn aggregate_monthly(sliced: &[EnrichedRecord]) -> Vec<MonthlyBucket> {
    let mut groups: BTreeMap<(i32, u8), MonthAccumulator> = BTreeMap::new();

    for record in sliced {
        let acc = groups
            .entry((record.date.year(), record.date.month()))
            .or_default();
        acc.total_volume += record.volume;
        acc.close_sum += record.close;
        acc.dollar_volume_sum += record.dollar_volume;
        acc.trading_days += 1;
    }

    groups
        .into_iter()
        .map(|((year, month), acc)| MonthlyBucket {
            year,
            month,
            total_volume: acc.total_volume,
            avg_price: acc.close_sum / acc.trading_days as f64,
            total_dollar_volume: acc.dollar_volume_sum,
        })
        .collect()
}
