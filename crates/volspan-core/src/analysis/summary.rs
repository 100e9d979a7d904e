use serde::{Deserialize, Serialize};

use crate::domain::{EnrichedRecord, TradeDate};

/// Whole-period aggregate row.
///
/// `observed_start`/`observed_end` are the first and last dates actually
/// present in the sliced data; they differ from the requested bounds when
/// the market was closed at a boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub label: String,
    pub observed_start: TradeDate,
    pub observed_end: TradeDate,
    pub trading_days: usize,
    pub total_volume: u64,
    pub avg_price: f64,
    pub total_dollar_volume: f64,
}

/// Reduce a sliced series to a single summary row.
///
/// Returns `None` for an empty slice: "period had no trading days in the
/// fetched data" is a distinct outcome from a summary whose totals happen
/// to be zero.
pub fn summarize(sliced: &[EnrichedRecord], label: impl Into<String>) -> Option<PeriodSummary> {
    if sliced.is_empty() {
        return None;
    }

    let mut observed_start = sliced[0].date;
    let mut observed_end = sliced[0].date;
    let mut total_volume = 0_u64;
    let mut close_sum = 0.0;
    let mut total_dollar_volume = 0.0;

    for record in sliced {
        observed_start = observed_start.min(record.date);
        observed_end = observed_end.max(record.date);
        total_volume += record.volume;
        close_sum += record.close;
        total_dollar_volume += record.dollar_volume;
    }

    Some(PeriodSummary {
        label: label.into(),
        observed_start,
        observed_end,
        trading_days: sliced.len(),
        total_volume,
        avg_price: close_sum / sliced.len() as f64,
        total_dollar_volume,
    })
}
