use serde::{Deserialize, Serialize};

use crate::domain::{EnrichedRecord, Period};

/// One record positioned on the shared relative axis.
///
/// `offset_days` counts from the period's *requested* start date, not the
/// first observed trading day, so two periods starting on different
/// weekdays still line up by elapsed calendar time. For sliced input the
/// offset is always in `[0, span_days]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    pub offset_days: i64,
    pub record: EnrichedRecord,
}

/// Calendar month marker on the relative axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthTick {
    pub offset_days: i64,
    pub label: String,
}

/// Index a sliced series by days elapsed since the period start.
pub fn align(sliced: &[EnrichedRecord], period: &Period) -> Vec<AlignedPoint> {
    sliced
        .iter()
        .copied()
        .map(|record| AlignedPoint {
            offset_days: record.date.days_since(period.start()),
            record,
        })
        .collect()
}

/// Month ticks for a period's requested window.
///
/// The first tick sits at the start date itself (offset 0); subsequent
/// ticks sit on the 1st of each following calendar month while still
/// inside the window. Ticks mark calendar months, not data presence.
pub fn month_ticks(period: &Period) -> Vec<MonthTick> {
    let mut ticks = Vec::new();
    let mut current = period.start();

    while current <= period.end() {
        ticks.push(MonthTick {
            offset_days: current.days_since(period.start()),
            label: current.month_name(),
        });
        current = current.first_of_next_month();
    }

    ticks
}
