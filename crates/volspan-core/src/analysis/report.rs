use serde::{Deserialize, Serialize};

use crate::analysis::{
    aggregate_monthly, align, enrich, month_ticks, slice_period, summarize, AlignedPoint,
    MonthTick, MonthlyBucket, PeriodSummary,
};
use crate::domain::{DailySeries, EnrichedRecord, Period, Symbol};

/// Full product set for one period: aligned series, calendar ticks,
/// monthly roll-ups, and the summary row (`None` when the period has no
/// trading data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodReport {
    pub period: Period,
    pub aligned: Vec<AlignedPoint>,
    pub month_ticks: Vec<MonthTick>,
    pub monthly: Vec<MonthlyBucket>,
    pub summary: Option<PeriodSummary>,
}

impl PeriodReport {
    /// Run one period's pipeline: slice, align, aggregate, summarize.
    pub fn build(enriched: &[EnrichedRecord], period: Period) -> Self {
        let sliced = slice_period(enriched, &period);
        let aligned = align(&sliced, &period);
        let ticks = month_ticks(&period);
        let monthly = aggregate_monthly(&sliced);
        let summary = summarize(&sliced, period.label());

        Self {
            period,
            aligned,
            month_ticks: ticks,
            monthly,
            summary,
        }
    }

    pub fn has_data(&self) -> bool {
        self.summary.is_some()
    }
}

/// Both periods' products for one analysis run.
///
/// The two pipelines are independent; neither reads the other's slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub symbol: Symbol,
    pub first: PeriodReport,
    pub second: PeriodReport,
}

impl ComparisonReport {
    pub fn build(series: &DailySeries, first: Period, second: Period) -> Self {
        let enriched = enrich(&series.records);

        Self {
            symbol: series.symbol.clone(),
            first: PeriodReport::build(&enriched, first),
            second: PeriodReport::build(&enriched, second),
        }
    }

    /// Labels of periods that produced no data, for caller-side warnings.
    pub fn empty_period_labels(&self) -> Vec<&str> {
        [&self.first, &self.second]
            .into_iter()
            .filter(|report| !report.has_data())
            .map(|report| report.period.label())
            .collect()
    }
}
