//! Behavior tests for the period-comparison engine.
//!
//! These cover the end-to-end analysis pipeline: enrichment, slicing,
//! alignment, monthly roll-ups, and summaries, including the ragged and
//! empty-window cases.

use volspan_core::{
    aggregate_monthly, align, enrich, month_ticks, slice_period, summarize, ComparisonReport,
    PeriodReport,
};
use volspan_tests::{assert_close, date, enriched, period, record, series};

// =============================================================================
// Reference scenario: AAPL, January 2023, three trading days
// =============================================================================

#[test]
fn january_scenario_produces_expected_aggregates() {
    let store = series(
        "AAPL",
        vec![
            record("2023-01-03", 125.0, 1000),
            record("2023-01-04", 126.0, 1500),
            record("2023-01-05", 124.0, 1200),
        ],
    );
    let window = period("Period 1", "2023-01-01", "2023-01-31");

    let enriched_records = enrich(&store.records);
    let dollars: Vec<f64> = enriched_records.iter().map(|r| r.dollar_volume).collect();
    assert_eq!(dollars, vec![125_000.0, 189_000.0, 148_800.0]);

    let sliced = slice_period(&enriched_records, &window);
    let aligned = align(&sliced, &window);
    let offsets: Vec<i64> = aligned.iter().map(|p| p.offset_days).collect();
    assert_eq!(offsets, vec![2, 3, 4]);

    let monthly = aggregate_monthly(&sliced);
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].total_volume, 3700);
    assert_close(monthly[0].avg_price, 125.0);
    assert_close(monthly[0].total_dollar_volume, 462_800.0);

    // Single-month period: the summary matches the monthly bucket exactly.
    let summary = summarize(&sliced, "Period 1").expect("period has data");
    assert_eq!(summary.total_volume, monthly[0].total_volume);
    assert_close(summary.avg_price, monthly[0].avg_price);
    assert_close(summary.total_dollar_volume, monthly[0].total_dollar_volume);
    assert_eq!(summary.observed_start, date("2023-01-03"));
    assert_eq!(summary.observed_end, date("2023-01-05"));
}

#[test]
fn dollar_volume_matches_close_times_volume_across_magnitudes() {
    let cases = [
        ("2023-01-03", 0.0001, 1_u64),
        ("2023-01-04", 125.0, 0),
        ("2023-01-05", 9_999.99, 5_000_000),
    ];

    for (day, close, volume) in cases {
        let point = enriched(day, close, volume);
        assert_close(point.dollar_volume, close * volume as f64);
        assert!(point.dollar_volume >= 0.0);
    }
}

// =============================================================================
// Slicing and alignment invariants
// =============================================================================

#[test]
fn slicing_an_already_sliced_series_is_identity() {
    let window = period("P", "2023-01-01", "2023-06-30");
    let records = vec![
        enriched("2022-12-30", 99.0, 500),
        enriched("2023-01-03", 100.0, 600),
        enriched("2023-06-30", 110.0, 700),
        enriched("2023-07-03", 120.0, 800),
    ];

    let once = slice_period(&records, &window);
    let twice = slice_period(&once, &window);
    assert_eq!(once, twice);
    assert_eq!(once.len(), 2);
}

#[test]
fn offsets_are_non_negative_and_ordered_for_sliced_input() {
    let window = period("P", "2023-01-01", "2023-12-31");
    let records = vec![
        enriched("2023-01-01", 100.0, 1),
        enriched("2023-03-15", 101.0, 2),
        enriched("2023-12-31", 102.0, 3),
    ];

    let aligned = align(&slice_period(&records, &window), &window);
    assert_eq!(aligned[0].offset_days, 0);
    assert!(aligned.windows(2).all(|w| w[0].offset_days <= w[1].offset_days));
    assert!(aligned.iter().all(|p| p.offset_days >= 0));
}

#[test]
fn leap_year_period_lengths_differ_without_error() {
    // 2023 has 365 days, 2024 has 366; the engine aligns each over its own
    // span and never forces the two onto a common length.
    let plain = period("Period 1", "2023-01-01", "2023-12-31");
    let leap = period("Period 2", "2024-01-01", "2024-12-31");

    let store = series(
        "SPY",
        vec![
            record("2023-12-31", 100.0, 10),
            record("2024-12-31", 110.0, 20),
        ],
    );
    let report = ComparisonReport::build(&store, plain, leap);

    let first_max = report
        .first
        .aligned
        .iter()
        .map(|p| p.offset_days)
        .max()
        .expect("first period has data");
    let second_max = report
        .second
        .aligned
        .iter()
        .map(|p| p.offset_days)
        .max()
        .expect("second period has data");
    assert_eq!(first_max, 364);
    assert_eq!(second_max, 365);

    // Month ticks cover all twelve months in both windows.
    assert_eq!(report.first.month_ticks.len(), 12);
    assert_eq!(report.second.month_ticks.len(), 12);
}

#[test]
fn month_ticks_step_across_year_boundary() {
    let ticks = month_ticks(&period("P", "2023-12-01", "2024-01-31"));
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["December", "January"]);
    assert_eq!(ticks[1].offset_days, 31);
}

// =============================================================================
// Reconciliation
// =============================================================================

#[test]
fn monthly_totals_reconcile_with_period_summary() {
    let window = period("P", "2022-11-01", "2023-02-28");
    let records = vec![
        enriched("2022-11-15", 95.0, 1_000_000),
        enriched("2022-12-01", 97.5, 800_000),
        enriched("2022-12-15", 99.0, 750_000),
        enriched("2023-01-03", 101.0, 1_250_000),
        enriched("2023-02-27", 103.0, 900_000),
    ];

    let sliced = slice_period(&records, &window);
    let monthly = aggregate_monthly(&sliced);
    let summary = summarize(&sliced, "P").expect("period has data");

    let monthly_volume: u64 = monthly.iter().map(|b| b.total_volume).sum();
    let monthly_dollars: f64 = monthly.iter().map(|b| b.total_dollar_volume).sum();
    assert_eq!(monthly_volume, summary.total_volume);
    assert_close(monthly_dollars, summary.total_dollar_volume);

    // November, December, January, February in order.
    let keys: Vec<(i32, u8)> = monthly.iter().map(|b| (b.year, b.month)).collect();
    assert_eq!(keys, vec![(2022, 11), (2022, 12), (2023, 1), (2023, 2)]);
}

// =============================================================================
// Empty and overlapping windows
// =============================================================================

#[test]
fn period_outside_fetched_data_yields_empty_products_not_a_crash() {
    let store = series("AAPL", vec![record("2023-06-01", 180.0, 1000)]);
    let inside = period("Period 1", "2023-01-01", "2023-12-31");
    let outside = period("Period 2", "2019-01-01", "2019-12-31");

    let report = ComparisonReport::build(&store, inside, outside);

    assert!(report.second.aligned.is_empty());
    assert!(report.second.monthly.is_empty());
    assert!(report.second.summary.is_none());
    assert_eq!(report.empty_period_labels(), vec!["Period 2"]);

    // The populated period is unaffected.
    let summary = report.first.summary.as_ref().expect("has data");
    assert_eq!(summary.total_volume, 1000);
}

#[test]
fn zero_volume_days_are_data_not_absence() {
    let window = period("P", "2023-01-01", "2023-01-31");
    let sliced = slice_period(&[enriched("2023-01-10", 50.0, 0)], &window);

    let summary = summarize(&sliced, "P").expect("a zero-volume day is still a trading day");
    assert_eq!(summary.total_volume, 0);
    assert_eq!(summary.trading_days, 1);
}

#[test]
fn overlapping_periods_compute_from_their_own_slices_only() {
    let store = series(
        "MSFT",
        vec![
            record("2023-01-10", 100.0, 100),
            record("2023-01-20", 102.0, 200),
            record("2023-02-10", 104.0, 300),
            record("2023-02-20", 106.0, 400),
        ],
    );
    let first = period("Period 1", "2023-01-01", "2023-02-14");
    let second = period("Period 2", "2023-02-01", "2023-02-28");

    let report = ComparisonReport::build(&store, first, second);

    let first_summary = report.first.summary.as_ref().expect("has data");
    let second_summary = report.second.summary.as_ref().expect("has data");
    // Jan 10 + Jan 20 + Feb 10 for the first; Feb 10 + Feb 20 for the
    // second. Feb 10 is shared, the rest must not leak.
    assert_eq!(first_summary.total_volume, 600);
    assert_eq!(second_summary.total_volume, 700);
    assert_eq!(first_summary.observed_end, date("2023-02-10"));
    assert_eq!(second_summary.observed_start, date("2023-02-10"));
}

#[test]
fn unsorted_input_still_produces_chronological_buckets() {
    let window = period("P", "2023-01-01", "2023-12-31");
    let records = vec![
        enriched("2023-05-10", 100.0, 10),
        enriched("2023-01-10", 90.0, 20),
        enriched("2023-03-10", 95.0, 30),
    ];

    let buckets = aggregate_monthly(&slice_period(&records, &window));
    let months: Vec<u8> = buckets.iter().map(|b| b.month).collect();
    assert_eq!(months, vec![1, 3, 5]);
}

#[test]
fn period_report_is_a_faithful_composition() {
    let store = series(
        "AAPL",
        vec![
            record("2023-01-03", 125.0, 1000),
            record("2023-02-01", 130.0, 2000),
        ],
    );
    let window = period("Period 1", "2023-01-01", "2023-02-28");
    let enriched_records = enrich(&store.records);

    let report = PeriodReport::build(&enriched_records, window.clone());

    assert_eq!(report.aligned, align(&slice_period(&enriched_records, &window), &window));
    assert_eq!(report.month_ticks, month_ticks(&window));
    assert_eq!(
        report.monthly,
        aggregate_monthly(&slice_period(&enriched_records, &window))
    );
}
