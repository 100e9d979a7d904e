//! Shared fixtures for volspan behavior tests.

use volspan_core::{DailyRecord, DailySeries, EnrichedRecord, Period, Symbol, TradeDate};

pub fn date(input: &str) -> TradeDate {
    TradeDate::parse(input).expect("fixture date must parse")
}

pub fn record(day: &str, close: f64, volume: u64) -> DailyRecord {
    DailyRecord::new(date(day), close, volume).expect("fixture record must build")
}

pub fn enriched(day: &str, close: f64, volume: u64) -> EnrichedRecord {
    EnrichedRecord::from_daily(record(day, close, volume))
}

pub fn period(label: &str, start: &str, end: &str) -> Period {
    Period::new(label, date(start), date(end)).expect("fixture period must build")
}

pub fn series(symbol: &str, records: Vec<DailyRecord>) -> DailySeries {
    DailySeries::new(Symbol::parse(symbol).expect("fixture symbol must parse"), records)
}

/// Relative float comparison at 1e-9 tolerance.
pub fn assert_close(actual: f64, expected: f64) {
    if expected == 0.0 {
        assert!(
            actual.abs() < 1e-9,
            "expected ~0, got {actual}"
        );
        return;
    }
    let relative = ((actual - expected) / expected).abs();
    assert!(
        relative < 1e-9,
        "expected {expected}, got {actual} (relative error {relative})"
    );
}
