use serde::{Deserialize, Serialize};

use crate::{Symbol, TradeDate, ValidationError};

/// Close/volume record for one trading day.
///
/// Dates need not be contiguous; weekends and market holidays are simply
/// absent from a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: TradeDate,
    pub close: f64,
    pub volume: u64,
}

impl DailyRecord {
    pub fn new(date: TradeDate, close: f64, volume: u64) -> Result<Self, ValidationError> {
        validate_non_negative("close", close)?;

        Ok(Self {
            date,
            close,
            volume,
        })
    }
}

/// `DailyRecord` with the derived dollar volume attached.
///
/// Recomputed on demand from the raw series; never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    pub date: TradeDate,
    pub close: f64,
    pub volume: u64,
    pub dollar_volume: f64,
}

impl EnrichedRecord {
    pub fn from_daily(record: DailyRecord) -> Self {
        Self {
            date: record.date,
            close: record.close,
            volume: record.volume,
            dollar_volume: record.close * record.volume as f64,
        }
    }
}

/// Immutable date-ordered table of daily records for one symbol, covering
/// the union fetch window of an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub symbol: Symbol,
    pub records: Vec<DailyRecord>,
}

impl DailySeries {
    pub fn new(symbol: Symbol, records: Vec<DailyRecord>) -> Self {
        Self { symbol, records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
