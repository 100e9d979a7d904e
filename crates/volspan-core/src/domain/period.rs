use serde::{Deserialize, Serialize};

use crate::{TradeDate, ValidationError};

/// Labeled closed date interval for one comparison window.
///
/// The two periods of an analysis run may overlap, be disjoint, or differ
/// in length; nothing here assumes a relationship between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    label: String,
    start: TradeDate,
    end: TradeDate,
}

impl Period {
    pub fn new(
        label: impl Into<String>,
        start: TradeDate,
        end: TradeDate,
    ) -> Result<Self, ValidationError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(ValidationError::EmptyPeriodLabel);
        }
        if start > end {
            return Err(ValidationError::PeriodOrder {
                start: start.format_iso(),
                end: end.format_iso(),
            });
        }

        Ok(Self { label, start, end })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start(&self) -> TradeDate {
        self.start
    }

    pub fn end(&self) -> TradeDate {
        self.end
    }

    pub fn contains(&self, date: TradeDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Span of the requested window in days; 0 for a single-day period.
    pub fn span_days(&self) -> i64 {
        self.end.days_since(self.start)
    }

    /// Union window covering both periods, used as the provider fetch range.
    pub fn fetch_window(first: &Period, second: &Period) -> (TradeDate, TradeDate) {
        let start = first.start.min(second.start);
        let end = first.end.max(second.end);
        (start, end)
    }
}
