use serde::Serialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use volspan_core::{ProviderId, TradeDate};

/// Metadata attached to every run's stdout payload.
#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub request_id: String,
    pub generated_at: String,
    pub symbol: String,
    pub source: ProviderId,
    pub fetch_start: TradeDate,
    pub fetch_end: TradeDate,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl RunMeta {
    pub fn new(
        symbol: String,
        source: ProviderId,
        fetch_start: TradeDate,
        fetch_end: TradeDate,
        latency_ms: u64,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            generated_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_else(|_| String::from("<unformattable>")),
            symbol,
            source,
            fetch_start,
            fetch_end,
            latency_ms,
            warnings,
        }
    }
}

/// Standard envelope for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub meta: RunMeta,
    pub data: Value,
}
