use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use time::Weekday;

use crate::data_source::{DailyBarsRequest, DataSource, ProviderId, SourceError};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::{DailyRecord, DailySeries, Symbol, TradeDate, ValidationError};

const SECONDS_PER_DAY: i64 = 86_400;

/// Yahoo Finance daily-bars adapter.
///
/// With a real transport it calls the unofficial v8 chart API; with a mock
/// transport it produces deterministic weekday records so offline runs and
/// tests see stable data. Single attempt per run, no retry.
#[derive(Clone)]
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    use_real_api: bool,
    timeout_ms: u64,
}

impl Default for YahooAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            use_real_api: false,
            timeout_ms: 10_000,
        }
    }
}

impl YahooAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        let use_real_api = !http_client.is_mock();
        Self {
            http_client,
            use_real_api,
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn chart_endpoint(&self, req: &DailyBarsRequest) -> String {
        // Yahoo treats period2 as exclusive; the requested interval is
        // closed, so push the upper bound one day out.
        let period1 = req.start.unix_midnight();
        let period2 = req.end.unix_midnight() + SECONDS_PER_DAY;

        format!(
            "https://query1.finance.yahoo.com/v8/finance/chart/{}?period1={}&period2={}&interval=1d&events=history",
            urlencoding::encode(req.symbol.as_str()),
            period1,
            period2,
        )
    }

    async fn fetch_real_series(&self, req: &DailyBarsRequest) -> Result<DailySeries, SourceError> {
        let endpoint = self.chart_endpoint(req);

        let mut request = HttpRequest::get(&endpoint)
            .with_header("referer", "https://finance.yahoo.com/")
            .with_timeout_ms(self.timeout_ms);
        if let Ok(cookie) = std::env::var("YAHOO_COOKIE") {
            request = request.with_header("cookie", cookie);
        }

        let response = self.http_client.execute(request).await.map_err(|error| {
            SourceError::unavailable(format!("yahoo transport error: {}", error.message()))
        })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo upstream returned status {}",
                response.status
            )));
        }

        let records = parse_chart_response(&response.body)?;
        Ok(DailySeries::new(req.symbol.clone(), records))
    }

    async fn fetch_fake_series(&self, req: &DailyBarsRequest) -> Result<DailySeries, SourceError> {
        // Still exercise the transport so injected failures surface the
        // same way in both modes.
        let endpoint = self.chart_endpoint(req);
        let response = self
            .http_client
            .execute(HttpRequest::get(endpoint).with_timeout_ms(self.timeout_ms))
            .await
            .map_err(|error| {
                SourceError::unavailable(format!("yahoo transport error: {}", error.message()))
            })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "yahoo upstream returned status {}",
                response.status
            )));
        }

        let seed = symbol_seed(&req.symbol);
        let mut records = Vec::new();
        let mut current = req.start.into_inner();
        let end = req.end.into_inner();
        let mut index = 0_u64;

        while current <= end {
            let weekday = current.weekday();
            if weekday != Weekday::Saturday && weekday != Weekday::Sunday {
                let close = 90.0 + ((seed + index) % 350) as f64 / 10.0;
                let volume = 20_000 + index * 25;
                records.push(
                    DailyRecord::new(TradeDate::from_date(current), close, volume)
                        .map_err(validation_to_error)?,
                );
                index += 1;
            }

            current = match current.next_day() {
                Some(next) => next,
                None => break,
            };
        }

        Ok(DailySeries::new(req.symbol.clone(), records))
    }
}

impl DataSource for YahooAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Yahoo
    }

    fn daily_series<'a>(
        &'a self,
        req: DailyBarsRequest,
    ) -> Pin<Box<dyn Future<Output = Result<DailySeries, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            if self.use_real_api {
                self.fetch_real_series(&req).await
            } else {
                self.fetch_fake_series(&req).await
            }
        })
    }
}

/// Parse the v8 chart payload into daily records.
///
/// Slots with null close/volume are skipped (market holidays, partial
/// rows); an empty or null result is an empty series, not an error.
fn parse_chart_response(body: &str) -> Result<Vec<DailyRecord>, SourceError> {
    let chart_response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::internal(format!("failed to parse yahoo chart: {e}")))?;

    if let Some(error) = chart_response.chart.error {
        return Err(SourceError::unavailable(format!(
            "yahoo chart API error: {}",
            error.description.unwrap_or(error.code)
        )));
    }

    let Some(result) = chart_response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
    else {
        return Ok(Vec::new());
    };

    let Some(timestamps) = result.timestamp else {
        return Ok(Vec::new());
    };

    let Some(quote) = result.indicators.quote.into_iter().next() else {
        return Ok(Vec::new());
    };

    let mut records = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let close = quote.close.get(i).copied().flatten();
        let volume = quote.volume.get(i).copied().flatten();

        if let (Some(close), Some(volume)) = (close, volume) {
            if volume < 0 {
                continue;
            }
            let date = TradeDate::from_unix_timestamp(ts).map_err(validation_to_error)?;
            records.push(
                DailyRecord::new(date, close, volume as u64).map_err(validation_to_error)?,
            );
        }
    }

    Ok(records)
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooChartError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartError {
    code: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartQuote {
    close: Vec<Option<f64>>,
    volume: Vec<Option<i64>>,
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}

fn validation_to_error(error: ValidationError) -> SourceError {
    SourceError::internal(error.to_string())
}
