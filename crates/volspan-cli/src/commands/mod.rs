mod analyze;
mod summary;

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;

use volspan_core::{
    ComparisonReport, DailyBarsRequest, DailySeries, DataSource, Period, ProviderId,
    ReqwestHttpClient, Symbol, TradeDate, YahooAdapter,
};

use crate::cli::{Cli, Command, PeriodWindowArgs};
use crate::envelope::{Envelope, RunMeta};
use crate::error::CliError;

/// Payload and warnings a command hands back for envelope assembly.
pub struct CommandResult {
    pub symbol: Symbol,
    pub fetch_start: TradeDate,
    pub fetch_end: TradeDate,
    pub data: Value,
    pub warnings: Vec<String>,
}

pub async fn run(cli: &Cli) -> Result<Envelope, CliError> {
    let started = Instant::now();

    let result = match &cli.command {
        Command::Analyze(args) => analyze::run(args, cli).await?,
        Command::Summary(args) => summary::run(args, cli).await?,
    };

    let meta = RunMeta::new(
        result.symbol.to_string(),
        ProviderId::Yahoo,
        result.fetch_start,
        result.fetch_end,
        started.elapsed().as_millis() as u64,
        result.warnings,
    );

    Ok(Envelope {
        meta,
        data: result.data,
    })
}

/// Boundary validation: dates, ordering, labels. The core never sees raw
/// strings.
pub(crate) fn build_periods(window: &PeriodWindowArgs) -> Result<(Period, Period), CliError> {
    let first_start = TradeDate::parse(&window.first_period_start)?;
    let first_end = TradeDate::parse(&window.first_period_end)?;
    let second_start = TradeDate::parse(&window.second_period_start)?;
    let second_end = TradeDate::parse(&window.second_period_end)?;

    let first_label = window
        .first_label
        .clone()
        .unwrap_or_else(|| default_label("Period 1", first_start, first_end));
    let second_label = window
        .second_label
        .clone()
        .unwrap_or_else(|| default_label("Period 2", second_start, second_end));

    let first = Period::new(first_label, first_start, first_end)?;
    let second = Period::new(second_label, second_start, second_end)?;
    Ok((first, second))
}

fn default_label(name: &str, start: TradeDate, end: TradeDate) -> String {
    format!("{name} ({} to {})", start.format_iso(), end.format_iso())
}

/// One fetch over the union window, then both period pipelines.
pub(crate) async fn fetch_and_compare(
    cli: &Cli,
    symbol: Symbol,
    first: Period,
    second: Period,
) -> Result<(ComparisonReport, TradeDate, TradeDate, Vec<String>), CliError> {
    let (fetch_start, fetch_end) = Period::fetch_window(&first, &second);
    let series = fetch_series(cli, symbol, fetch_start, fetch_end).await?;

    let mut warnings = Vec::new();
    if series.is_empty() {
        warnings.push(format!(
            "provider returned no data for {} between {} and {}",
            series.symbol, fetch_start, fetch_end
        ));
    }

    let report = ComparisonReport::build(&series, first, second);
    for label in report.empty_period_labels() {
        warnings.push(format!("no trading data for {label}"));
    }

    Ok((report, fetch_start, fetch_end, warnings))
}

async fn fetch_series(
    cli: &Cli,
    symbol: Symbol,
    fetch_start: TradeDate,
    fetch_end: TradeDate,
) -> Result<DailySeries, CliError> {
    let adapter = if cli.offline {
        YahooAdapter::default()
    } else {
        YahooAdapter::with_http_client(Arc::new(ReqwestHttpClient::new()))
    }
    .with_timeout_ms(cli.timeout_ms);

    let request = DailyBarsRequest::new(symbol, fetch_start, fetch_end)?;
    Ok(adapter.daily_series(request).await?)
}
