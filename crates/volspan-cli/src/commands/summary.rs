use serde_json::json;

use volspan_core::Symbol;

use crate::cli::{Cli, SummaryArgs};
use crate::error::CliError;

use super::{build_periods, fetch_and_compare, CommandResult};

pub async fn run(args: &SummaryArgs, cli: &Cli) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let (first, second) = build_periods(&args.window)?;

    let (report, fetch_start, fetch_end, warnings) =
        fetch_and_compare(cli, symbol.clone(), first, second).await?;

    // Summaries and roll-ups only; the aligned series is chart fodder.
    let data = json!({
        "period_summaries": [report.first.summary, report.second.summary],
        "monthly": {
            "first": report.first.monthly,
            "second": report.second.monthly,
        },
    });

    Ok(CommandResult {
        symbol,
        fetch_start,
        fetch_end,
        data,
        warnings,
    })
}
