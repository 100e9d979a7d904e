use serde_json::json;

use volspan_core::Symbol;

use crate::cli::{AnalyzeArgs, Cli};
use crate::error::CliError;
use crate::sinks::{self, PeriodPalette};

use super::{build_periods, fetch_and_compare, CommandResult};

pub async fn run(args: &AnalyzeArgs, cli: &Cli) -> Result<CommandResult, CliError> {
    if args.out_dir.exists() && !args.out_dir.is_dir() {
        return Err(CliError::Command(format!(
            "--out-dir {} exists and is not a directory",
            args.out_dir.display()
        )));
    }

    let symbol = Symbol::parse(&args.symbol)?;
    let (first, second) = build_periods(&args.window)?;

    let (report, fetch_start, fetch_end, warnings) =
        fetch_and_compare(cli, symbol.clone(), first, second).await?;

    let artifacts = sinks::write_all(&report, &args.out_dir, &PeriodPalette::default())?;

    let data = json!({
        "report": report,
        "artifacts": artifacts,
    });

    Ok(CommandResult {
        symbol,
        fetch_start,
        fetch_end,
        data,
        warnings,
    })
}
