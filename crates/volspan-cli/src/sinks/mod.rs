//! Output sinks: HTML artifacts rendered from the engine's data products.
//!
//! Sinks consume the report read-only; they never re-derive series or
//! aggregates. All visual styling lives here, behind [`PeriodPalette`].

mod charts;
mod summary_table;
mod theme;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use volspan_core::ComparisonReport;

pub use theme::PeriodPalette;

/// Write the four artifacts for a run and return their paths in order:
/// daily volume, daily dollar volume, monthly dollar volume, summary table.
pub fn write_all(
    report: &ComparisonReport,
    out_dir: &Path,
    palette: &PeriodPalette,
) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    Ok(vec![
        charts::write_volume_comparison(report, out_dir, palette)?,
        charts::write_dollar_volume_comparison(report, out_dir, palette)?,
        charts::write_monthly_dollar_volume(report, out_dir, palette)?,
        summary_table::write_trading_summary(report, out_dir)?,
    ])
}
