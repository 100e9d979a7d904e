use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use volspan_core::ComparisonReport;

/// Period summary + monthly breakdown tables as a standalone HTML page.
pub fn write_trading_summary(report: &ComparisonReport, out_dir: &Path) -> io::Result<PathBuf> {
    let mut period_rows = String::new();
    let mut monthly_rows = String::new();

    for period_report in [&report.first, &report.second] {
        let Some(summary) = &period_report.summary else {
            continue;
        };

        period_rows.push_str(&format!(
            "<tr>\
             <td>{}</td>\
             <td>{} to {}</td>\
             <td>{}</td>\
             <td>{}</td>\
             <td>{}</td>\
             </tr>\n",
            escape_html(&summary.label),
            period_report.period.start().format_iso(),
            period_report.period.end().format_iso(),
            thousands(summary.total_volume),
            price(summary.avg_price),
            money(summary.total_dollar_volume),
        ));

        for bucket in &period_report.monthly {
            monthly_rows.push_str(&format!(
                "<tr>\
                 <td>{}</td>\
                 <td>{}</td>\
                 <td>{}</td>\
                 <td>{}</td>\
                 <td>{}</td>\
                 <td>{}</td>\
                 </tr>\n",
                escape_html(period_report.period.label()),
                bucket.year,
                bucket.month_name(),
                thousands(bucket.total_volume),
                price(bucket.avg_price),
                money(bucket.total_dollar_volume),
            ));
        }
    }

    let html = format!(
        "<html>\n\
         <head>\n\
         <style>\n\
         table {{ border-collapse: collapse; width: 100%; margin: 20px 0; }}\n\
         th, td {{ border: 1px solid #ddd; padding: 8px; text-align: right; }}\n\
         th {{ background-color: #40B4A6; color: white; }}\n\
         tr:nth-child(even) {{ background-color: #f9f9f9; }}\n\
         .summary-section {{ margin-bottom: 30px; }}\n\
         .section-title {{ color: #000000; margin: 20px 0; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>{symbol} Trading Summary</h1>\n\
         <div class=\"summary-section\">\n\
         <h2 class=\"section-title\">Period Summary</h2>\n\
         <table>\n\
         <tr><th>Period</th><th>Date Range</th><th>Total Volume</th>\
         <th>Average Price</th><th>Total Dollar Volume</th></tr>\n\
         {period_rows}\
         </table>\n\
         </div>\n\
         <div class=\"summary-section\">\n\
         <h2 class=\"section-title\">Monthly Breakdown</h2>\n\
         <table>\n\
         <tr><th>Period</th><th>Year</th><th>Month</th><th>Total Volume</th>\
         <th>Average Price</th><th>Total Dollar Volume</th></tr>\n\
         {monthly_rows}\
         </table>\n\
         </div>\n\
         </body>\n\
         </html>\n",
        symbol = report.symbol,
    );

    let path = out_dir.join(format!("{}_trading_summary.html", report.symbol));
    fs::write(&path, html)?;
    Ok(path)
}

/// Digit grouping for share counts ("3,700").
fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped dollar amount with cents ("$462,800.00").
fn money(value: f64) -> String {
    let cents_total = (value * 100.0).round() as u64;
    format!("${}.{:02}", thousands(cents_total / 100), cents_total % 100)
}

/// Plain per-share price ("$125.00").
fn price(value: f64) -> String {
    format!("${value:.2}")
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use volspan_core::{DailyRecord, DailySeries, Period, Symbol, TradeDate};

    fn date(input: &str) -> TradeDate {
        TradeDate::parse(input).expect("test date must parse")
    }

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(3700), "3,700");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_money_with_cents() {
        assert_eq!(money(462_800.0), "$462,800.00");
        assert_eq!(money(0.5), "$0.50");
        assert_eq!(money(1_000_000.125), "$1,000,000.13");
    }

    #[test]
    fn writes_summary_with_period_and_monthly_rows() {
        let series = DailySeries::new(
            Symbol::parse("AAPL").expect("valid symbol"),
            vec![
                DailyRecord::new(date("2023-01-03"), 125.0, 1000).expect("valid record"),
                DailyRecord::new(date("2023-01-04"), 126.0, 1500).expect("valid record"),
                DailyRecord::new(date("2023-01-05"), 124.0, 1200).expect("valid record"),
            ],
        );
        let first =
            Period::new("Period 1", date("2023-01-01"), date("2023-01-31")).expect("valid");
        let second =
            Period::new("Period 2", date("2024-01-01"), date("2024-01-31")).expect("valid");
        let report = ComparisonReport::build(&series, first, second);

        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_trading_summary(&report, dir.path()).expect("summary should write");

        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("AAPL_trading_summary.html")
        );
        let html = std::fs::read_to_string(&path).expect("file should exist");
        assert!(html.contains("AAPL Trading Summary"));
        assert!(html.contains("3,700"));
        assert!(html.contains("$125.00"));
        assert!(html.contains("$462,800.00"));
        assert!(html.contains("January"));
        // Period 2 has no data: present in neither table.
        assert!(!html.contains("Period 2"));
    }

    #[test]
    fn labels_are_html_escaped() {
        let series = DailySeries::new(
            Symbol::parse("AAPL").expect("valid symbol"),
            vec![DailyRecord::new(date("2023-01-03"), 125.0, 1000).expect("valid record")],
        );
        let first = Period::new("Q1 <draft> & final", date("2023-01-01"), date("2023-01-31"))
            .expect("valid");
        let second =
            Period::new("Period 2", date("2023-02-01"), date("2023-02-28")).expect("valid");
        let report = ComparisonReport::build(&series, first, second);

        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_trading_summary(&report, dir.path()).expect("summary should write");
        let html = std::fs::read_to_string(&path).expect("file should exist");
        assert!(html.contains("Q1 &lt;draft&gt; &amp; final"));
    }
}
