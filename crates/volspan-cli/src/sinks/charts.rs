use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use volspan_core::{ComparisonReport, MonthTick, PeriodReport};

use super::theme::PeriodPalette;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

/// Daily volume overlay on the days-since-start axis.
pub fn write_volume_comparison(
    report: &ComparisonReport,
    out_dir: &Path,
    palette: &PeriodPalette,
) -> io::Result<PathBuf> {
    let traces: Vec<Value> = [
        volume_trace(&report.first, &palette.first),
        volume_trace(&report.second, &palette.second),
    ]
    .into_iter()
    .flatten()
    .collect();

    let layout = overlay_layout(
        &format!("{} - Trading Volume Comparison", report.symbol),
        "Volume",
        ",d",
        &report.first.month_ticks,
    );

    let path = out_dir.join(format!("{}_volume_comparison.html", report.symbol));
    write_plotly_html(&path, &json!({ "data": traces, "layout": layout }))?;
    Ok(path)
}

/// Daily dollar-volume overlay with price/volume hover detail.
pub fn write_dollar_volume_comparison(
    report: &ComparisonReport,
    out_dir: &Path,
    palette: &PeriodPalette,
) -> io::Result<PathBuf> {
    let traces: Vec<Value> = [
        dollar_volume_trace(&report.first, &palette.first),
        dollar_volume_trace(&report.second, &palette.second),
    ]
    .into_iter()
    .flatten()
    .collect();

    let layout = overlay_layout(
        &format!("{} - Trading Dollar Volume Comparison", report.symbol),
        "Dollar Volume ($)",
        "$,.0f",
        &report.first.month_ticks,
    );

    let path = out_dir.join(format!("{}_dollar_volume_comparison.html", report.symbol));
    write_plotly_html(&path, &json!({ "data": traces, "layout": layout }))?;
    Ok(path)
}

/// Monthly dollar-volume grouped bars.
pub fn write_monthly_dollar_volume(
    report: &ComparisonReport,
    out_dir: &Path,
    palette: &PeriodPalette,
) -> io::Result<PathBuf> {
    let traces: Vec<Value> = [
        monthly_bar_trace(&report.first, &palette.first),
        monthly_bar_trace(&report.second, &palette.second),
    ]
    .into_iter()
    .flatten()
    .collect();

    let layout = json!({
        "title": format!("{} - Monthly Trading Dollar Volume Comparison", report.symbol),
        "xaxis": { "title": "Month" },
        "yaxis": { "title": "Dollar Volume ($)", "tickformat": "$,.0f", "showgrid": true },
        "hovermode": "x unified",
        "barmode": "group",
        "showlegend": true,
        "legend": { "yanchor": "top", "y": 0.99, "xanchor": "left", "x": 0.01 },
        "plot_bgcolor": "white",
    });

    let path = out_dir.join(format!(
        "{}_monthly_dollar_volume_comparison.html",
        report.symbol
    ));
    write_plotly_html(&path, &json!({ "data": traces, "layout": layout }))?;
    Ok(path)
}

fn volume_trace(report: &PeriodReport, color: &str) -> Option<Value> {
    if report.aligned.is_empty() {
        return None;
    }

    let x: Vec<i64> = report.aligned.iter().map(|p| p.offset_days).collect();
    let y: Vec<u64> = report.aligned.iter().map(|p| p.record.volume).collect();
    let text: Vec<String> = report
        .aligned
        .iter()
        .map(|p| p.record.date.format_long())
        .collect();

    Some(json!({
        "type": "scatter",
        "mode": "lines",
        "name": report.period.label(),
        "x": x,
        "y": y,
        "text": text,
        "line": { "color": color },
        "hovertemplate": "%{text}<br>Volume: %{y:,.0f}<extra></extra>",
    }))
}

fn dollar_volume_trace(report: &PeriodReport, color: &str) -> Option<Value> {
    if report.aligned.is_empty() {
        return None;
    }

    let x: Vec<i64> = report.aligned.iter().map(|p| p.offset_days).collect();
    let y: Vec<f64> = report
        .aligned
        .iter()
        .map(|p| p.record.dollar_volume)
        .collect();
    let text: Vec<String> = report
        .aligned
        .iter()
        .map(|p| p.record.date.format_long())
        .collect();
    let customdata: Vec<[f64; 2]> = report
        .aligned
        .iter()
        .map(|p| [p.record.close, p.record.volume as f64])
        .collect();

    Some(json!({
        "type": "scatter",
        "mode": "lines",
        "name": report.period.label(),
        "x": x,
        "y": y,
        "text": text,
        "customdata": customdata,
        "line": { "color": color },
        "hovertemplate": "%{text}<br>Dollar Volume: $%{y:,.2f}<br>Price: $%{customdata[0]:.2f}<br>Volume: %{customdata[1]:,.0f}<extra></extra>",
    }))
}

fn monthly_bar_trace(report: &PeriodReport, color: &str) -> Option<Value> {
    if report.monthly.is_empty() {
        return None;
    }

    let x: Vec<String> = report.monthly.iter().map(|b| b.month_name()).collect();
    let y: Vec<f64> = report
        .monthly
        .iter()
        .map(|b| b.total_dollar_volume)
        .collect();

    Some(json!({
        "type": "bar",
        "name": report.period.label(),
        "x": x,
        "y": y,
        "marker": { "color": color },
        "hovertemplate": "%{x}<br>Dollar Volume: $%{y:,.2f}<extra></extra>",
    }))
}

fn overlay_layout(title: &str, y_title: &str, y_tickformat: &str, ticks: &[MonthTick]) -> Value {
    let tickvals: Vec<i64> = ticks.iter().map(|t| t.offset_days).collect();
    let ticktext: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();

    json!({
        "title": title,
        "xaxis": {
            "title": "Days Since Period Start",
            "tickvals": tickvals,
            "ticktext": ticktext,
            "tickangle": 45,
            "showgrid": true,
        },
        "yaxis": { "title": y_title, "tickformat": y_tickformat, "showgrid": true },
        "hovermode": "x unified",
        "showlegend": true,
        "plot_bgcolor": "white",
    })
}

fn write_plotly_html(path: &Path, figure: &Value) -> io::Result<()> {
    let html = format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <script src=\"{PLOTLY_CDN}\"></script>\n\
         </head>\n\
         <body>\n\
         <div id=\"chart\" style=\"width:100%;height:100vh;\"></div>\n\
         <script>\n\
         const figure = {figure};\n\
         Plotly.newPlot(\"chart\", figure.data, figure.layout);\n\
         </script>\n\
         </body>\n\
         </html>\n"
    );

    fs::write(path, html)
}
