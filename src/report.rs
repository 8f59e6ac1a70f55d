//! Plain-text report writing
//!
//! A report is a title line followed by one `"<Label>: <value>"` line per
//! metric. Money-like values use thousands separators and two decimals;
//! integers are written plain.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, StatsError};

/// One `"<Label>: <value>"` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

impl ReportLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A summary that can be rendered as a text report
pub trait ReportSection {
    fn title(&self) -> String;
    fn lines(&self) -> Vec<ReportLine>;
}

/// Render a report section to text, one line per metric
pub fn render<S: ReportSection + ?Sized>(section: &S) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", section.title());
    for line in section.lines() {
        let _ = writeln!(out, "{}: {}", line.label, line.value);
    }
    out
}

/// Write a report to `path`, creating parent directories as needed
pub fn write_report<S: ReportSection + ?Sized>(path: &Path, section: &S) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            StatsError::report(
                path,
                format!("failed to create directory {}: {}", parent.display(), e),
            )
        })?;
    }

    let content = render(section);
    fs::write(path, &content).map_err(|e| StatsError::report(path, e.to_string()))?;

    debug!("Wrote {} bytes", content.len());
    info!("Report saved to {}", path.display());
    Ok(())
}

/// Format with thousands separators and two decimals, e.g. `1,234,567.89`
///
/// Non-finite values are written as their plain display form.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(whole), fraction)
}

/// Format an integer without separators
pub fn format_integer(value: i64) -> String {
    value.to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
