//! Report rendering and artifact writing
//!
//! A report is rendered fully in memory and written with a single call, so a
//! failed write never leaves a partial artifact behind. Each report kind owns
//! a fixed artifact path; writing overwrites any prior content.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::metrics::runner::RunError;

/// Output format for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    /// Resolve a CLI format name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// A finalized, immutable result report.
pub trait Report {
    /// Render the line-oriented text form.
    fn render_text(&self) -> String;

    /// The report data as a JSON value.
    fn json_value(&self) -> serde_json::Value;

    /// Fixed path of the output artifact for this report kind.
    fn output_path(&self) -> &'static str;

    /// Render in the requested format.
    fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.render_text(),
            ReportFormat::Json => {
                // Pretty-printing a Value with string keys cannot fail.
                let mut rendered =
                    serde_json::to_string_pretty(&self.json_value()).unwrap_or_default();
                rendered.push('\n');
                rendered
            }
        }
    }
}

/// Write a report to its fixed artifact path, overwriting prior content.
pub fn write_report<R: Report>(report: &R, format: ReportFormat) -> Result<(), RunError> {
    write_report_to(report, format, report.output_path())
}

/// Write a report to an explicit path.
///
/// The full report is rendered first and written once.
pub fn write_report_to<R, P>(report: &R, format: ReportFormat, path: P) -> Result<(), RunError>
where
    R: Report,
    P: AsRef<Path>,
{
    let rendered = report.render(format);
    fs::write(path.as_ref(), rendered).map_err(|e| RunError::OutputFile {
        path: path.as_ref().display().to_string(),
        message: e.to_string(),
    })
}

/// Seconds figure used in report trailers, e.g. `0.00012s`.
pub(crate) fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.5}s", elapsed.as_secs_f64())
}
