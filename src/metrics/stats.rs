//! Descriptive statistics
//!
//! The accumulator folds each parsed value into a running sum and sum of
//! squares and buffers the raw sequence, which finalization needs for the
//! median and mode. Variance is population variance (divide by count).
//!
//! A parsed value must be finite: `NaN` and the infinities are recorded as
//! parse failures along with everything that does not read as a number.

use std::time::Duration;

use serde::Serialize;

use crate::metrics::report::{self, Report};
use crate::metrics::runner::{Accumulate, ParseFailure};

/// Relative tolerance for variance driven negative by cancellation.
const VARIANCE_EPSILON: f64 = 1e-9;

/// Accumulates numeric values over input lines.
#[derive(Debug)]
pub struct StatsAccumulator {
    values: Vec<f64>,
    sum: f64,
    sum_sq: f64,
    failures: Vec<ParseFailure>,
    line_no: usize,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        StatsAccumulator {
            values: Vec::new(),
            sum: 0.0,
            sum_sq: 0.0,
            failures: Vec::new(),
            line_no: 0,
        }
    }
}

impl Default for StatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulate for StatsAccumulator {
    type Report = StatsReport;

    fn feed(&mut self, line: &str) {
        self.line_no += 1;
        let trimmed = line.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                self.values.push(value);
                self.sum += value;
                self.sum_sq += value * value;
            }
            _ => self.failures.push(ParseFailure {
                line_no: self.line_no,
                content: trimmed.to_string(),
            }),
        }
    }

    fn finish(self, elapsed: Duration) -> StatsReport {
        let StatsAccumulator {
            mut values,
            sum,
            sum_sq,
            failures,
            ..
        } = self;

        let summary = if values.is_empty() {
            None
        } else {
            values.sort_by(f64::total_cmp);
            let count = values.len();
            let mean = sum / count as f64;
            let variance = clamp_variance(sum_sq / count as f64 - mean * mean, mean);
            Some(StatsSummary {
                count,
                mean,
                variance,
                std_dev: variance.sqrt(),
                median: median_of_sorted(&values),
                modes: modes_of_sorted(&values),
            })
        };

        StatsReport {
            summary,
            failures,
            elapsed,
        }
    }
}

/// Clamp a variance that cancellation pushed slightly below zero.
fn clamp_variance(variance: f64, mean: f64) -> f64 {
    let epsilon = VARIANCE_EPSILON * (1.0 + mean * mean);
    if variance < 0.0 && variance >= -epsilon {
        0.0
    } else {
        variance
    }
}

fn median_of_sorted(values: &[f64]) -> f64 {
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Values with the highest occurrence count, as maximal runs in the sorted
/// sequence. No repeated value means no mode.
fn modes_of_sorted(values: &[f64]) -> Vec<f64> {
    let mut best = 1;
    let mut modes = Vec::new();
    let mut i = 0;
    while i < values.len() {
        let mut j = i + 1;
        while j < values.len() && values[j] == values[i] {
            j += 1;
        }
        let run = j - i;
        if run > best {
            best = run;
            modes.clear();
            modes.push(values[i]);
        } else if run == best && best > 1 {
            modes.push(values[i]);
        }
        i = j;
    }
    modes
}

/// The six figures of a non-empty dataset.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub median: f64,
    /// Modal values in ascending order; empty when no value repeats.
    pub modes: Vec<f64>,
}

/// Finalized statistics results. `summary` is `None` when no line parsed.
#[derive(Debug)]
pub struct StatsReport {
    pub summary: Option<StatsSummary>,
    pub failures: Vec<ParseFailure>,
    pub elapsed: Duration,
}

fn render_modes(modes: &[f64]) -> String {
    if modes.is_empty() {
        "NONE".to_string()
    } else {
        modes
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Report for StatsReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        match &self.summary {
            Some(summary) => {
                out.push_str(&format!("COUNT:{}\n", summary.count));
                out.push_str(&format!("MEAN:{}\n", summary.mean));
                out.push_str(&format!("VARIANCE:{}\n", summary.variance));
                out.push_str(&format!("STDEV:{}\n", summary.std_dev));
                out.push_str(&format!("MEDIAN:{}\n", summary.median));
                out.push_str(&format!("MODE:{}\n", render_modes(&summary.modes)));
            }
            None => out.push_str("no valid data\n"),
        }
        out.push_str(&format!(
            "ERRORS:{} TIME:{}\n",
            self.failures.len(),
            report::format_elapsed(self.elapsed)
        ));
        out
    }

    fn json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "summary": &self.summary,
            "errors": &self.failures,
            "elapsed_seconds": self.elapsed.as_secs_f64(),
        })
    }

    fn output_path(&self) -> &'static str {
        "StatisticsResults.txt"
    }
}
