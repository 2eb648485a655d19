//! Numeric base conversion
//!
//! Integers are rendered as sign-prefixed magnitudes: the magnitude digits
//! come from repeated division, with a leading `-` for negative values, so
//! `-3` renders as `-11` in binary and `-3` in hexadecimal. Hexadecimal maps
//! 4-bit groups to the uppercase symbols `0-9A-F`. The same convention is
//! accepted back by [`parse_binary`] and [`parse_hex`], which makes both
//! renderings round-trip over the full `i64` range.

use std::num::ParseIntError;
use std::time::Duration;

use serde::Serialize;

use crate::metrics::report::{self, Report};
use crate::metrics::runner::{Accumulate, ParseFailure};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Render the sign-prefixed binary form of `value`.
pub fn to_binary(value: i64) -> String {
    render_magnitude(value, 2)
}

/// Render the sign-prefixed uppercase hexadecimal form of `value`.
pub fn to_hex(value: i64) -> String {
    render_magnitude(value, 16)
}

/// Parse a sign-prefixed binary rendering back into an integer.
pub fn parse_binary(text: &str) -> Result<i64, ParseIntError> {
    i64::from_str_radix(text, 2)
}

/// Parse a sign-prefixed hexadecimal rendering back into an integer.
pub fn parse_hex(text: &str) -> Result<i64, ParseIntError> {
    i64::from_str_radix(text, 16)
}

fn render_magnitude(value: i64, base: u64) -> String {
    // unsigned_abs keeps i64::MIN representable.
    let mut magnitude = value.unsigned_abs();
    if magnitude == 0 {
        return "0".to_string();
    }

    let mut digits = String::new();
    while magnitude > 0 {
        digits.push(DIGITS[(magnitude % base) as usize] as char);
        magnitude /= base;
    }
    if value < 0 {
        digits.push('-');
    }
    digits.chars().rev().collect()
}

/// One successfully converted input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionEntry {
    pub value: i64,
    pub binary: String,
    pub hex: String,
}

impl ConversionEntry {
    /// Convert a single value into its rendered forms.
    pub fn of(value: i64) -> Self {
        ConversionEntry {
            value,
            binary: to_binary(value),
            hex: to_hex(value),
        }
    }
}

/// Accumulates integer conversions over input lines.
///
/// Lines that do not parse as integers are recorded as failures and skipped;
/// they never abort the pass.
#[derive(Debug)]
pub struct ConversionAccumulator {
    entries: Vec<ConversionEntry>,
    failures: Vec<ParseFailure>,
    line_no: usize,
}

impl ConversionAccumulator {
    pub fn new() -> Self {
        ConversionAccumulator {
            entries: Vec::new(),
            failures: Vec::new(),
            line_no: 0,
        }
    }
}

impl Default for ConversionAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulate for ConversionAccumulator {
    type Report = ConversionReport;

    fn feed(&mut self, line: &str) {
        self.line_no += 1;
        let trimmed = line.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => self.entries.push(ConversionEntry::of(value)),
            Err(_) => self.failures.push(ParseFailure {
                line_no: self.line_no,
                content: trimmed.to_string(),
            }),
        }
    }

    fn finish(self, elapsed: Duration) -> ConversionReport {
        ConversionReport {
            entries: self.entries,
            failures: self.failures,
            elapsed,
        }
    }
}

/// Finalized conversion results.
#[derive(Debug)]
pub struct ConversionReport {
    /// Converted values in input order.
    pub entries: Vec<ConversionEntry>,
    pub failures: Vec<ParseFailure>,
    pub elapsed: Duration,
}

impl Report for ConversionReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!(
                "{} -> BIN:{} HEX:{}\n",
                entry.value, entry.binary, entry.hex
            ));
        }
        out.push_str(&format!(
            "TOTAL:{} ERRORS:{} TIME:{}\n",
            self.entries.len(),
            self.failures.len(),
            report::format_elapsed(self.elapsed)
        ));
        out
    }

    fn json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "entries": &self.entries,
            "total": self.entries.len(),
            "errors": &self.failures,
            "elapsed_seconds": self.elapsed.as_secs_f64(),
        })
    }

    fn output_path(&self) -> &'static str {
        "ConvertionResults.txt"
    }
}
