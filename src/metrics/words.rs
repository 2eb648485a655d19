//! Word-frequency counting
//!
//! A token is a maximal run of non-whitespace characters. Tokens are compared
//! case-sensitively and every token counts; there is no validation step, so
//! blank lines simply contribute nothing and no line is ever an error.

use std::collections::HashMap;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::metrics::report::{self, Report};
use crate::metrics::runner::Accumulate;

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

/// Accumulates per-token counts over input lines.
#[derive(Debug)]
pub struct WordTally {
    counts: HashMap<String, u64>,
    total_tokens: u64,
}

impl WordTally {
    pub fn new() -> Self {
        WordTally {
            counts: HashMap::new(),
            total_tokens: 0,
        }
    }
}

impl Default for WordTally {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulate for WordTally {
    type Report = WordReport;

    fn feed(&mut self, line: &str) {
        for token in TOKEN_REGEX.find_iter(line) {
            *self.counts.entry(token.as_str().to_string()).or_insert(0) += 1;
            self.total_tokens += 1;
        }
    }

    fn finish(self, elapsed: Duration) -> WordReport {
        let WordTally {
            counts,
            total_tokens,
        } = self;

        let mut entries: Vec<WordCount> = counts
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect();
        // Descending count; ties in ascending word order.
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));

        WordReport {
            entries,
            total_tokens,
            elapsed,
        }
    }
}

/// One row of the frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Finalized frequency table.
#[derive(Debug)]
pub struct WordReport {
    /// Distinct words, sorted by descending count then ascending word.
    pub entries: Vec<WordCount>,
    /// Total number of tokens processed; always equals the sum of all counts.
    pub total_tokens: u64,
    pub elapsed: Duration,
}

impl Report for WordReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!("{} {}\n", entry.word, entry.count));
        }
        out.push_str(&format!(
            "DISTINCT:{} TOKENS:{} TIME:{}\n",
            self.entries.len(),
            self.total_tokens,
            report::format_elapsed(self.elapsed)
        ));
        out
    }

    fn json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "entries": &self.entries,
            "distinct": self.entries.len(),
            "total_tokens": self.total_tokens,
            "elapsed_seconds": self.elapsed.as_secs_f64(),
        })
    }

    fn output_path(&self) -> &'static str {
        "WordCountResults.txt"
    }
}
