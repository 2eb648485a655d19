//! Batch run driver
//!
//! String-based processing is the core operation; file-based processing is a
//! thin wrapper that reads the file and delegates. An accumulator is consumed
//! by finalization, so a finished run cannot be fed further lines; re-running
//! requires a fresh accumulator.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;

/// Fatal I/O errors. Everything else that goes wrong during a run is
/// recovered per line and tallied in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    InputFile { path: String, message: String },
    OutputFile { path: String, message: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::InputFile { path, message } => {
                write!(f, "unable to read input file '{}': {}", path, message)
            }
            RunError::OutputFile { path, message } => {
                write!(f, "unable to write output file '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for RunError {}

/// A line that failed to parse. Recorded and reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    /// 1-based line number in the input.
    pub line_no: usize,
    /// The offending line, trimmed.
    pub content: String,
}

/// A single-pass line accumulator that finalizes into a report.
///
/// Implementations own their state exclusively; there is no sharing between
/// accumulators and no way to resume one after `finish`.
pub trait Accumulate {
    type Report;

    /// Consume one input line.
    fn feed(&mut self, line: &str);

    /// Finalize into the immutable report, consuming the accumulator.
    fn finish(self, elapsed: Duration) -> Self::Report;
}

/// Run an accumulator over source text and finalize it.
///
/// The elapsed wall time of the pass is folded into the report.
pub fn run_source<A: Accumulate>(mut acc: A, source: &str) -> A::Report {
    let start = Instant::now();
    for line in source.lines() {
        acc.feed(line);
    }
    acc.finish(start.elapsed())
}

/// Read a file and run an accumulator over its contents.
pub fn run_file<A, P>(acc: A, path: P) -> Result<A::Report, RunError>
where
    A: Accumulate,
    P: AsRef<Path>,
{
    let source = fs::read_to_string(path.as_ref()).map_err(|e| RunError::InputFile {
        path: path.as_ref().display().to_string(),
        message: e.to_string(),
    })?;
    Ok(run_source(acc, &source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Minimal accumulator: counts lines.
    struct LineCounter {
        lines: usize,
    }

    struct LineCount {
        lines: usize,
    }

    impl Accumulate for LineCounter {
        type Report = LineCount;

        fn feed(&mut self, _line: &str) {
            self.lines += 1;
        }

        fn finish(self, _elapsed: Duration) -> LineCount {
            LineCount { lines: self.lines }
        }
    }

    #[test]
    fn test_run_source_feeds_every_line() {
        let report = run_source(LineCounter { lines: 0 }, "a\nb\nc");
        assert_eq!(report.lines, 3);
    }

    #[test]
    fn test_run_source_empty_source() {
        let report = run_source(LineCounter { lines: 0 }, "");
        assert_eq!(report.lines, 0);
    }

    #[test]
    fn test_run_source_trailing_newline_is_not_a_line() {
        let report = run_source(LineCounter { lines: 0 }, "a\nb\n");
        assert_eq!(report.lines, 2);
    }

    #[test]
    fn test_run_file_reads_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "one").unwrap();
        writeln!(file, "two").unwrap();

        let report = run_file(LineCounter { lines: 0 }, file.path()).unwrap();
        assert_eq!(report.lines, 2);
    }

    #[test]
    fn test_run_file_missing_input_is_fatal() {
        let result = run_file(LineCounter { lines: 0 }, "no-such-input-file.txt");

        match result {
            Err(RunError::InputFile { path, .. }) => {
                assert_eq!(path, "no-such-input-file.txt");
            }
            _ => panic!("Expected InputFile error"),
        }
    }

    #[test]
    fn test_run_error_display_names_the_path() {
        let err = RunError::InputFile {
            path: "data.txt".to_string(),
            message: "gone".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unable to read input file 'data.txt': gone"
        );
    }
}
