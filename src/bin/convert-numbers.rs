//! Numeric-base converter CLI
//!
//! Reads one integer per line from the input file, converts each to binary
//! and hexadecimal, echoes the report to stdout and writes it to
//! `ConvertionResults.txt` in the current directory.
//!
//! Usage:
//!   convert-numbers `<input>` [--format `<text|json>`]

use clap::{Arg, Command};
use textmetrics::metrics::convert::ConversionAccumulator;
use textmetrics::metrics::report::{write_report, Report, ReportFormat};
use textmetrics::metrics::runner::run_file;

fn main() {
    let matches = Command::new("convert-numbers")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert integers from a file to binary and hexadecimal")
        .arg(
            Arg::new("input")
                .help("Path to the input file, one integer per line")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Report format: text or json")
                .default_value("text"),
        )
        .get_matches();

    let input = matches.get_one::<String>("input").expect("input is required");
    let format_name = matches
        .get_one::<String>("format")
        .expect("format has a default");
    let format = ReportFormat::from_name(format_name).unwrap_or_else(|| {
        eprintln!("Unknown format '{}'", format_name);
        eprintln!("Available formats: text, json");
        std::process::exit(1);
    });

    let report = run_file(ConversionAccumulator::new(), input).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    for failure in &report.failures {
        eprintln!(
            "line {}: not a valid integer: {}",
            failure.line_no, failure.content
        );
    }

    print!("{}", report.render(format));

    if let Err(e) = write_report(&report, format) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
