//! Descriptive-statistics CLI
//!
//! Reads one number per line from the input file, computes count, mean,
//! variance, standard deviation, median and mode, echoes the report to
//! stdout and writes it to `StatisticsResults.txt` in the current directory.
//!
//! Usage:
//!   compute-stats `<input>` [--format `<text|json>`]

use clap::{Arg, Command};
use textmetrics::metrics::report::{write_report, Report, ReportFormat};
use textmetrics::metrics::runner::run_file;
use textmetrics::metrics::stats::StatsAccumulator;

fn main() {
    let matches = Command::new("compute-stats")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute descriptive statistics over a file of numbers")
        .arg(
            Arg::new("input")
                .help("Path to the input file, one number per line")
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

    let report = run_file(StatsAccumulator::new(), input).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    for failure in &report.failures {
        eprintln!(
            "line {}: not a valid number: {}",
            failure.line_no, failure.content
        );
    }

    print!("{}", report.render(format));

    if let Err(e) = write_report(&report, format) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
