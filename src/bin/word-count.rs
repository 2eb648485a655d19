//! Word-frequency counter CLI
//!
//! Reads a text file, tallies whitespace-delimited tokens case-sensitively,
//! echoes the sorted frequency table to stdout and writes it to
//! `WordCountResults.txt` in the current directory.
//!
//! Usage:
//!   word-count `<input>` [--format `<text|json>`]

use clap::{Arg, Command};
use textmetrics::metrics::report::{write_report, Report, ReportFormat};
use textmetrics::metrics::runner::run_file;
use textmetrics::metrics::words::WordTally;

fn main() {
    let matches = Command::new("word-count")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count word frequencies in a file")
        .arg(
            Arg::new("input")
                .help("Path to the input text file")
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

    let report = run_file(WordTally::new(), input).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    print!("{}", report.render(format));

    if let Err(e) = write_report(&report, format) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
