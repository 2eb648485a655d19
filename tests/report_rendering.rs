//! Snapshot tests for rendered text reports
//!
//! The elapsed figure is pinned before rendering; everything else in a report
//! is a pure function of the input.

use std::time::Duration;

use textmetrics::metrics::convert::ConversionAccumulator;
use textmetrics::metrics::report::Report;
use textmetrics::metrics::runner::run_source;
use textmetrics::metrics::stats::StatsAccumulator;
use textmetrics::metrics::words::WordTally;

#[test]
fn conversion_report_rendering() {
    let mut report = run_source(ConversionAccumulator::new(), "0\n255\n-4096\n1.5\n");
    report.elapsed = Duration::from_micros(120);

    insta::assert_snapshot!(report.render_text(), @r###"
    0 -> BIN:0 HEX:0
    255 -> BIN:11111111 HEX:FF
    -4096 -> BIN:-1000000000000 HEX:-1000
    TOTAL:3 ERRORS:1 TIME:0.00012s
    "###);
}

#[test]
fn word_report_rendering() {
    let mut report = run_source(WordTally::new(), "to be or not to be\n");
    report.elapsed = Duration::from_micros(80);

    insta::assert_snapshot!(report.render_text(), @r###"
    be 2
    to 2
    not 1
    or 1
    DISTINCT:4 TOKENS:6 TIME:0.00008s
    "###);
}

#[test]
fn stats_report_rendering() {
    let mut report = run_source(StatsAccumulator::new(), "2\n4\n4\n4\n5\n5\n7\n9\n");
    report.elapsed = Duration::from_micros(90);

    insta::assert_snapshot!(report.render_text(), @r###"
    COUNT:8
    MEAN:5
    VARIANCE:4
    STDEV:2
    MEDIAN:4.5
    MODE:4
    ERRORS:0 TIME:0.00009s
    "###);
}

#[test]
fn stats_report_rendering_no_valid_data() {
    let mut report = run_source(StatsAccumulator::new(), "abc\n--\n");
    report.elapsed = Duration::from_micros(50);

    insta::assert_snapshot!(report.render_text(), @r###"
    no valid data
    ERRORS:2 TIME:0.00005s
    "###);
}
