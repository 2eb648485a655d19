//! # textmetrics
//!
//! Batch text metrics over line-oriented files.
//!
//! Three independent tools share one processing shape: feed every line of an
//! input file into an accumulator, finalize the accumulator into an immutable
//! report, write the report once.
//!
//! - [`metrics::convert`] parses integers and renders them in binary and
//!   hexadecimal.
//! - [`metrics::words`] tallies whitespace-delimited tokens into a sorted
//!   frequency table.
//! - [`metrics::stats`] computes count, mean, variance, standard deviation,
//!   median and mode in a single pass.
//!
//! Per-line parse failures are recorded and reported, never fatal; only I/O
//! failures abort a run. See [`metrics::runner`] for the driver and error
//! type, [`metrics::report`] for rendering and artifact writing.

pub mod metrics;
