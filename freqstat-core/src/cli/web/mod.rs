//! Web Statistics Pipeline
//!
//! Reads a web server access log in common log format and prints a report
//! of who accessed what and when.
//!
//! Every line is counted towards the raw totals (accesses and log size).
//! Lines that match the log grammar are then broken into fields, and each
//! field feeds one or more tables: hosts, transfer volume per host, domains,
//! top level domains, requested URLs, URL areas, dates, days of the week and
//! hours of the day. A field that cannot be interpreted only drops out of the
//! tables derived from it; the rest of the line is still counted.
//!
//! The overall data processing architecture is:
//!
//! input
//! LogPatterns::parse_line
//! LogRecord
//! WebStatsAggregator
//! WebStats
//! render_report
//!

mod calendar;
mod constants;
mod host;
mod parse;
mod render;
mod run;
mod stats_aggregation;
mod types;

#[cfg(test)]
mod tests;

pub use calendar::{month_number, weekday_name};
pub use constants::*;
pub use host::DomainParts;
pub use parse::LogPatterns;
pub use render::{render_listing, render_report, render_summary, render_top};
pub use run::{WebArgs, collect_web_stats, run_web, web_stats};
pub use stats_aggregation::WebStatsAggregator;
pub use types::{LogRecord, Summary, WebStats};
