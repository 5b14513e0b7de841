use crate::cli::web::render::render_report;
use crate::cli::web::stats_aggregation::WebStatsAggregator;
use crate::cli::web::types::WebStats;
use crate::cli::{for_each_line, open_input};
use crate::error::StatsError;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct WebArgs {
    /// Access log in common log format (defaults to stdin)
    pub input: Option<PathBuf>,
}

pub fn run_web(args: &WebArgs) -> Result<WebStats, StatsError> {
    let reader = open_input(args.input.as_deref())?;
    let stdout = io::stdout();
    web_stats(reader, stdout.lock())
}

/// Reads the whole log, then writes the report to `out`.
///
/// Nothing is written if reading fails.
pub fn web_stats<R, W>(reader: R, mut out: W) -> Result<WebStats, StatsError>
where
    R: BufRead,
    W: Write,
{
    let stats = collect_web_stats(reader)?;

    out.write_all(render_report(&stats).as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| StatsError::WriteReport { source })?;

    tracing::info!(
        accesses = stats.accesses,
        unmatched = stats.unmatched_lines,
        hosts = stats.hosts.len(),
        dates = stats.dates.len(),
        "web statistics written"
    );

    Ok(stats)
}

pub fn collect_web_stats<R: BufRead>(reader: R) -> Result<WebStats, StatsError> {
    let mut aggregator = WebStatsAggregator::new()?;
    for_each_line(reader, |line, raw_len| aggregator.push_raw_line(line, raw_len))?;
    Ok(aggregator.finish())
}
