use crate::cli::{for_each_chunk, open_input};
use crate::cli::text::aggregation::{TextAggregator, TextProperties, TextTotals};
use crate::cli::text::render::write_report;
use crate::error::StatsError;
use clap::Args;
use std::io::BufRead;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct TextArgs {
    /// Directory the ranked tables are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Text to analyze (defaults to stdin)
    pub input: Option<PathBuf>,
}

pub fn run_text(args: &TextArgs) -> Result<TextTotals, StatsError> {
    let reader = open_input(args.input.as_deref())?;
    text_properties(reader, &args.output_dir)
}

/// Reads all of `reader`, then writes the four ranked tables into `output_dir`.
///
/// Nothing is written if reading fails.
pub fn text_properties<R: BufRead>(reader: R, output_dir: &Path) -> Result<TextTotals, StatsError> {
    let properties = collect_text_properties(reader)?;
    write_report(&properties, output_dir)?;

    let totals = properties.totals();
    tracing::info!(
        words = totals.words,
        characters = totals.characters,
        digrams = totals.digrams,
        trigrams = totals.trigrams,
        output_dir = %output_dir.display(),
        "text properties written"
    );

    Ok(totals)
}

pub fn collect_text_properties<R: BufRead>(reader: R) -> Result<TextProperties, StatsError> {
    let mut aggregator = TextAggregator::new();
    // Chunks keep their trailing newline, which ends any word in progress.
    for_each_chunk(reader, |chunk, _| aggregator.push(chunk))?;
    Ok(aggregator.finish())
}
