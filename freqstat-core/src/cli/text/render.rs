use crate::cli::text::aggregation::TextProperties;
use crate::cli::text::constants::{CHARACTER_FILE, DIGRAM_FILE, TRIGRAM_FILE, WORDS_FILE};
use crate::error::StatsError;
use crate::tally::{CountMap, rank_with_key_tiebreak};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes `table` as `<count> <key>` lines, highest count first.
pub fn write_ranked<W: Write>(table: &CountMap, out: &mut W) -> io::Result<()> {
    for (key, count) in rank_with_key_tiebreak(table.iter()) {
        writeln!(out, "{count} {key}")?;
    }
    Ok(())
}

/// Writes the four ranked tables into `dir` under their fixed names.
pub fn write_report(properties: &TextProperties, dir: &Path) -> Result<(), StatsError> {
    let files = [
        (WORDS_FILE, &properties.words),
        (CHARACTER_FILE, &properties.characters),
        (DIGRAM_FILE, &properties.digrams),
        (TRIGRAM_FILE, &properties.trigrams),
    ];

    for (name, table) in files {
        let path = dir.join(name);
        write_ranked_file(table, &path).map_err(|source| StatsError::WriteOutput {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), entries = table.len(), "wrote ranked table");
    }

    Ok(())
}

fn write_ranked_file(table: &CountMap, path: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_ranked(table, &mut out)?;
    out.flush()
}
