use crate::error::StatsError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Opens `path` for buffered reading, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, StatsError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| StatsError::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Calls `f` with every newline-terminated chunk of input, terminator
/// included, and the chunk's size in bytes as read.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the run, so the text may be longer than the raw size. Returns the
/// number of chunks read.
pub(crate) fn for_each_chunk<R, F>(mut reader: R, mut f: F) -> Result<u64, StatsError>
where
    R: BufRead,
    F: FnMut(&str, usize),
{
    let mut buf = Vec::new();
    let mut chunks = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| StatsError::ReadInput { source })?;
        if read == 0 {
            break;
        }
        chunks += 1;
        f(&String::from_utf8_lossy(&buf), read);
    }

    Ok(chunks)
}

/// Calls `f` with every input line, stripped of its `\n` or `\r\n` ending,
/// and the line's raw size without that ending.
pub(crate) fn for_each_line<R, F>(reader: R, mut f: F) -> Result<u64, StatsError>
where
    R: BufRead,
    F: FnMut(&str, usize),
{
    for_each_chunk(reader, |chunk, raw_len| {
        let line = chunk.strip_suffix('\n').unwrap_or(chunk);
        let line = line.strip_suffix('\r').unwrap_or(line);
        // Line endings are ASCII, so they are the same size in both forms.
        f(line, raw_len - (chunk.len() - line.len()));
    })
}
