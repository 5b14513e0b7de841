use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a report run.
///
/// Messages leave the underlying cause to the `source` chain.
///
/// Per-line problems in the web log (unparseable lines, odd byte fields,
/// unknown month names) never surface here; the aggregators absorb them.
#[derive(Debug, Error)]
pub enum StatsError {
    //-------------------------------------------------------------------------
    // Input
    //-------------------------------------------------------------------------
    #[error("failed to open input {path}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading input")]
    ReadInput {
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Output
    //-------------------------------------------------------------------------
    #[error("error writing to file {path}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing report")]
    WriteReport {
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Startup
    //-------------------------------------------------------------------------
    #[error("invalid pattern '{name}'")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}
