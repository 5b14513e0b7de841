use crate::tally::{CountMap, OrderedCountMap};

/// Fields of one access log line that feed the report.
///
/// Borrowed from the line; nothing outlives the line being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub host: &'a str,
    pub day: &'a str,
    /// Three letter month name as it appears in the log, e.g. `Jan`.
    pub month: &'a str,
    pub year: &'a str,
    pub hour: &'a str,
    pub minute: &'a str,
    pub url: &'a str,
    /// Digits, or `-` when the server sent no content length.
    pub bytes: &'a str,
}

impl LogRecord<'_> {
    /// `day/month/year` exactly as written in the log.
    pub fn date_key(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Everything accumulated from one log.
#[derive(Debug, Clone, Default)]
pub struct WebStats {
    pub hosts: CountMap,
    pub hours: CountMap,
    pub requests: CountMap,
    pub areas: CountMap,
    pub transfer_by_host: CountMap,
    pub top_level_domains: CountMap,
    pub domains: CountMap,
    pub dates: OrderedCountMap,
    pub weekdays: CountMap,

    /// Every input line, parsed or not.
    pub accesses: u64,
    /// Sum of the numeric byte fields of parsed lines.
    pub bytes_transferred: u64,
    /// Input size: line lengths plus one newline each.
    pub log_bytes: u64,
    /// Lines that did not match the log grammar.
    pub unmatched_lines: u64,
}

/// Scalar figures printed in the report's summary section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub accesses: u64,
    pub gigabytes_transferred: u64,
    pub hosts: usize,
    pub domains: usize,
    pub top_level_domains: usize,
    pub pages: usize,
    pub accesses_per_day: u64,
    pub megabytes_per_day: u64,
    pub log_megabytes: u64,
}
