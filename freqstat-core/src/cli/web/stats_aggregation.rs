use crate::cli::web::calendar::weekday_name;
use crate::cli::web::constants::{BYTES_PER_GB, BYTES_PER_MB};
use crate::cli::web::parse::LogPatterns;
use crate::cli::web::types::{LogRecord, Summary, WebStats};
use crate::error::StatsError;

pub struct WebStatsAggregator {
    patterns: LogPatterns,
    stats: WebStats,
}

impl WebStatsAggregator {
    pub fn new() -> Result<Self, StatsError> {
        Ok(Self::with_patterns(LogPatterns::compile()?))
    }

    pub fn with_patterns(patterns: LogPatterns) -> Self {
        Self {
            patterns,
            stats: WebStats::default(),
        }
    }

    /// Accounts for one log line, without its line terminator.
    pub fn push_line(&mut self, line: &str) {
        self.push_raw_line(line, line.len());
    }

    /// Like [`push_line`], with `raw_len` the size the line had in the input
    /// before any invalid UTF-8 was replaced.
    ///
    /// [`push_line`]: WebStatsAggregator::push_line
    pub fn push_raw_line(&mut self, line: &str, raw_len: usize) {
        self.stats.accesses += 1;
        self.stats.log_bytes = self.stats.log_bytes.saturating_add(raw_len as u64 + 1);

        let Some(record) = self.patterns.parse_line(line) else {
            self.stats.unmatched_lines += 1;
            tracing::debug!(line = self.stats.accesses, "skipping unparseable log line");
            return;
        };

        self.push_record(&record);
    }

    fn push_record(&mut self, record: &LogRecord<'_>) {
        let stats = &mut self.stats;

        stats.hours.increment(record.hour);
        stats.hosts.increment(record.host);

        // `-` means no content length; only the hit above is counted.
        if let Ok(bytes) = record.bytes.parse::<u64>() {
            stats.bytes_transferred = stats.bytes_transferred.saturating_add(bytes);
            stats.transfer_by_host.add(record.host, bytes);
        }

        let parts = self.patterns.domain_parts(record.host);
        if let Some(top_level) = parts.top_level {
            stats.top_level_domains.increment(top_level);
        }
        if let Some(domain) = parts.domain {
            stats.domains.increment(domain);
        }

        stats.requests.increment(record.url);
        if let Some(area) = self.patterns.area(record.url) {
            stats.areas.increment(area);
        }

        stats.dates.increment(&record.date_key());
        if let Some(weekday) = weekday_name(record.day, record.month, record.year) {
            stats.weekdays.increment(weekday);
        }
    }

    pub fn stats(&self) -> &WebStats {
        &self.stats
    }

    pub fn finish(self) -> WebStats {
        self.stats
    }
}

impl WebStats {
    pub fn summary(&self) -> Summary {
        // No parsed line means no dates; report zero per day.
        let days = self.dates.len() as u64;

        Summary {
            accesses: self.accesses,
            gigabytes_transferred: self.bytes_transferred / BYTES_PER_GB,
            hosts: self.hosts.len(),
            domains: self.domains.len(),
            top_level_domains: self.top_level_domains.len(),
            pages: self.requests.len(),
            accesses_per_day: self.accesses.checked_div(days).unwrap_or(0),
            megabytes_per_day: self.bytes_transferred.checked_div(days).unwrap_or(0) / BYTES_PER_MB,
            log_megabytes: self.log_bytes / BYTES_PER_MB,
        }
    }
}
