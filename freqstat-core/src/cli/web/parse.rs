use crate::cli::web::types::LogRecord;
use crate::error::StatsError;
use regex::Regex;

// 192.168.136.16 - - [26/Jan/2004:19:45:48 +0200] "GET /c136.html HTTP/1.1" 200 1674
//
// Character classes are spelled out in ASCII so that `\w` and `\d` keep their
// narrow meaning.
const LOG_LINE: &str = concat!(
    r"^(?P<host>[-A-Za-z0-9_.]+)\s+",
    r"[-A-Za-z0-9_]+\s+",           // ident
    r"[-A-Za-z0-9_]+\s+",           // user
    r"\[(?P<day>[0-9]+)/",
    r"(?P<month>[A-Za-z0-9_]+)/",
    r"(?P<year>[0-9]+):",
    r"(?P<hour>[0-9]+):",
    r"(?P<minute>[0-9]+)",
    r"[^\]]+?\]\s+",                // seconds and zone
    r#""[-A-Za-z0-9_]+\s*"#,        // method
    r"(?P<url>\S*)",
    r#"[^"]*?"\s+"#,                // protocol
    r"[0-9]+\s+",                   // status
    r"(?P<bytes>[-0-9]+)$",
);

/// First path segment, with or without a leading slash.
const AREA: &str = r"^/?([^/]+)";

/// Hosts ending in a numeric label were never resolved to a name.
const NUMERIC_HOST: &str = r"\.[0-9]+$";

/// Everything after the first label.
const DOMAIN: &str = r"[^.]\.(.*)";

/// Everything after the last dot.
const TOP_LEVEL_DOMAIN: &str = r".*\.(.*)";

/// The fixed patterns used to pick apart access log lines.
#[derive(Debug, Clone)]
pub struct LogPatterns {
    line: Regex,
    area: Regex,
    pub(crate) numeric_host: Regex,
    pub(crate) domain: Regex,
    pub(crate) top_level_domain: Regex,
}

impl LogPatterns {
    pub fn compile() -> Result<Self, StatsError> {
        Ok(Self {
            line: compile("log line", LOG_LINE)?,
            area: compile("area", AREA)?,
            numeric_host: compile("numeric host", NUMERIC_HOST)?,
            domain: compile("domain", DOMAIN)?,
            top_level_domain: compile("top level domain", TOP_LEVEL_DOMAIN)?,
        })
    }

    /// Extracts the report fields from a whole line.
    ///
    /// Returns `None` unless the entire line matches the grammar.
    pub fn parse_line<'a>(&self, line: &'a str) -> Option<LogRecord<'a>> {
        let caps = self.line.captures(line)?;
        let field = |name: &str| caps.name(name).map(|m| m.as_str());

        Some(LogRecord {
            host: field("host")?,
            day: field("day")?,
            month: field("month")?,
            year: field("year")?,
            hour: field("hour")?,
            minute: field("minute")?,
            url: field("url")?,
            bytes: field("bytes")?,
        })
    }

    /// The first path segment of `url`, if it has one.
    pub fn area<'a>(&self, url: &'a str) -> Option<&'a str> {
        first_group(&self.area, url)
    }
}

pub(crate) fn first_group<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, StatsError> {
    Regex::new(pattern).map_err(|source| StatsError::Pattern { name, source })
}
