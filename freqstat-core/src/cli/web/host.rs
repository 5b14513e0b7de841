use crate::cli::web::parse::{LogPatterns, first_group};

/// Domain names derived from a remote host.
///
/// The two parts are extracted independently: a host such as `.com` has a
/// top level domain but no domain, and neither is set for numeric addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomainParts<'a> {
    /// Text after the last dot, e.g. `org` for `www.example.org`.
    pub top_level: Option<&'a str>,
    /// Text after the first label, e.g. `example.org` for `www.example.org`.
    pub domain: Option<&'a str>,
}

impl LogPatterns {
    pub fn domain_parts<'a>(&self, host: &'a str) -> DomainParts<'a> {
        if self.numeric_host.is_match(host) {
            return DomainParts::default();
        }

        DomainParts {
            top_level: first_group(&self.top_level_domain, host),
            domain: first_group(&self.domain, host),
        }
    }
}
