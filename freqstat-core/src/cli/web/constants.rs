use crate::tally::Limit;

pub const REPORT_TITLE: &str = "WWW server statistics";
pub const SUMMARY_TITLE: &str = "Summary";

/// A titled ranking of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub title: &'static str,
    pub limit: Limit,
}

pub const TOP_REQUESTS: Listing = Listing {
    title: "Top 20 Requests",
    limit: Limit::Top(20),
};
pub const TOP_AREAS: Listing = Listing {
    title: "Top 20 Area Requests",
    limit: Limit::Top(20),
};
pub const TOP_HOSTS: Listing = Listing {
    title: "Top 10 Hosts",
    limit: Limit::Top(10),
};
pub const TOP_HOSTS_BY_TRANSFER: Listing = Listing {
    title: "Top 10 Hosts by Transfer",
    limit: Limit::Top(10),
};
pub const TOP_DOMAINS: Listing = Listing {
    title: "Top 10 Domains",
    limit: Limit::Top(10),
};
pub const TOP_LEVEL_DOMAINS: Listing = Listing {
    title: "Top 20 Top Level Domain Accesses",
    limit: Limit::Top(20),
};
pub const BY_DAY_OF_WEEK: Listing = Listing {
    title: "Accesses by Day of Week",
    limit: Limit::All,
};
pub const BY_HOUR: Listing = Listing {
    title: "Accesses by Local Hour",
    limit: Limit::All,
};
/// Listed in date key order, not ranked.
pub const BY_DATE_TITLE: &str = "Accesses by Date";

pub const BYTES_PER_MB: u64 = 1024 * 1024;
pub const BYTES_PER_GB: u64 = 1024 * BYTES_PER_MB;
