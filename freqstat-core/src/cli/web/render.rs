use crate::cli::web::constants::{
    BY_DATE_TITLE, BY_DAY_OF_WEEK, BY_HOUR, Listing, REPORT_TITLE, SUMMARY_TITLE, TOP_AREAS,
    TOP_DOMAINS, TOP_HOSTS, TOP_HOSTS_BY_TRANSFER, TOP_LEVEL_DOMAINS, TOP_REQUESTS,
};
use crate::cli::web::types::{Summary, WebStats};
use crate::tally::top_by_count;

/// Renders the full report: banner, summary, then every listing in order.
pub fn render_report(stats: &WebStats) -> String {
    let mut out = String::new();

    let underline = "=".repeat(REPORT_TITLE.chars().count());
    out.push_str(&format!("\t\t\t{REPORT_TITLE}\n\t\t\t{underline}\n"));

    render_summary(&mut out, &stats.summary());

    render_top(&mut out, TOP_REQUESTS, stats.requests.iter());
    render_top(&mut out, TOP_AREAS, stats.areas.iter());
    render_top(&mut out, TOP_HOSTS, stats.hosts.iter());
    render_top(&mut out, TOP_HOSTS_BY_TRANSFER, stats.transfer_by_host.iter());
    render_top(&mut out, TOP_DOMAINS, stats.domains.iter());
    render_top(&mut out, TOP_LEVEL_DOMAINS, stats.top_level_domains.iter());
    render_top(&mut out, BY_DAY_OF_WEEK, stats.weekdays.iter());
    render_top(&mut out, BY_HOUR, stats.hours.iter());
    render_listing(&mut out, BY_DATE_TITLE, stats.dates.iter());

    out
}

pub fn render_summary(out: &mut String, summary: &Summary) {
    push_header(out, SUMMARY_TITLE);

    out.push_str(&format!(
        "Number of accesses: {}\n\
         Number of Gbytes transferred: {}\n\
         Number of hosts: {}\n\
         Number of domains: {}\n\
         Number of top level domains: {}\n\
         Number of different pages: {}\n\
         Accesses per day: {}\n\
         Mbytes per day: {}\n\
         Mbytes log file size: {}\n",
        summary.accesses,
        summary.gigabytes_transferred,
        summary.hosts,
        summary.domains,
        summary.top_level_domains,
        summary.pages,
        summary.accesses_per_day,
        summary.megabytes_per_day,
        summary.log_megabytes,
    ));
}

/// Renders a titled listing ranked by count and cut to the listing's limit.
pub fn render_top<'a, I>(out: &mut String, listing: Listing, entries: I)
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    push_header(out, listing.title);
    for (key, count) in top_by_count(entries, listing.limit) {
        push_entry(out, key, count);
    }
}

/// Renders a titled listing in the order `entries` yields them.
pub fn render_listing<'a, I>(out: &mut String, title: &str, entries: I)
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    push_header(out, title);
    for (key, count) in entries {
        push_entry(out, key, count);
    }
}

fn push_header(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}

fn push_entry(out: &mut String, key: &str, count: u64) {
    out.push_str(&format!("{count} {key}\n"));
}
