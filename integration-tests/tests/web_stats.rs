use freqstat_core::cli::open_input;
use freqstat_core::cli::web::{Summary, collect_web_stats, web_stats};
use freqstat_core::error::StatsError;
use integration_tests::harness::{captured_events, fixture_path, fixture_reader, init_test_tracing};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn report_for(fixture: &str) -> String {
    let mut out = Vec::new();
    web_stats(fixture_reader(fixture), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// The section starting at `title`, up to the next blank line.
fn section<'a>(report: &'a str, title: &str) -> &'a str {
    let start = report
        .find(&format!("\n{title}\n"))
        .unwrap_or_else(|| panic!("missing section {title}"))
        + 1;
    let rest = &report[start..];
    match rest.find("\n\n") {
        Some(end) => &rest[..end + 1],
        None => rest,
    }
}

#[test]
fn summary_counts_every_line_and_distinct_keys() {
    let stats = collect_web_stats(fixture_reader("access.log")).unwrap();

    assert_eq!(
        stats.summary(),
        Summary {
            accesses: 12,
            gigabytes_transferred: 0,
            hosts: 7,
            domains: 4,
            top_level_domains: 4,
            pages: 8,
            accesses_per_day: 3,
            megabytes_per_day: 0,
            log_megabytes: 0,
        }
    );
    assert_eq!(stats.unmatched_lines, 2);
}

#[test]
fn log_size_is_the_input_size() {
    let size = std::fs::metadata(fixture_path("access.log")).unwrap().len();

    let stats = collect_web_stats(fixture_reader("access.log")).unwrap();

    assert_eq!(stats.log_bytes, size);
}

#[test]
fn summary_section_matches_template() {
    let report = report_for("access.log");

    assert_eq!(
        section(&report, "Summary"),
        "Summary\n\
         -------\n\
         Number of accesses: 12\n\
         Number of Gbytes transferred: 0\n\
         Number of hosts: 7\n\
         Number of domains: 4\n\
         Number of top level domains: 4\n\
         Number of different pages: 8\n\
         Accesses per day: 3\n\
         Mbytes per day: 0\n\
         Mbytes log file size: 0\n"
    );
}

#[test]
fn transfer_listing_ranks_hosts_by_bytes() {
    let report = report_for("access.log");

    assert_eq!(
        section(&report, "Top 10 Hosts by Transfer"),
        "Top 10 Hosts by Transfer\n\
         ------------------------\n\
         6794 192.168.1.10\n\
         4096 dialup-12.isp.net\n\
         3722 www.example.org\n\
         2186 proxy.uni.gr\n\
         209 10.0.0.7\n\
         100 host.with.bad.month\n"
    );
}

#[test]
fn weekday_listing_skips_unknown_months() {
    let report = report_for("access.log");

    assert_eq!(
        section(&report, "Accesses by Day of Week"),
        "Accesses by Day of Week\n\
         -----------------------\n\
         4 Mon\n\
         3 Tue\n\
         2 Wed\n"
    );
}

#[test]
fn date_listing_is_in_key_order() {
    let report = report_for("access.log");

    assert!(report.ends_with(
        "Accesses by Date\n\
         ----------------\n\
         4 26/Jan/2004\n\
         3 27/Jan/2004\n\
         1 28/Foo/2004\n\
         2 28/Jan/2004\n"
    ));
}

#[test]
fn domain_listings_exclude_numeric_hosts() {
    let report = report_for("access.log");

    let domains = section(&report, "Top 10 Domains");
    assert!(domains.contains("\n3 example.org\n"), "{domains}");
    assert!(domains.contains("\n2 uni.gr\n"), "{domains}");
    assert!(!domains.contains("168"), "{domains}");

    let top_level = section(&report, "Top 20 Top Level Domain Accesses");
    assert!(top_level.contains("\n3 org\n"), "{top_level}");
    assert!(top_level.contains("\n1 month\n"), "{top_level}");
}

#[test]
fn area_listing_groups_by_first_segment() {
    let report = report_for("access.log");

    let areas = section(&report, "Top 20 Area Requests");
    let rows: Vec<&str> = areas.lines().skip(2).collect();
    assert_eq!(rows.len(), 4);
    assert!(rows.contains(&"3 docs"));
    assert!(rows.contains(&"3 c136.html"));
    assert!(rows.contains(&"2 images"));
    assert_eq!(rows.last(), Some(&"1 cgi-bin"));
}

#[test]
fn empty_log_renders_zeroed_report() {
    let mut out = Vec::new();

    let stats = web_stats(Cursor::new(""), &mut out).unwrap();

    assert_eq!(stats.accesses, 0);
    let report = String::from_utf8(out).unwrap();
    assert!(report.contains("Accesses per day: 0\n"));
    assert!(report.ends_with("Accesses by Date\n----------------\n"));
}

#[test]
fn completed_run_is_logged() {
    init_test_tracing();

    let mut out = Vec::new();
    web_stats(fixture_reader("access.log"), &mut out).unwrap();

    let events = captured_events("web statistics written");
    assert!(
        events
            .iter()
            .any(|e| e.field("accesses") == Some("12") && e.field("unmatched") == Some("2")),
        "{events:?}"
    );
}

#[test]
fn missing_input_file_is_an_open_error() {
    let missing = fixture_path("no-such.log");

    match open_input(Some(&missing)) {
        Err(StatsError::OpenInput { path, .. }) => assert_eq!(path, missing),
        Err(other) => panic!("Expected OpenInput, got {other:?}"),
        Ok(_) => panic!("Expected OpenInput, got a reader"),
    }
}
