use crate::cli::web::{DomainParts, LogPatterns};
use pretty_assertions::assert_eq;

fn domain_parts(host: &str) -> DomainParts<'_> {
    let patterns = LogPatterns::compile().expect("fixed patterns compile");
    patterns.domain_parts(host)
}

#[test]
fn named_host_has_domain_and_top_level_domain() {
    assert_eq!(
        domain_parts("www.example.org"),
        DomainParts {
            top_level: Some("org"),
            domain: Some("example.org"),
        }
    );
}

#[test]
fn two_label_host() {
    assert_eq!(
        domain_parts("example.gr"),
        DomainParts {
            top_level: Some("gr"),
            domain: Some("gr"),
        }
    );
}

#[test]
fn numeric_address_is_unresolved() {
    assert_eq!(domain_parts("192.168.1.20"), DomainParts::default());
}

#[test]
fn trailing_numeric_label_counts_as_numeric() {
    assert_eq!(domain_parts("host.example.42"), DomainParts::default());
}

#[test]
fn host_without_dot_has_neither_part() {
    assert_eq!(domain_parts("localhost"), DomainParts::default());
}

#[test]
fn leading_dot_yields_only_top_level_domain() {
    assert_eq!(
        domain_parts(".com"),
        DomainParts {
            top_level: Some("com"),
            domain: None,
        }
    );
}

#[test]
fn trailing_dot_yields_empty_top_level_domain() {
    assert_eq!(
        domain_parts("example.com."),
        DomainParts {
            top_level: Some(""),
            domain: Some("com."),
        }
    );
}
