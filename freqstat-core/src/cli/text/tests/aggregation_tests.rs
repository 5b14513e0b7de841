use crate::cli::text::{TextAggregator, TextTotals, collect_text_properties};
use pretty_assertions::assert_eq;
use std::io::Cursor;

#[test]
fn repeated_words_accumulate_per_occurrence() {
    // Arrange
    let mut aggregator = TextAggregator::new();

    // Act
    aggregator.push("aa aa");
    let properties = aggregator.finish();

    // Assert
    assert_eq!(properties.words.get("aa"), Some(2));
    assert_eq!(properties.characters.get("a"), Some(4));
    assert_eq!(properties.digrams.get("aa"), Some(2));
    assert!(properties.trigrams.is_empty());
}

#[test]
fn single_letter_word_counts_only_as_unigram() {
    let mut aggregator = TextAggregator::new();

    aggregator.push("I");
    let properties = aggregator.finish();

    assert_eq!(properties.words.get("I"), Some(1));
    assert_eq!(properties.characters.get("I"), Some(1));
    assert!(properties.digrams.is_empty());
    assert!(properties.trigrams.is_empty());
}

#[test]
fn every_table_is_filled_from_one_word() {
    let mut aggregator = TextAggregator::new();

    aggregator.push("abcd.");
    let properties = aggregator.finish();

    assert_eq!(
        properties.totals(),
        TextTotals {
            words: 1,
            characters: 4,
            digrams: 3,
            trigrams: 2,
        }
    );
    assert_eq!(properties.trigrams.get("abc"), Some(1));
    assert_eq!(properties.trigrams.get("bcd"), Some(1));
}

#[test]
fn words_are_case_sensitive() {
    let mut aggregator = TextAggregator::new();

    aggregator.push("The the THE");
    let properties = aggregator.finish();

    assert_eq!(properties.words.len(), 3);
    assert_eq!(properties.characters.get("T"), Some(2));
    assert_eq!(properties.characters.get("t"), Some(1));
}

#[test]
fn reader_without_trailing_newline_still_counts_last_word() {
    let input = Cursor::new("first line\nlast");

    let properties = collect_text_properties(input).unwrap();

    assert_eq!(properties.words.get("last"), Some(1));
    assert_eq!(properties.words.len(), 3);
}

#[test]
fn invalid_utf8_separates_words() {
    let input = Cursor::new(b"ab\xffcd".to_vec());

    let properties = collect_text_properties(input).unwrap();

    assert_eq!(properties.words.get("ab"), Some(1));
    assert_eq!(properties.words.get("cd"), Some(1));
}

#[test]
fn empty_reader_yields_empty_tables() {
    let properties = collect_text_properties(Cursor::new("")).unwrap();

    assert!(properties.words.is_empty());
    assert!(properties.characters.is_empty());
    assert!(properties.digrams.is_empty());
    assert!(properties.trigrams.is_empty());
}
