//! Text Properties Pipeline
//!
//! Reads free-form text and counts how often every word, character,
//! digram and trigram occurs, then writes each table to its own file
//! ranked by frequency.
//!
//! A word is a maximal run of alphabetic characters. Everything else
//! (whitespace, punctuation, digits) only separates words and is never
//! counted itself. Each word is counted whole, and every contiguous slice
//! of one, two and three characters inside it is counted in the matching
//! n-gram table.
//!
//! The overall data processing architecture is:
//!
//! input
//! WordScanner
//! TextAggregator
//! TextProperties
//! write_report
//!

mod aggregation;
mod constants;
mod render;
mod run;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use aggregation::{TextAggregator, TextProperties, TextTotals};
pub use constants::*;
pub use render::{write_ranked, write_report};
pub use run::{TextArgs, collect_text_properties, run_text, text_properties};
pub use tokenizer::{WordScanner, ngrams};
