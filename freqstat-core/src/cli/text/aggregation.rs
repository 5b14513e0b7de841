use crate::cli::text::constants::NGRAM_LENGTHS;
use crate::cli::text::tokenizer::{WordScanner, ngrams};
use crate::tally::CountMap;

/// The four frequency tables of one text.
#[derive(Debug, Clone, Default)]
pub struct TextProperties {
    pub words: CountMap,
    pub characters: CountMap,
    pub digrams: CountMap,
    pub trigrams: CountMap,
}

/// Distinct keys per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTotals {
    pub words: usize,
    pub characters: usize,
    pub digrams: usize,
    pub trigrams: usize,
}

impl TextProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `word` and of every n-gram inside it.
    pub fn record_word(&mut self, word: &str) {
        self.words.increment(word);

        for n in NGRAM_LENGTHS {
            let table = self.ngram_table_mut(n);
            for gram in ngrams(word, n) {
                table.increment(gram);
            }
        }
    }

    fn ngram_table_mut(&mut self, n: usize) -> &mut CountMap {
        match n {
            1 => &mut self.characters,
            2 => &mut self.digrams,
            _ => &mut self.trigrams,
        }
    }

    pub fn totals(&self) -> TextTotals {
        TextTotals {
            words: self.words.len(),
            characters: self.characters.len(),
            digrams: self.digrams.len(),
            trigrams: self.trigrams.len(),
        }
    }
}

/// Feeds text through a [`WordScanner`] into [`TextProperties`].
#[derive(Debug, Default)]
pub struct TextAggregator {
    scanner: WordScanner,
    properties: TextProperties,
}

impl TextAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: &str) {
        let properties = &mut self.properties;
        self.scanner
            .scan(text, &mut |word: &str| properties.record_word(word));
    }

    /// Flushes a word left open at end of input and returns the tables.
    pub fn finish(mut self) -> TextProperties {
        let properties = &mut self.properties;
        self.scanner
            .flush(&mut |word: &str| properties.record_word(word));
        self.properties
    }
}
