/// Splits a character stream into words.
///
/// The scanner keeps the word in progress between calls, so a word split
/// across two input chunks is still reported once. Call [`flush`] at end of
/// input to emit a trailing word.
///
/// [`flush`]: WordScanner::flush
#[derive(Debug, Default)]
pub struct WordScanner {
    word: String,
}

impl WordScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one character, calling `on_word` if it completes a word.
    pub fn push<F>(&mut self, c: char, on_word: &mut F)
    where
        F: FnMut(&str),
    {
        if c.is_alphabetic() {
            self.word.push(c);
        } else {
            self.flush(on_word);
        }
    }

    pub fn scan<F>(&mut self, text: &str, on_word: &mut F)
    where
        F: FnMut(&str),
    {
        for c in text.chars() {
            self.push(c, on_word);
        }
    }

    /// Emits the word in progress, if any.
    pub fn flush<F>(&mut self, on_word: &mut F)
    where
        F: FnMut(&str),
    {
        if !self.word.is_empty() {
            on_word(&self.word);
            self.word.clear();
        }
    }
}

/// All contiguous `n`-character slices of `word`, left to right.
///
/// Yields `max(0, len - n + 1)` slices, where `len` counts characters, not
/// bytes.
pub fn ngrams(word: &str, n: usize) -> impl Iterator<Item = &str> {
    let bounds: Vec<usize> = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .collect();

    let windows = if n == 0 {
        0
    } else {
        bounds.len().saturating_sub(n)
    };

    (0..windows).map(move |i| &word[bounds[i]..bounds[i + n]])
}
