/// Whole words, ranked.
pub const WORDS_FILE: &str = "words.txt";
/// Single characters, ranked.
pub const CHARACTER_FILE: &str = "character.txt";
pub const DIGRAM_FILE: &str = "digram.txt";
pub const TRIGRAM_FILE: &str = "trigram.txt";

/// N-gram lengths counted for every word.
pub const NGRAM_LENGTHS: [usize; 3] = [1, 2, 3];
