use std::cmp::Ordering;

/// How many entries a ranked listing may print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Print every entry.
    All,
    /// Print at most this many entries. `Top(0)` prints everything.
    Top(usize),
}

impl Limit {
    fn cap(self, len: usize) -> usize {
        match self {
            Limit::Top(n) if n > 0 => n.min(len),
            _ => len,
        }
    }
}

/// Orders entries by count descending, then by key descending.
///
/// This is a total order over distinct keys, so the output is fully
/// reproducible regardless of how the source table iterates.
pub fn rank_with_key_tiebreak<'a, I>(entries: I) -> Vec<(&'a str, u64)>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut ranked: Vec<_> = entries.into_iter().collect();
    ranked.sort_unstable_by(|a, b| compare_count_then_key(*a, *b));
    ranked
}

fn compare_count_then_key(a: (&str, u64), b: (&str, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| b.0.cmp(a.0))
}

/// Orders entries by count descending and keeps the first `limit`.
///
/// Entries with equal counts keep whatever relative order the source table
/// produced; callers must not rely on it.
pub fn top_by_count<'a, I>(entries: I, limit: Limit) -> Vec<(&'a str, u64)>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut ranked: Vec<_> = entries.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit.cap(ranked.len()));
    ranked
}
