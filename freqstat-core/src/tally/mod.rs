//! Accumulator mappings and the two ways of ranking them.
//!
//! Every statistic the reports print is a key -> count table. The pipelines
//! only ever add to a table while reading input; once input is exhausted the
//! tables are read back, ranked, and rendered.

mod count_map;
mod ranking;


pub use count_map::*;
pub use ranking::*;
