pub mod fixtures;
pub mod tracing;

pub use self::fixtures::{fixture_path, fixture_reader, read_ranked_file};
pub use self::tracing::{CapturedEvent, captured_events, init_test_tracing};
