pub mod cli;
pub mod error;
pub mod logging;
pub mod tally;
