mod input;
pub mod text;
pub mod web;


pub use input::open_input;
pub(crate) use input::{for_each_chunk, for_each_line};
