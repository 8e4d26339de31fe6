//! SQL script tokenizer

mod scan;
pub mod sql;

pub use scan::{Scanner, Splitter};
