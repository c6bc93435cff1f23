//! Core domain types
//!
//! Fundamental value types with zero external dependencies: validated words
//! and the feedback classification that drives the whole search.

mod response;
mod word;

pub use response::{ResponsePattern, ResponseSymbol};
pub use word::{WORD_LEN, Word, WordError};
