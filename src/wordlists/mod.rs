//! Vocabulary loading
//!
//! The solver takes two caller-supplied lists: the guessable words and the
//! possible answers. A word may be a legal guess without being a legal
//! answer.

mod loader;

pub use loader::{load_from_file, words_from_slice};
