//! Wordle Expected-Size Minimizer
//!
//! Simulates Wordle-style feedback and searches for the guess that
//! minimizes the expected size of the remaining candidate set - a greedy,
//! partition-minimizing strategy.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minexp::core::{ResponsePattern, Word};
//! use wordle_minexp::solver::{GuesserSession, SessionConfig};
//!
//! let vocabulary: Vec<Word> = ["slate", "crate", "irate"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let mut session = GuesserSession::new(
//!     vocabulary.clone(),
//!     vocabulary,
//!     SessionConfig::default(),
//! );
//!
//! let (guess, score) = session.recommend_guess().unwrap();
//! let secret = Word::new("crate").unwrap();
//! let response = ResponsePattern::classify(&secret, &guess);
//! session.record_round(&guess, &response).unwrap();
//! assert!(score >= 0.0);
//! ```

// Core domain types
pub mod core;

// Constraint model and search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
