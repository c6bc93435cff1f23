//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_batch_statistics, print_opener_results, print_play_result, print_score_table,
};
