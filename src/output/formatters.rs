//! Formatting utilities for terminal output

use crate::core::{ResponsePattern, ResponseSymbol};

/// Format a response as an emoji string
#[must_use]
pub fn response_to_emoji(response: &ResponsePattern) -> String {
    response
        .symbols()
        .iter()
        .map(|symbol| match symbol {
            ResponseSymbol::Exact => '🟩',
            ResponseSymbol::Partial => '🟧',
            ResponseSymbol::Absent => '⬛',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an expected-size score as a bar relative to the candidate count
#[must_use]
pub fn score_bar(score: f64, total_candidates: usize, width: usize) -> String {
    create_progress_bar(score, (total_candidates as f64).max(1.0), width)
}
