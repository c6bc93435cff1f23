//! Single-shot evaluation of one opening pair

use crate::core::Word;
use crate::solver::{ConstraintState, expected_remaining};

/// Expected candidate-set size after playing `first` then `second`
///
/// Evaluates the fixed pair from a fresh state over the full answer list.
///
/// # Errors
///
/// Returns an error if either word is invalid.
pub fn evaluate_pair(first: &str, second: &str, answers: &[Word]) -> Result<f64, String> {
    let first = Word::new(first).map_err(|e| format!("Invalid first word: {e}"))?;
    let second = Word::new(second).map_err(|e| format!("Invalid second word: {e}"))?;

    Ok(expected_remaining(
        &first,
        &ConstraintState::new(),
        answers,
        Some(&second),
    ))
}
