//! Guess selection over a vocabulary
//!
//! Scores every word in a guess pool by its expected remaining-set size and
//! picks the minimizer. Scoring of distinct guesses is independent (each
//! fork is private), so the pool is sharded across rayon workers; the merge
//! takes the lexicographic minimum of (score, pool index), which reproduces
//! sequential first-occurrence tie-breaking exactly.

use super::constraint::ConstraintState;
use super::expectation::expected_remaining;
use crate::core::Word;
use rayon::prelude::*;

/// Select the guess with the minimum expected remaining-set size
///
/// Returns the winning word and its score, or `None` if the pool is empty.
/// Ties are broken by first occurrence in pool order.
///
/// # Examples
/// ```
/// use wordle_minexp::core::Word;
/// use wordle_minexp::solver::{ConstraintState, select_best_guess};
///
/// let pool = vec![Word::new("ccccc").unwrap(), Word::new("aaaaa").unwrap()];
/// let candidates = vec![Word::new("aaaaa").unwrap(), Word::new("bbbbb").unwrap()];
/// let state = ConstraintState::new();
///
/// let (best, score) = select_best_guess(&pool, &state, &candidates).unwrap();
/// assert_eq!(best.as_str(), "aaaaa");
/// assert!((score - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    pool: &'a [Word],
    state: &ConstraintState,
    candidates: &[Word],
) -> Option<(&'a Word, f64)> {
    pool.par_iter()
        .enumerate()
        .map(|(index, guess)| (index, expected_remaining(guess, state, candidates, None)))
        .min_by(|(i1, s1), (i2, s2)| s1.total_cmp(s2).then_with(|| i1.cmp(i2)))
        .map(|(index, score)| (&pool[index], score))
}

/// Score every pool word, in pool order
///
/// The read-only reporting side channel: callers may stream or sort this
/// table however they like without affecting selection.
#[must_use]
pub fn score_table(pool: &[Word], state: &ConstraintState, candidates: &[Word]) -> Vec<(Word, f64)> {
    pool.par_iter()
        .map(|guess| (*guess, expected_remaining(guess, state, candidates, None)))
        .collect()
}
