//! Candidate filtering
//!
//! Applies a constraint state over a vocabulary, keeping the consistent
//! words in their original order.

use super::constraint::ConstraintState;
use crate::core::Word;

/// Filter a vocabulary down to the words consistent with `state`
///
/// Stateless and order-preserving; safe to call concurrently on a shared
/// read-only state.
#[must_use]
pub fn filter_candidates(words: &[Word], state: &ConstraintState) -> Vec<Word> {
    words
        .iter()
        .filter(|w| state.is_consistent(w))
        .copied()
        .collect()
}
