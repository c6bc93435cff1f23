//! Expected remaining-set size for a candidate guess
//!
//! The scoring objective of the whole solver: assuming the secret is drawn
//! uniformly from the current candidate set, how many candidates are
//! expected to survive the feedback to this guess?

use super::constraint::ConstraintState;
use super::filter::filter_candidates;
use crate::core::{ResponsePattern, Word};
use rustc_hash::FxHashMap;

/// Expected candidate-set size after playing `guess`
///
/// Candidates are bucketed by the response each would produce as the
/// secret. For every observed response the constraint state is forked,
/// updated, and used to re-filter the candidate set; the result is the
/// bucket-probability-weighted sum of the filtered sizes.
///
/// With `second_guess` present this evaluates a fixed pair instead: play
/// `guess`, observe the response, then commit to playing `second_guess`
/// against the narrowed set. One level of lookahead, no deeper recursion,
/// and no search over second guesses.
///
/// The result is bounded by `[0, candidates.len()]`.
///
/// # Examples
/// ```
/// use wordle_minexp::core::Word;
/// use wordle_minexp::solver::{ConstraintState, expected_remaining};
///
/// let candidates = vec![Word::new("aaaaa").unwrap(), Word::new("bbbbb").unwrap()];
/// let state = ConstraintState::new();
///
/// let guess = Word::new("aaaaa").unwrap();
/// let score = expected_remaining(&guess, &state, &candidates, None);
/// assert!((score - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn expected_remaining(
    guess: &Word,
    state: &ConstraintState,
    candidates: &[Word],
    second_guess: Option<&Word>,
) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    // Count how often each response would be observed
    let mut buckets: FxHashMap<ResponsePattern, usize> = FxHashMap::default();
    for secret in candidates {
        *buckets
            .entry(ResponsePattern::classify(secret, guess))
            .or_insert(0) += 1;
    }

    let total = candidates.len() as f64;
    let mut expected = 0.0;

    for (response, count) in &buckets {
        let mut forked = *state;
        forked.update(guess, response);
        let probability = *count as f64 / total;

        match second_guess {
            None => {
                let matches = filter_candidates(candidates, &forked).len();
                expected += probability * matches as f64;
            }
            Some(second) => {
                let narrowed = filter_candidates(candidates, &forked);
                expected += probability * expected_remaining(second, &forked, &narrowed, None);
            }
        }
    }

    expected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn perfect_splitter_scores_one() {
        // AAAAA splits {aaaaa, bbbbb} into two singleton buckets
        let candidates = words(&["aaaaa", "bbbbb"]);
        let state = ConstraintState::new();

        let score = expected_remaining(&word("aaaaa"), &state, &candidates, None);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn uninformative_guess_scores_full_set() {
        // CCCCC produces the same all-Absent response for both candidates
        // and bans only the letter c, which neither candidate contains
        let candidates = words(&["aaaaa", "bbbbb"]);
        let state = ConstraintState::new();

        let score = expected_remaining(&word("ccccc"), &state, &candidates, None);
        assert!((score - 2.0).abs() < 1e-9);
    }

    #[test]
    fn splitter_beats_non_splitter() {
        let candidates = words(&["slate", "crate", "irate", "grate"]);
        let state = ConstraintState::new();

        let informative = expected_remaining(&word("scrag"), &state, &candidates, None);
        let uninformative = expected_remaining(&word("mummy"), &state, &candidates, None);
        assert!(informative < uninformative);
    }

    #[test]
    fn empty_candidates_score_zero() {
        let state = ConstraintState::new();
        let score = expected_remaining(&word("crane"), &state, &[], None);
        assert!(score.abs() < f64::EPSILON);
    }

    #[test]
    fn single_candidate_scores_at_most_one() {
        let candidates = words(&["crane"]);
        let state = ConstraintState::new();

        // Guessing the sole candidate resolves it completely
        let score = expected_remaining(&word("crane"), &state, &candidates, None);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn expectation_is_bounded() {
        let candidates = words(&["slate", "crate", "irate", "grate", "trace"]);
        let state = ConstraintState::new();

        for guess_text in ["slate", "mummy", "zzzzz", "trace"] {
            let score = expected_remaining(&word(guess_text), &state, &candidates, None);
            assert!(score >= 0.0);
            assert!(score <= candidates.len() as f64);
        }
    }

    #[test]
    fn pair_expectation_is_bounded() {
        let candidates = words(&["slate", "crate", "irate", "grate", "trace"]);
        let state = ConstraintState::new();

        let first = word("slate");
        for second_text in ["crate", "mummy", "zzzzz"] {
            let second = word(second_text);
            let score = expected_remaining(&first, &state, &candidates, Some(&second));
            assert!(score >= 0.0);
            assert!(score <= candidates.len() as f64);
        }
    }

    #[test]
    fn second_guess_never_hurts() {
        // Following up with a second guess can only narrow further
        let candidates = words(&["slate", "crate", "irate", "grate", "trace"]);
        let state = ConstraintState::new();

        let first = word("slate");
        let single = expected_remaining(&first, &state, &candidates, None);
        let paired = expected_remaining(&first, &state, &candidates, Some(&word("corgi")));
        assert!(paired <= single + 1e-9);
    }

    #[test]
    fn expectation_is_deterministic() {
        let candidates = words(&["slate", "crate", "irate", "grate"]);
        let state = ConstraintState::new();

        let first = expected_remaining(&word("crane"), &state, &candidates, None);
        let second = expected_remaining(&word("crane"), &state, &candidates, None);
        assert!((first - second).abs() < f64::EPSILON);
    }
}
