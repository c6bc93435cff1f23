//! Opening-pair sweep
//!
//! For every first-guess candidate, finds the second guess that minimizes
//! the two-deep expected remaining-set size, then reports the best pair
//! overall. Greedy: each first guess is paired with its own best second
//! guess independently; this is not a joint optimization over both words.

use crate::core::Word;
use crate::solver::{ConstraintState, expected_remaining};
use indicatif::ProgressBar;
use rayon::prelude::*;

/// One first guess paired with its best second guess
#[derive(Debug, Clone)]
pub struct OpenerPair {
    pub first: Word,
    pub second: Word,
    /// Expected candidate-set size after playing both words
    pub score: f64,
}

/// Sweep opening pairs over the guess pool
///
/// Returns one entry per swept first guess, in pool order. `limit` caps the
/// number of first guesses considered (the sweep is quadratic in the pool
/// and linear-squared in the answers, so full sweeps take a while).
///
/// Returns an empty vector when the pool or the answer list is empty.
#[must_use]
pub fn sweep_openers(pool: &[Word], answers: &[Word], limit: Option<usize>) -> Vec<OpenerPair> {
    let firsts = &pool[..limit.unwrap_or(pool.len()).min(pool.len())];
    let state = ConstraintState::new();

    let pb = ProgressBar::new(firsts.len() as u64);
    let mut pairs = Vec::with_capacity(firsts.len());

    for first in firsts {
        let best = pool
            .par_iter()
            .enumerate()
            .map(|(index, second)| {
                (index, expected_remaining(first, &state, answers, Some(second)))
            })
            .min_by(|(i1, s1), (i2, s2)| s1.total_cmp(s2).then_with(|| i1.cmp(i2)));

        if let Some((index, score)) = best {
            pairs.push(OpenerPair {
                first: *first,
                second: pool[index],
                score,
            });
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    pairs
}

/// Pick the best pair from a sweep, ties broken by sweep order
#[must_use]
pub fn best_pair(pairs: &[OpenerPair]) -> Option<&OpenerPair> {
    pairs
        .iter()
        .min_by(|a, b| a.score.total_cmp(&b.score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn fixture() -> (Vec<Word>, Vec<Word>) {
        let pool = words_from_slice(&["slate", "corgi", "mummy"]);
        let answers = words_from_slice(&["slate", "crate", "irate", "grate", "trace"]);
        (pool, answers)
    }

    #[test]
    fn sweep_produces_one_pair_per_first_guess() {
        let (pool, answers) = fixture();
        let pairs = sweep_openers(&pool, &answers, None);

        assert_eq!(pairs.len(), pool.len());
        for (pair, first) in pairs.iter().zip(&pool) {
            assert_eq!(pair.first, *first);
        }
    }

    #[test]
    fn sweep_scores_are_bounded() {
        let (pool, answers) = fixture();
        let pairs = sweep_openers(&pool, &answers, None);

        for pair in &pairs {
            assert!(pair.score >= 0.0);
            assert!(pair.score <= answers.len() as f64);
        }
    }

    #[test]
    fn sweep_honors_limit() {
        let (pool, answers) = fixture();
        let pairs = sweep_openers(&pool, &answers, Some(1));

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].first, pool[0]);
    }

    #[test]
    fn best_pair_is_the_minimum() {
        let (pool, answers) = fixture();
        let pairs = sweep_openers(&pool, &answers, None);

        let best = best_pair(&pairs).unwrap();
        for pair in &pairs {
            assert!(best.score <= pair.score);
        }
    }

    #[test]
    fn empty_pool_sweeps_nothing() {
        let answers = words_from_slice(&["slate"]);
        let pairs = sweep_openers(&[], &answers, None);
        assert!(pairs.is_empty());
        assert!(best_pair(&pairs).is_none());
    }
}
