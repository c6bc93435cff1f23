//! Batch evaluation across answer words
//!
//! Plays every answer (or a sample) to completion and aggregates guess
//! statistics.

use super::play::{PlayConfig, play_word};
use crate::core::Word;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a batch run
pub struct BatchConfig {
    /// First word to play in every game (the original opener sweep showed
    /// "raise" is a strong default)
    pub first_guess: Option<String>,
    /// Switch each game to answers-only guessing after this many rounds
    pub restrict_after: Option<usize>,
    /// Only play the first N answers
    pub limit: Option<usize>,
    /// Play a random sample of N answers instead of all of them
    pub sample: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            first_guess: None,
            restrict_after: Some(2),
            limit: None,
            sample: None,
        }
    }
}

/// Aggregated statistics from a batch run
pub struct BatchStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub worst_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Play every selected answer to completion and aggregate the results
///
/// Shows a progress bar; each game is independent.
///
/// # Errors
///
/// Returns an error if the configured first guess is invalid or a game
/// reaches a contradiction (which indicates mismatched vocabularies).
pub fn run_batch(
    config: &BatchConfig,
    guesses: &[Word],
    answers: &[Word],
) -> Result<BatchStatistics, String> {
    let targets = select_targets(config, answers);

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut per_word: Vec<(String, usize)> = Vec::with_capacity(targets.len());

    for target in &targets {
        let play_config = PlayConfig {
            target: target.to_string(),
            first_guess: config.first_guess.clone(),
            restrict_after: config.restrict_after,
            max_rounds: 10,
        };

        let result = play_word(&play_config, guesses, answers)?;
        let rounds = result.rounds.len();

        if result.solved {
            solved += 1;
            total_guesses += rounds;
            min_guesses = min_guesses.min(rounds);
            max_guesses = max_guesses.max(rounds);
            *distribution.entry(rounds).or_insert(0) += 1;
        }
        per_word.push((result.target, rounds));

        pb.set_message(target.to_string());
        pb.inc(1);
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    per_word.sort_by(|(_, a), (_, b)| b.cmp(a));
    per_word.truncate(5);

    let total_words = targets.len();
    Ok(BatchStatistics {
        total_words,
        solved,
        failed: total_words - solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        worst_words: per_word,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

fn select_targets(config: &BatchConfig, answers: &[Word]) -> Vec<Word> {
    if let Some(n) = config.sample {
        let mut rng = rand::rng();
        return answers.choose_multiple(&mut rng, n.min(answers.len())).copied().collect();
    }

    answers
        .iter()
        .take(config.limit.unwrap_or(answers.len()))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn fixture() -> (Vec<Word>, Vec<Word>) {
        let guesses = words_from_slice(&["slate", "crate", "irate", "grate", "trace", "scrag"]);
        let answers = words_from_slice(&["slate", "crate", "irate", "grate", "trace"]);
        (guesses, answers)
    }

    #[test]
    fn batch_solves_all_answers() {
        let (guesses, answers) = fixture();
        let config = BatchConfig::default();

        let stats = run_batch(&config, &guesses, &answers).unwrap();

        assert_eq!(stats.total_words, answers.len());
        assert_eq!(stats.solved, answers.len());
        assert_eq!(stats.failed, 0);
        assert!(stats.average_guesses >= 1.0);
        assert!(stats.min_guesses >= 1);
        assert!(stats.max_guesses <= 10);
    }

    #[test]
    fn batch_distribution_sums_to_solved() {
        let (guesses, answers) = fixture();
        let config = BatchConfig::default();

        let stats = run_batch(&config, &guesses, &answers).unwrap();

        let distribution_sum: usize = stats.distribution.values().sum();
        assert_eq!(distribution_sum, stats.solved);
    }

    #[test]
    fn batch_honors_limit() {
        let (guesses, answers) = fixture();
        let config = BatchConfig {
            limit: Some(2),
            ..BatchConfig::default()
        };

        let stats = run_batch(&config, &guesses, &answers).unwrap();
        assert_eq!(stats.total_words, 2);
    }

    #[test]
    fn batch_sample_draws_from_answers() {
        let (guesses, answers) = fixture();
        let config = BatchConfig {
            sample: Some(3),
            ..BatchConfig::default()
        };

        let stats = run_batch(&config, &guesses, &answers).unwrap();
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.solved, 3);
    }

    #[test]
    fn batch_with_forced_first_guess() {
        let (guesses, answers) = fixture();
        let config = BatchConfig {
            first_guess: Some("slate".to_string()),
            ..BatchConfig::default()
        };

        let stats = run_batch(&config, &guesses, &answers).unwrap();
        assert_eq!(stats.solved, answers.len());
    }
}
