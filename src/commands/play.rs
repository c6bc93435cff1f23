//! Play a full game against a known target word
//!
//! Drives a session round by round, computing the feedback the target would
//! produce, until solved.

use crate::core::{ResponsePattern, Word};
use crate::solver::{GuesserSession, SessionConfig, SessionStatus};

/// Configuration for playing out one target word
pub struct PlayConfig {
    pub target: String,
    /// Play this word first instead of asking the recommender
    pub first_guess: Option<String>,
    /// Switch to answers-only guessing after this many rounds
    pub restrict_after: Option<usize>,
    pub max_rounds: usize,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            first_guess: None,
            restrict_after: None,
            max_rounds: 10,
        }
    }
}

/// Result of playing out a word
pub struct PlayResult {
    pub target: String,
    pub solved: bool,
    pub rounds: Vec<RoundStep>,
}

/// A single recorded round
pub struct RoundStep {
    pub word: String,
    pub response: ResponsePattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected remaining-set size; absent for a forced first guess
    pub score: Option<f64>,
}

/// Play the configured target word to completion
///
/// # Errors
///
/// Returns an error if the target or forced first guess is invalid, if the
/// guess vocabulary is empty, or if the rounds drive the candidate set to
/// a contradiction (which indicates a vocabulary that lacks the target).
pub fn play_word(
    config: &PlayConfig,
    guesses: &[Word],
    answers: &[Word],
) -> Result<PlayResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;
    let forced_first = config
        .first_guess
        .as_deref()
        .map(Word::new)
        .transpose()
        .map_err(|e| format!("Invalid first guess: {e}"))?;

    let session_config = SessionConfig {
        answers_only: false,
        restrict_after: config.restrict_after,
    };
    let mut session = GuesserSession::new(guesses.to_vec(), answers.to_vec(), session_config);

    let mut rounds = Vec::new();

    for round in 0..config.max_rounds {
        let candidates_before = session.candidates().len();

        let (guess, score) = match (round, forced_first) {
            (0, Some(forced)) => (forced, None),
            _ => {
                let (word, score) = session.recommend_guess().map_err(|e| e.to_string())?;
                (word, Some(score))
            }
        };

        let response = ResponsePattern::classify(&target, &guess);
        let status = session
            .record_round(&guess, &response)
            .map_err(|e| e.to_string())?;

        rounds.push(RoundStep {
            word: guess.to_string(),
            response,
            candidates_before,
            candidates_after: session.candidates().len(),
            score,
        });

        if status == SessionStatus::Solved {
            return Ok(PlayResult {
                target: config.target.clone(),
                solved: true,
                rounds,
            });
        }
    }

    Ok(PlayResult {
        target: config.target.clone(),
        solved: false,
        rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    fn fixture() -> (Vec<Word>, Vec<Word>) {
        let guesses =
            words_from_slice(&["slate", "crate", "irate", "grate", "trace", "mummy", "scrag"]);
        let answers = words_from_slice(&["slate", "crate", "irate", "grate", "trace"]);
        (guesses, answers)
    }

    #[test]
    fn play_solves_target() {
        let (guesses, answers) = fixture();
        let config = PlayConfig::new("crate".to_string());

        let result = play_word(&config, &guesses, &answers).unwrap();

        assert!(result.solved);
        assert_eq!(result.rounds.last().unwrap().word, "crate");
        assert!(result.rounds.last().unwrap().response.is_solved());
    }

    #[test]
    fn play_candidates_shrink_per_round() {
        let (guesses, answers) = fixture();
        let config = PlayConfig::new("irate".to_string());

        let result = play_word(&config, &guesses, &answers).unwrap();

        for step in &result.rounds {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn play_honors_forced_first_guess() {
        let (guesses, answers) = fixture();
        let mut config = PlayConfig::new("grate".to_string());
        config.first_guess = Some("slate".to_string());

        let result = play_word(&config, &guesses, &answers).unwrap();

        assert_eq!(result.rounds[0].word, "slate");
        assert!(result.rounds[0].score.is_none());
        assert!(result.solved);
    }

    #[test]
    fn play_invalid_target_is_rejected() {
        let (guesses, answers) = fixture();
        let config = PlayConfig::new("notaword".to_string());

        assert!(play_word(&config, &guesses, &answers).is_err());
    }

    #[test]
    fn play_target_outside_answers_contradicts() {
        let (guesses, answers) = fixture();
        // MUMMY is guessable but not a possible answer; its feedback
        // eventually empties the candidate set
        let config = PlayConfig::new("mummy".to_string());

        let result = play_word(&config, &guesses, &answers);
        match result {
            Err(message) => assert!(message.contains("inconsistent")),
            Ok(result) => assert!(!result.solved),
        }
    }
}
