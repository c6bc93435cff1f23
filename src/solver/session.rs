//! Guessing session state machine
//!
//! A session owns one constraint state and the live answer-candidate set,
//! and drives them through rounds: recommend a guess, record the observed
//! response, repeat until solved. Sessions are fully independent of each
//! other and share no state.

use super::constraint::ConstraintState;
use super::filter::filter_candidates;
use super::selector::{score_table, select_best_guess};
use crate::core::{ResponsePattern, Word};
use std::fmt;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// More than one candidate remains; keep guessing
    Active,
    /// Last recorded response was all-Exact; terminal
    Solved,
    /// Candidate set became empty; inconsistent feedback
    Exhausted,
}

/// Errors surfaced by a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The recorded rounds exclude every candidate - the feedback is
    /// inconsistent with the vocabulary
    Contradiction,
    /// A recommendation was requested with an empty guess pool
    EmptyVocabulary,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction => {
                write!(f, "No candidates remain: recorded feedback is inconsistent")
            }
            Self::EmptyVocabulary => write!(f, "Guess vocabulary is empty"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Session configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// Restrict guesses to the live candidate set from the start
    pub answers_only: bool,
    /// Restrict guesses to the live candidate set once this many rounds
    /// have been recorded ("broad opening, narrow endgame")
    pub restrict_after: Option<usize>,
}

/// One guessing session against one unknown secret
pub struct GuesserSession {
    guesses: Vec<Word>,
    candidates: Vec<Word>,
    state: ConstraintState,
    config: SessionConfig,
    rounds: usize,
    status: SessionStatus,
}

impl GuesserSession {
    /// Create a session over separate guess and answer vocabularies
    ///
    /// Both lists are assumed pre-validated; `answers` becomes the initial
    /// candidate set.
    #[must_use]
    pub fn new(guesses: Vec<Word>, answers: Vec<Word>, config: SessionConfig) -> Self {
        Self {
            guesses,
            candidates: answers,
            state: ConstraintState::new(),
            config,
            rounds: 0,
            status: SessionStatus::Active,
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Number of recorded rounds
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Words still consistent with every recorded round
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// Caller-driven toggle of the answers-only guessing mode
    pub fn set_answers_only(&mut self, answers_only: bool) {
        self.config.answers_only = answers_only;
    }

    fn answers_only_now(&self) -> bool {
        self.config.answers_only
            || self
                .config
                .restrict_after
                .is_some_and(|after| self.rounds >= after)
    }

    fn active_pool(&self) -> &[Word] {
        if self.answers_only_now() {
            &self.candidates
        } else {
            &self.guesses
        }
    }

    /// Recommend the guess minimizing the expected remaining-set size
    ///
    /// With exactly one candidate left, that candidate is returned
    /// immediately with score 0 - the search is not invoked, which the
    /// game drivers rely on.
    ///
    /// # Errors
    /// `SolveError::EmptyVocabulary` when the active guess pool is empty.
    pub fn recommend_guess(&self) -> Result<(Word, f64), SolveError> {
        if let [only] = self.candidates.as_slice() {
            return Ok((*only, 0.0));
        }

        select_best_guess(self.active_pool(), &self.state, &self.candidates)
            .map(|(word, score)| (*word, score))
            .ok_or(SolveError::EmptyVocabulary)
    }

    /// Record one observed round and re-derive the candidate set
    ///
    /// # Errors
    /// `SolveError::Contradiction` when the round empties the candidate
    /// set; the session is then `Exhausted`.
    pub fn record_round(
        &mut self,
        guess: &Word,
        response: &ResponsePattern,
    ) -> Result<SessionStatus, SolveError> {
        self.state.update(guess, response);
        self.candidates = filter_candidates(&self.candidates, &self.state);
        self.rounds += 1;

        if response.is_solved() {
            self.status = SessionStatus::Solved;
        } else if self.candidates.is_empty() {
            self.status = SessionStatus::Exhausted;
            return Err(SolveError::Contradiction);
        } else {
            self.status = SessionStatus::Active;
        }

        Ok(self.status)
    }

    /// Per-word score table for the active pool, in pool order
    ///
    /// Diagnostics side channel; does not affect recommendation.
    #[must_use]
    pub fn scores(&self) -> Vec<(Word, f64)> {
        score_table(self.active_pool(), &self.state, &self.candidates)
    }
}
