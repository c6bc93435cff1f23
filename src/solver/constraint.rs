//! Accumulated knowledge from observed guess/response rounds
//!
//! The state is a set of letter masks: per-position banned letters plus
//! three whole-word letter sets (must contain, exactly once, at least
//! twice). It only ever tightens - each round adds constraints, never
//! removes them. The struct is `Copy`, so the speculative branches inside
//! the expectation search fork it by value and discard the fork.

use crate::core::{ResponsePattern, ResponseSymbol, WORD_LEN, Word};

const ALL_LETTERS: u32 = (1 << 26) - 1;

#[inline]
const fn bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

/// Constraints on the secret word, derived from prior rounds
///
/// A fresh state accepts every word. Each `update` narrows it. A letter in
/// both the exactly-once and at-least-two sets is a contradiction and only
/// arises from inconsistent feedback; `is_consistent` then rejects every
/// word and the session surfaces the empty candidate set as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstraintState {
    /// Letters known not to occupy each position
    banned: [u32; WORD_LEN],
    /// Letters known to occur somewhere in the word
    required: u32,
    /// Letters known to occur exactly once
    exactly_once: u32,
    /// Letters known to occur at least twice
    at_least_two: u32,
}

impl ConstraintState {
    /// Create an empty state that accepts every word
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observed round into the state
    ///
    /// Per position: an Exact response pins the position to its letter
    /// (every other letter becomes banned there); a Partial bans the letter
    /// at that position and requires it somewhere; an Absent bans the
    /// letter everywhere, unless another occurrence of the same letter in
    /// the guess got a non-Absent response, in which case only this
    /// position is banned - the other occurrence already accounts for the
    /// letter.
    ///
    /// Per repeated guess letter, the number of non-Absent responses fixes
    /// the occurrence count: one means exactly once, two or more means at
    /// least twice.
    pub fn update(&mut self, guess: &Word, response: &ResponsePattern) {
        for i in 0..WORD_LEN {
            let letter = guess.letter(i);
            match response.symbol(i) {
                ResponseSymbol::Absent => {
                    let accounted_elsewhere = (0..WORD_LEN).any(|j| {
                        j != i
                            && guess.letter(j) == letter
                            && response.symbol(j) != ResponseSymbol::Absent
                    });
                    if accounted_elsewhere {
                        self.banned[i] |= bit(letter);
                    } else {
                        for slot in &mut self.banned {
                            *slot |= bit(letter);
                        }
                    }
                }
                ResponseSymbol::Partial => {
                    self.banned[i] |= bit(letter);
                    self.required |= bit(letter);
                }
                ResponseSymbol::Exact => {
                    self.banned[i] = ALL_LETTERS & !bit(letter);
                }
            }
        }

        for i in 0..WORD_LEN {
            let letter = guess.letter(i);
            // First occurrence handles the whole letter
            if (0..i).any(|j| guess.letter(j) == letter) {
                continue;
            }
            if guess.count_of(letter) < 2 {
                continue;
            }

            let non_absent = (0..WORD_LEN)
                .filter(|&j| {
                    guess.letter(j) == letter && response.symbol(j) != ResponseSymbol::Absent
                })
                .count();
            if non_absent == 1 {
                self.exactly_once |= bit(letter);
            } else if non_absent >= 2 {
                self.at_least_two |= bit(letter);
            }
        }
    }

    /// Check whether a word satisfies every accumulated constraint
    ///
    /// All conditions are conjunctive: every required letter present, every
    /// exactly-once letter present exactly once, every at-least-two letter
    /// present at least twice, and no position occupied by a banned letter.
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        if self.required & !word.letter_mask() != 0 {
            return false;
        }

        let mut once = self.exactly_once;
        while once != 0 {
            let letter = b'a' + once.trailing_zeros() as u8;
            if word.count_of(letter) != 1 {
                return false;
            }
            once &= once - 1;
        }

        let mut twice = self.at_least_two;
        while twice != 0 {
            let letter = b'a' + twice.trailing_zeros() as u8;
            if word.count_of(letter) < 2 {
                return false;
            }
            twice &= twice - 1;
        }

        (0..WORD_LEN).all(|i| self.banned[i] & bit(word.letter(i)) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn pattern(s: &str) -> ResponsePattern {
        ResponsePattern::from_text(s).unwrap()
    }

    #[test]
    fn empty_state_accepts_everything() {
        let state = ConstraintState::new();
        for text in ["crane", "zzzzz", "aaaaa"] {
            assert!(state.is_consistent(&word(text)));
        }
    }

    #[test]
    fn absent_letter_banned_everywhere() {
        let mut state = ConstraintState::new();
        state.update(&word("crane"), &pattern("bbbbb"));

        // Any word containing c, r, a, n, or e at any position is out
        assert!(!state.is_consistent(&word("carol")));
        assert!(!state.is_consistent(&word("light")));
        assert!(state.is_consistent(&word("toots")));
    }

    #[test]
    fn partial_bans_position_and_requires_letter() {
        let mut state = ConstraintState::new();
        state.update(&word("crane"), &pattern("obbbb"));

        // C must occur, but not at position 0
        assert!(state.is_consistent(&word("picks")));
        assert!(!state.is_consistent(&word("clips"))); // c back at position 0
        assert!(!state.is_consistent(&word("midst"))); // no c at all
    }

    #[test]
    fn exact_pins_position() {
        let mut state = ConstraintState::new();
        state.update(&word("crane"), &pattern("gbbbb"));

        assert!(state.is_consistent(&word("cubit")));
        assert!(!state.is_consistent(&word("docks"))); // position 0 not c
    }

    #[test]
    fn duplicate_absent_banned_only_locally() {
        // Guess has two Es; the credited one keeps the letter alive, the
        // uncredited one bans E only at its own position
        let mut state = ConstraintState::new();
        state.update(&word("speed"), &pattern("bbobb"));

        assert!(state.is_consistent(&word("melon")));
        assert!(state.is_consistent(&word("olive")));
        assert!(!state.is_consistent(&word("towel"))); // e at the locally banned position
        assert!(!state.is_consistent(&word("eerie"))); // more than one e
    }

    #[test]
    fn secret_survives_its_own_feedback() {
        let secrets = ["sulky", "abbey", "floor", "aaaaa", "crane"];
        let guesses = ["sunny", "babes", "robot", "ababa", "crane"];

        for secret_text in secrets {
            let secret = word(secret_text);
            for guess_text in guesses {
                let guess = word(guess_text);
                let response = ResponsePattern::classify(&secret, &guess);
                let mut state = ConstraintState::new();
                state.update(&guess, &response);
                assert!(
                    state.is_consistent(&secret),
                    "secret {secret_text} excluded by its own feedback for guess {guess_text}"
                );
            }
        }
    }

    #[test]
    fn duplicate_fully_absent_bans_everywhere() {
        // Both Ns in the guess go uncredited, so N is banned at every position
        let secret = word("sulky");
        let guess = word("sunny");
        let response = ResponsePattern::classify(&secret, &guess);

        let mut state = ConstraintState::new();
        state.update(&guess, &response);

        assert!(!state.is_consistent(&word("ninja")));
        assert!(state.is_consistent(&secret));
    }

    #[test]
    fn at_least_two_constraint() {
        // Secret ABBEY against guess BABES: both Bs credited
        let secret = word("abbey");
        let guess = word("babes");
        let response = ResponsePattern::classify(&secret, &guess);

        let mut state = ConstraintState::new();
        state.update(&guess, &response);

        assert!(state.is_consistent(&secret));
        // A word with a single B cannot satisfy the at-least-two set
        assert!(!state.is_consistent(&word("table")));
    }

    #[test]
    fn state_tightens_monotonically() {
        let secret = word("crate");
        let mut state = ConstraintState::new();

        let vocabulary = ["crane", "slate", "irate", "crate", "grate", "trace"];
        let mut survivors = vocabulary.len();

        for guess_text in ["slate", "irate", "crate"] {
            let guess = word(guess_text);
            let response = ResponsePattern::classify(&secret, &guess);
            state.update(&guess, &response);

            let now = vocabulary
                .iter()
                .filter(|w| state.is_consistent(&word(w)))
                .count();
            assert!(now <= survivors);
            survivors = now;
        }

        assert!(state.is_consistent(&secret));
    }

    #[test]
    fn fork_leaves_original_untouched() {
        let mut state = ConstraintState::new();
        state.update(&word("crane"), &pattern("obbbb"));

        let mut forked = state;
        forked.update(&word("picks"), &pattern("bbgbb"));

        assert_ne!(state, forked);
        assert!(state.is_consistent(&word("picks")));
    }
}
