//! Feedback classification for a guess against a secret word
//!
//! A response is one symbol per position: Exact (green), Partial (orange),
//! or Absent (black). Text form is five characters of `g`/`o`/`b`.

use super::word::{WORD_LEN, Word};
use std::fmt;

/// Per-position feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseSymbol {
    /// Letter occupies this exact position (green)
    Exact,
    /// Letter occurs elsewhere in the word (orange)
    Partial,
    /// Letter occurrence not credited at this position (black)
    Absent,
}

/// Ordered feedback for all five guess positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponsePattern([ResponseSymbol; WORD_LEN]);

impl ResponsePattern {
    /// All-Exact response: the guess is the secret
    pub const SOLVED: Self = Self([ResponseSymbol::Exact; WORD_LEN]);

    /// Classify `guess` against `secret`
    ///
    /// First pass per position: Exact on a position match, Absent when the
    /// letter occurs nowhere in the secret, otherwise a tentative Partial.
    ///
    /// Second pass per repeated guess letter: the letter may be credited at
    /// most as many times as it occurs in the secret, so
    /// `credited - count_in_secret` surplus Partials are downgraded to
    /// Absent. Downgrades take the rightmost tentative Partials first, so
    /// earlier occurrences keep their credit. Deterministic: identical
    /// inputs always produce identical output.
    ///
    /// # Examples
    /// ```
    /// use wordle_minexp::core::{ResponsePattern, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("slate").unwrap();
    /// assert_eq!(ResponsePattern::classify(&secret, &guess), ResponsePattern::SOLVED);
    /// ```
    #[must_use]
    pub fn classify(secret: &Word, guess: &Word) -> Self {
        let mut symbols = [ResponseSymbol::Absent; WORD_LEN];

        for i in 0..WORD_LEN {
            if guess.letter(i) == secret.letter(i) {
                symbols[i] = ResponseSymbol::Exact;
            } else if secret.contains(guess.letter(i)) {
                symbols[i] = ResponseSymbol::Partial;
            }
        }

        // Duplicate-letter correction
        let mut seen: u32 = 0;
        for i in 0..WORD_LEN {
            let letter = guess.letter(i);
            let bit = 1 << (letter - b'a');
            if seen & bit != 0 {
                continue;
            }
            seen |= bit;

            if guess.count_of(letter) < 2 {
                continue;
            }

            let credited = (0..WORD_LEN)
                .filter(|&j| guess.letter(j) == letter && symbols[j] != ResponseSymbol::Absent)
                .count();
            let mut excess = credited.saturating_sub(secret.count_of(letter));

            for j in (0..WORD_LEN).rev() {
                if excess == 0 {
                    break;
                }
                if guess.letter(j) == letter && symbols[j] == ResponseSymbol::Partial {
                    symbols[j] = ResponseSymbol::Absent;
                    excess -= 1;
                }
            }
        }

        Self(symbols)
    }

    /// Get the symbol at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn symbol(&self, position: usize) -> ResponseSymbol {
        self.0[position]
    }

    /// Get all five symbols in position order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[ResponseSymbol; WORD_LEN] {
        &self.0
    }

    /// Check if this is the all-Exact terminal response
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Parse a response from text like "gobbg"
    ///
    /// Accepts `g`/`G` for Exact, `o`/`O` for Partial, `b`/`B` for Absent.
    /// Returns `None` for any other character or a length other than 5.
    #[must_use]
    pub fn from_text(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return None;
        }

        let mut symbols = [ResponseSymbol::Absent; WORD_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            symbols[i] = match ch {
                'g' | 'G' => ResponseSymbol::Exact,
                'o' | 'O' => ResponseSymbol::Partial,
                'b' | 'B' => ResponseSymbol::Absent,
                _ => return None,
            };
        }

        Some(Self(symbols))
    }
}

impl fmt::Display for ResponsePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            f.write_str(match symbol {
                ResponseSymbol::Exact => "g",
                ResponseSymbol::Partial => "o",
                ResponseSymbol::Absent => "b",
            })?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ResponsePattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s).ok_or_else(|| format!("Invalid response string: {s}"))
    }
}
