//! Wordle word representation
//!
//! A Word is a validated 5-letter lowercase word stored as a plain byte array.

use std::fmt;

/// Number of letters in a word (and positions in a response).
pub const WORD_LEN: usize = 5;

/// A 5-letter lowercase word over the a-z alphabet
///
/// Words are cheap `Copy` values; vocabulary entries, guesses, and secrets
/// are all the same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only letters a-z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5 or any character
    /// is outside a-z.
    ///
    /// # Examples
    /// ```
    /// use wordle_minexp::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let lowered = text.to_ascii_lowercase();
        let bytes = lowered.as_bytes();

        if bytes.len() != WORD_LEN {
            return Err(WordError::InvalidLength(bytes.len()));
        }

        if !bytes.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        // Safe: length validated above
        let letters: [u8; WORD_LEN] = bytes.try_into().expect("length already validated");

        Ok(Self { letters })
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - the bytes were validated as ASCII at construction.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.letters).expect("letters validated as ascii")
    }

    /// Get the letters as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Count occurrences of a letter in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }

    /// 26-bit mask of the letters present in the word
    ///
    /// Bit `letter - b'a'` is set when the letter occurs at least once.
    #[inline]
    #[must_use]
    pub fn letter_mask(&self) -> u32 {
        self.letters
            .iter()
            .fold(0, |mask, &l| mask | 1 << (l - b'a'))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
