#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod words;
pub use words::{Dictionary, Letter, Word};

pub mod score;
pub use score::{score, Verdict};

pub mod round;
pub use round::{
    KeyMap, KeyStatus, Outcome, Rejection, Round, RoundConfig, ScoredGuess, Snapshot, Submission,
    ATTEMPTS_RANGE, WORD_LENGTH_RANGE,
};

/// A convenient alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// The errors that `wordle_engine` can produce.
///
/// Note that a rejected guess is *not* an error: [`Round::submit_guess()`]
/// reports rejection as an ordinary [`Submission`] value, because an
/// unknown word is a normal part of play. Errors are reserved for input
/// that can never be valid (malformed words) and for configurations under
/// which no round can start.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid word")]
    Word {
        #[from]
        kind: WordError,
    },

    #[error("invalid round configuration")]
    Config {
        #[from]
        kind: ConfigError,
    },
}

#[derive(Debug, Error)]
pub enum WordError {
    /// The string provided when constructing a [`Word`] had no letters.
    #[error("words must have at least one letter")]
    Empty,

    /// A character outside `a..=z` was provided to [`Letter::from_char()`]
    /// or appeared in a string passed to [`Word::from_str()`].
    #[error("{0:?} is not a lowercase ascii letter")]
    NotALetter(char),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested word length falls outside [`WORD_LENGTH_RANGE`].
    #[error("word length {0} is outside the recognized range of 4 through 8")]
    WordLengthOutOfRange(usize),

    /// The requested attempt budget falls outside [`ATTEMPTS_RANGE`].
    #[error("attempt budget {0} is outside the recognized range of 4 through 8")]
    AttemptsOutOfRange(usize),

    /// The dictionary has nothing to draw a secret from at the requested
    /// word length, so no round can start.
    #[error("the dictionary contains no words of length {0}")]
    NoWordsOfLength(usize),
}
