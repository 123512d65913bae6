//! Letters, words, and the caller-supplied dictionary.

use std::{fmt::Display, ops::Deref};

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, WordError};

/// A single lowercase letter, `a` through `z`.
///
/// This is the only character type the engine understands: guesses grow
/// one validated [`Letter`] at a time, so a [`Word`] can never hold
/// anything outside the alphabet. An unfilled grid cell has no letter at
/// all; the in-progress guess is simply shorter than the word length,
/// and presentation layers pad the row themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Letter(u8);

impl Letter {
    /// Creates a [`Letter`] from a character.
    ///
    /// Returns an error unless the character is a lowercase ascii letter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_engine::Letter;
    ///
    /// assert_eq!(Letter::from_char('q')?.as_char(), 'q');
    ///
    /// assert!(Letter::from_char('Q').is_err());
    /// assert!(Letter::from_char('1').is_err());
    /// #
    /// # Ok::<_, wordle_engine::EngineError>(())
    /// ```
    pub fn from_char(c: char) -> Result<Self> {
        if c.is_ascii_lowercase() {
            Ok(Letter(c as u8))
        } else {
            Err(WordError::NotALetter(c).into())
        }
    }

    /// Returns the letter as a [`char`].
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Index into 26-entry per-letter tables.
    pub(crate) fn index(self) -> usize {
        (self.0 - b'a') as usize
    }

    /// Inverse of [`index()`](Letter::index).
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < 26);
        Letter(b'a' + index as u8)
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered sequence of [`Letter`]s.
///
/// Construction is validated, so every instance is non-empty and entirely
/// lowercase ascii. Words of any length can be built; a [`Round`] decides
/// which lengths it cares about when filtering its dictionary.
///
/// [`Round`]: crate::Round
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Creates a new [`Word`] from a string slice.
    ///
    /// Returns an error if the string is empty or contains anything other
    /// than lowercase ascii letters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordle_engine::Word;
    ///
    /// let crane = Word::from_str("crane")?;
    /// assert_eq!(crane.to_string(), "crane");
    /// assert_eq!(crane.len(), 5);
    ///
    /// assert!(Word::from_str("").is_err());
    /// assert!(Word::from_str("Crane").is_err());
    /// assert!(Word::from_str("no way").is_err());
    /// #
    /// # Ok::<_, wordle_engine::EngineError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(word: &str) -> Result<Self> {
        if word.is_empty() {
            return Err(WordError::Empty.into());
        }

        let letters = word
            .chars()
            .map(Letter::from_char)
            .collect::<Result<Vec<_>>>()?;

        Ok(Word { letters })
    }

    /// Assembles a word from letters that are already validated.
    pub(crate) fn from_letters(letters: Vec<Letter>) -> Self {
        debug_assert!(!letters.is_empty());
        Word { letters }
    }

    /// Returns the letters as a slice.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }
}

impl Deref for Word {
    type Target = [Letter];

    fn deref(&self) -> &Self::Target {
        &self.letters
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// The ordered set of words a round will accept.
///
/// The list is supplied by the caller; the engine neither ships nor loads
/// one. Duplicate entries are dropped, keeping the first occurrence, so
/// the secret draw stays uniform over distinct words. A dictionary may
/// mix word lengths freely; each round filters it down to the length it
/// is configured for.
///
/// # Examples
///
/// ```rust
/// use wordle_engine::Dictionary;
///
/// let dictionary = Dictionary::new(["crane", "slate", "crane", "tilt"])?;
/// assert_eq!(dictionary.len(), 3);
///
/// assert!(Dictionary::new(["crane", "SLATE"]).is_err());
/// #
/// # Ok::<_, wordle_engine::EngineError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Builds a dictionary from anything that yields string slices.
    ///
    /// Every entry must satisfy [`Word::from_str()`]; the first invalid
    /// entry aborts construction. A curated list should never contain
    /// malformed words, and skipping them silently could quietly leave a
    /// word length with no candidates.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| Word::from_str(word.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Dictionary {
            words: words.into_iter().unique().collect(),
        })
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, in their supplied order.
    pub fn words(&self) -> &[Word] {
        self.words.as_slice()
    }

    /// Indices of the words with exactly `length` letters.
    pub(crate) fn pool_of_length(&self, length: usize) -> Vec<usize> {
        self.words
            .iter()
            .enumerate()
            .filter(|(_, word)| word.len() == length)
            .map(|(index, _)| index)
            .collect()
    }

    pub(crate) fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }
}
