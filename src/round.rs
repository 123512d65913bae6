//! A single round of the game, from secret selection to a win or loss.

use std::ops::RangeInclusive;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    score::{score, Verdict},
    words::{Dictionary, Letter, Word},
    ConfigError, Result,
};

/// Word lengths a [`RoundConfig`] accepts.
pub const WORD_LENGTH_RANGE: RangeInclusive<usize> = 4..=8;

/// Attempt budgets a [`RoundConfig`] accepts.
pub const ATTEMPTS_RANGE: RangeInclusive<usize> = 4..=8;

/// Where a round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Outcome {
    /// The round is still accepting input.
    InProgress,

    /// A submitted guess matched the secret word.
    Won,

    /// The attempt budget ran out without a match.
    Lost,
}

impl Outcome {
    /// Returns true once the round has finished, win or lose.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// The best feedback a letter has earned across the round.
///
/// This is what an on-screen keyboard paints its keys with. Variants are
/// declared in precedence order, lowest first: a letter's status only
/// ever moves up the list, so a letter that has been placed exactly stays
/// `Exact` no matter what later guesses do with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum KeyStatus {
    /// No submitted guess has used the letter yet.
    Unused,

    /// Every submitted occurrence of the letter scored [`Verdict::Absent`].
    Absent,

    /// The letter is in the secret word, but has only scored
    /// [`Verdict::Present`] so far.
    Present,

    /// The letter has been placed exactly at least once.
    Exact,
}

impl Default for KeyStatus {
    fn default() -> Self {
        KeyStatus::Unused
    }
}

impl From<Verdict> for KeyStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Exact => KeyStatus::Exact,
            Verdict::Present => KeyStatus::Present,
            Verdict::Absent => KeyStatus::Absent,
        }
    }
}

/// Aggregate per-letter feedback over every submitted guess.
///
/// Twenty-six entries, one per letter. Statuses upgrade monotonically
/// under the [`KeyStatus`] precedence and never downgrade.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct KeyMap {
    statuses: [KeyStatus; 26],
}

impl KeyMap {
    /// The status of one letter.
    pub fn status(&self, letter: Letter) -> KeyStatus {
        self.statuses[letter.index()]
    }

    /// Iterates over all 26 letters in alphabetical order, with their
    /// statuses.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, KeyStatus)> + '_ {
        self.statuses
            .iter()
            .enumerate()
            .map(|(index, &status)| (Letter::from_index(index), status))
    }

    fn record(&mut self, letter: Letter, verdict: Verdict) {
        let status = &mut self.statuses[letter.index()];
        *status = (*status).max(verdict.into());
    }
}

/// The shape of a round: how long the secret word is and how many
/// guesses the player gets.
///
/// # Examples
///
/// ```rust
/// use wordle_engine::RoundConfig;
///
/// let config = RoundConfig::new(6, 5)?;
/// assert_eq!(config.word_length(), 6);
/// assert_eq!(config.attempts_allowed(), 5);
///
/// assert!(RoundConfig::new(3, 6).is_err());
/// assert!(RoundConfig::new(5, 12).is_err());
/// #
/// # Ok::<_, wordle_engine::EngineError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct RoundConfig {
    word_length: usize,
    attempts_allowed: usize,
}

impl RoundConfig {
    /// Creates a configuration, validating both values against
    /// [`WORD_LENGTH_RANGE`] and [`ATTEMPTS_RANGE`].
    pub fn new(word_length: usize, attempts_allowed: usize) -> Result<Self> {
        if !WORD_LENGTH_RANGE.contains(&word_length) {
            return Err(ConfigError::WordLengthOutOfRange(word_length).into());
        }

        if !ATTEMPTS_RANGE.contains(&attempts_allowed) {
            return Err(ConfigError::AttemptsOutOfRange(attempts_allowed).into());
        }

        Ok(RoundConfig {
            word_length,
            attempts_allowed,
        })
    }

    /// The configured word length.
    pub fn word_length(self) -> usize {
        self.word_length
    }

    /// The configured number of guesses.
    pub fn attempts_allowed(self) -> usize {
        self.attempts_allowed
    }
}

impl Default for RoundConfig {
    /// The classic game: five letters, six guesses.
    fn default() -> Self {
        RoundConfig {
            word_length: 5,
            attempts_allowed: 6,
        }
    }
}

/// A submitted guess together with its per-position verdicts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ScoredGuess {
    word: Word,
    verdicts: Vec<Verdict>,
}

impl ScoredGuess {
    /// The guessed word.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// One verdict per letter of [`word()`](ScoredGuess::word).
    pub fn verdicts(&self) -> &[Verdict] {
        self.verdicts.as_slice()
    }
}

/// The result of [`Round::submit_guess()`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Submission {
    /// The guess was valid: it consumed an attempt, joined the history,
    /// and updated the key map.
    Accepted {
        /// Per-position feedback for the submitted guess.
        verdicts: Vec<Verdict>,

        /// Where the round stands after this guess.
        outcome: Outcome,
    },

    /// The guess was not accepted. Nothing changed and no attempt was
    /// consumed; the caller typically flashes a transient cue and lets
    /// the player edit the row.
    Rejected(Rejection),
}

/// Why a submission bounced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The current guess does not fill the row yet.
    WrongLength,

    /// The current guess is not in the length-filtered dictionary.
    NotInWordlist,

    /// The round already ended.
    RoundOver,
}

/// A read-only view of a round for rendering.
///
/// Exactly the state that crosses the engine boundary: the in-progress
/// guess, the scored history, the 26-key map, the outcome, and the
/// remaining attempts.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(crate = "serde_crate"))]
pub struct Snapshot<'a> {
    /// Letters typed so far for the next guess, oldest first.
    pub current_guess: &'a [Letter],

    /// Every accepted guess in submission order, with its verdicts.
    pub history: &'a [ScoredGuess],

    /// Aggregate keyboard feedback.
    pub keys: &'a KeyMap,

    /// Whether the round is still accepting guesses.
    pub outcome: Outcome,

    /// Guesses left before the round is lost.
    pub attempts_remaining: usize,
}

/// A single play session: the secret word, the in-progress guess, the
/// guess history, and the aggregate keyboard feedback.
///
/// External input handling calls the mutators; after each call the
/// presentation layer re-renders from [`snapshot()`](Round::snapshot).
/// Every operation runs synchronously on the calling thread and either
/// fully applies or leaves the round untouched, so rejected and guarded
/// calls are always safe to repeat.
///
/// # Examples
///
/// ```rust
/// use rand::thread_rng;
/// use wordle_engine::{Dictionary, Letter, Outcome, Round, RoundConfig, Submission};
///
/// // A one-word dictionary makes the draw predictable.
/// let dictionary = Dictionary::new(["crane"])?;
/// let mut round = Round::new(dictionary, RoundConfig::default(), &mut thread_rng())?;
///
/// for c in "crane".chars() {
///     round.append_letter(Letter::from_char(c)?);
/// }
///
/// match round.submit_guess() {
///     Submission::Accepted { outcome, .. } => assert_eq!(outcome, Outcome::Won),
///     Submission::Rejected(rejection) => panic!("rejected: {:?}", rejection),
/// }
/// #
/// # Ok::<_, wordle_engine::EngineError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Round {
    dictionary: Dictionary,
    pool: Vec<usize>,
    secret: Word,
    config: RoundConfig,
    history: Vec<ScoredGuess>,
    current: Vec<Letter>,
    keys: KeyMap,
    outcome: Outcome,
}

impl Round {
    /// Starts a round: filters the dictionary down to words of the
    /// configured length and draws the secret from that pool through
    /// `rng`.
    ///
    /// Returns [`ConfigError::NoWordsOfLength`] if the filtered pool is
    /// empty, in which case the caller should pick another configuration.
    pub fn new<R>(dictionary: Dictionary, config: RoundConfig, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let (pool, secret) = draw(&dictionary, config.word_length(), rng)?;

        Ok(Round {
            dictionary,
            pool,
            secret,
            config,
            history: Vec::new(),
            current: Vec::new(),
            keys: KeyMap::default(),
            outcome: Outcome::InProgress,
        })
    }

    /// Appends a letter to the in-progress guess.
    ///
    /// Silently ignored once the guess fills the row or the round is
    /// over, so holding a key down cannot overflow the grid.
    pub fn append_letter(&mut self, letter: Letter) {
        if self.outcome.is_over() || self.current.len() >= self.config.word_length() {
            return;
        }

        self.current.push(letter);
    }

    /// Drops the last letter of the in-progress guess.
    ///
    /// Silently ignored when the guess is empty or the round is over.
    pub fn remove_last_letter(&mut self) {
        if self.outcome.is_over() {
            return;
        }

        self.current.pop();
    }

    /// Submits the in-progress guess for scoring.
    ///
    /// A guess is accepted only when it fills the row and appears in the
    /// length-filtered dictionary. A rejected guess mutates nothing,
    /// consumes no attempt, and stays on the row for the player to edit.
    ///
    /// On acceptance the guess is scored, appended to the history, folded
    /// into the key map, and cleared from the row; the round then moves
    /// to [`Outcome::Won`] if the guess matched the secret, to
    /// [`Outcome::Lost`] if this was the final attempt, and otherwise
    /// stays in progress.
    pub fn submit_guess(&mut self) -> Submission {
        if self.outcome.is_over() {
            return Submission::Rejected(Rejection::RoundOver);
        }

        if self.current.len() != self.config.word_length() {
            return Submission::Rejected(Rejection::WrongLength);
        }

        let guess = Word::from_letters(self.current.clone());
        if !self
            .pool
            .iter()
            .any(|&index| self.dictionary.word(index) == &guess)
        {
            return Submission::Rejected(Rejection::NotInWordlist);
        }

        let verdicts = score(&self.secret, &guess);
        for (&letter, &verdict) in guess.letters().iter().zip(&verdicts) {
            self.keys.record(letter, verdict);
        }

        let won = guess == self.secret;
        self.history.push(ScoredGuess {
            word: guess,
            verdicts: verdicts.clone(),
        });
        self.current.clear();

        self.outcome = if won {
            Outcome::Won
        } else if self.history.len() == self.config.attempts_allowed() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        Submission::Accepted {
            verdicts,
            outcome: self.outcome,
        }
    }

    /// Starts a fresh round with the same configuration, drawing a new
    /// secret through `rng`.
    ///
    /// Callable from any outcome, including after a win or loss.
    pub fn reset<R>(&mut self, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        self.reset_with(self.config, rng)
    }

    /// Starts a fresh round under a new configuration, re-filtering the
    /// pool and drawing a new secret through `rng`.
    ///
    /// On error the current round is left exactly as it was, so a bad
    /// configuration change cannot end a session.
    pub fn reset_with<R>(&mut self, config: RoundConfig, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        let (pool, secret) = draw(&self.dictionary, config.word_length(), rng)?;

        self.pool = pool;
        self.secret = secret;
        self.config = config;
        self.history.clear();
        self.current.clear();
        self.keys = KeyMap::default();
        self.outcome = Outcome::InProgress;
        Ok(())
    }

    /// The view the presentation layer renders from.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            current_guess: self.current.as_slice(),
            history: self.history.as_slice(),
            keys: &self.keys,
            outcome: self.outcome,
            attempts_remaining: self.attempts_remaining(),
        }
    }

    /// Guesses left before the round is lost.
    pub fn attempts_remaining(&self) -> usize {
        self.config.attempts_allowed() - self.history.len()
    }

    /// Where the round stands.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The active configuration.
    pub fn config(&self) -> RoundConfig {
        self.config
    }

    /// The secret word, for the end-of-round reveal.
    pub fn secret_word(&self) -> &Word {
        &self.secret
    }
}

/// Filters `dictionary` to words of `length` and draws one uniformly at
/// random.
fn draw<R>(dictionary: &Dictionary, length: usize, rng: &mut R) -> Result<(Vec<usize>, Word)>
where
    R: Rng + ?Sized,
{
    let pool = dictionary.pool_of_length(length);
    if pool.is_empty() {
        return Err(ConfigError::NoWordsOfLength(length).into());
    }

    let secret = dictionary.word(pool[rng.gen_range(0..pool.len())]).clone();
    Ok((pool, secret))
}
