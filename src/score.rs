//! Scoring a guess against the secret word.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::words::Word;

/// The feedback for one letter of a submitted guess.
///
/// [`score()`] returns one of these per position. `Exact` means the
/// letter sits in its correct position, `Present` means the secret
/// contains the letter somewhere else, and `Absent` means the secret has
/// no copy of the letter left to account for it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Verdict {
    /// The letter is in the secret word, at this exact position.
    Exact,

    /// The letter is in the secret word, but at a different position.
    Present,

    /// The secret word does not contain the letter, or every copy of it
    /// is already claimed by other positions of the guess.
    Absent,
}

/// Scores `guess` against `secret`, producing one [`Verdict`] per
/// position.
///
/// Both words must have the same length. That is the caller's contract,
/// checked with a debug assertion; a [`Round`](crate::Round) only ever
/// submits full-length guesses.
///
/// Duplicate letters follow the standard counting rules:
///
/// 1. Every position where guess and secret agree is [`Verdict::Exact`].
/// 2. Each letter value receives `min(copies in secret, copies in guess)`
///    minus its exact matches worth of [`Verdict::Present`] marks,
///    awarded to the leftmost non-exact occurrences in the guess.
/// 3. Every remaining position is [`Verdict::Absent`].
///
/// So a guess holding two copies of a letter the secret holds once shows
/// a single mark for that letter, never two.
///
/// # Examples
///
/// ```rust
/// use wordle_engine::{score, Word};
/// use wordle_engine::Verdict::{Absent, Exact, Present};
///
/// let secret = Word::from_str("sober")?;
/// let guess = Word::from_str("spool")?;
///
/// // Only the first `o` of the guess earns a mark: the secret has one.
/// assert_eq!(
///     score(&secret, &guess),
///     vec![Exact, Absent, Present, Absent, Absent],
/// );
/// #
/// # Ok::<_, wordle_engine::EngineError>(())
/// ```
pub fn score(secret: &Word, guess: &Word) -> Vec<Verdict> {
    debug_assert_eq!(
        secret.len(),
        guess.len(),
        "secret and guess must have the same length"
    );

    let mut verdicts = vec![Verdict::Absent; guess.len()];

    // Copies of each secret letter not consumed by an exact match; these
    // back the Present marks.
    let mut available = [0_u8; 26];

    for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            verdicts[i] = Verdict::Exact;
        } else {
            available[s.index()] += 1;
        }
    }

    // Leftmost unmatched occurrences claim the remaining copies.
    for (i, &g) in guess.letters().iter().enumerate() {
        if verdicts[i] == Verdict::Exact {
            continue;
        }

        let left = &mut available[g.index()];
        if *left > 0 {
            *left -= 1;
            verdicts[i] = Verdict::Present;
        }
    }

    verdicts
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Result;

    /// Expands a compact verdict string: `e` for Exact, `p` for Present,
    /// anything else for Absent.
    fn str_to_verdicts(input: &str) -> Vec<Verdict> {
        input
            .chars()
            .map(|c| match c {
                'e' => Verdict::Exact,
                'p' => Verdict::Present,
                _ => Verdict::Absent,
            })
            .collect()
    }

    macro_rules! score_test {
        ($fn_name:ident[$secret:expr, $guess:expr => $expected:expr]) => {
            #[test]
            fn $fn_name() -> Result<()> {
                let secret = Word::from_str($secret)?;
                let guess = Word::from_str($guess)?;

                assert_eq!(score(&secret, &guess), str_to_verdicts($expected));
                Ok(())
            }
        };
    }

    score_test! { identical_words["crane", "crane" => "eeeee"] }

    score_test! { disjoint_words["crane", "spoil" => "aaaaa"] }

    score_test! { mixed_exact_and_absent["crane", "slate" => "aaeae"] }

    score_test! { exact_prefix["crane", "crimp" => "eeaaa"] }

    // The guess doubles a letter the secret holds once: only the first
    // copy earns a mark.
    score_test! { repeat_letter_in_guess["sober", "spool" => "eapaa"] }

    // The exact match claims the only copy, so the other occurrence of
    // the letter goes unmarked.
    score_test! { exact_match_claims_the_copy["sober", "soaks" => "eeaaa"] }

    score_test! { repeat_letter_in_secret["spoon", "odors" => "paeap"] }

    // Both words double a letter, one copy exactly placed.
    score_test! { repeat_letter_both_sides["allee", "eagle" => "ppape"] }

    score_test! { repeat_letter_all_misplaced["erase", "speed" => "pappa"] }

    score_test! { exact_beats_earlier_occurrence["floor", "robot" => "ppaea"] }

    score_test! { four_letter_words["toot", "otto" => "pppp"] }

    score_test! { six_letter_words["banana", "ananas" => "pppppa"] }

    mod properties {
        use proptest::prelude::*;

        use super::*;
        use crate::words::Letter;

        fn word(len: usize) -> impl Strategy<Value = Word> {
            prop::collection::vec(prop::char::range('a', 'z'), len).prop_map(|chars| {
                Word::from_str(&chars.into_iter().collect::<String>()).unwrap()
            })
        }

        fn word_pair() -> impl Strategy<Value = (Word, Word)> {
            (4_usize..=8).prop_flat_map(|len| (word(len), word(len)))
        }

        proptest! {
            #[test]
            fn exact_iff_letters_agree((secret, guess) in word_pair()) {
                let verdicts = score(&secret, &guess);

                for i in 0..guess.len() {
                    prop_assert_eq!(verdicts[i] == Verdict::Exact, guess[i] == secret[i]);
                }
            }

            #[test]
            fn a_word_scored_against_itself_is_all_exact(
                secret in (4_usize..=8).prop_flat_map(word),
            ) {
                prop_assert!(score(&secret, &secret).iter().all(|&v| v == Verdict::Exact));
            }

            #[test]
            fn marks_equal_shared_letter_count((secret, guess) in word_pair()) {
                let verdicts = score(&secret, &guess);

                for index in 0..26 {
                    let letter = Letter::from_index(index);
                    let in_secret = secret.iter().filter(|&&l| l == letter).count();
                    let in_guess = guess.iter().filter(|&&l| l == letter).count();
                    let marked = guess
                        .iter()
                        .zip(&verdicts)
                        .filter(|&(&l, &v)| l == letter && v != Verdict::Absent)
                        .count();

                    prop_assert_eq!(marked, in_secret.min(in_guess));
                }
            }
        }
    }
}
