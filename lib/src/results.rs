#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::result::Result;
use thiserror::Error;

/// The result of a given letter at a specific location.
///
/// Each variant corresponds to one digit of a score string: `0` for [`NotPresent`], `1` for
/// [`PresentNotHere`] and `2` for [`Correct`].
///
/// [`NotPresent`]: LetterResult::NotPresent
/// [`PresentNotHere`]: LetterResult::PresentNotHere
/// [`Correct`]: LetterResult::Correct
#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LetterResult {
    Correct,
    PresentNotHere,
    NotPresent,
}

impl LetterResult {
    /// Parses a single score digit.
    ///
    /// ```
    /// use wordle_hints::LetterResult;
    ///
    /// assert_eq!(LetterResult::from_mark('2'), Ok(LetterResult::Correct));
    /// assert!(LetterResult::from_mark('g').is_err());
    /// ```
    pub fn from_mark(mark: char) -> Result<LetterResult, WordleError> {
        match mark {
            '0' => Ok(LetterResult::NotPresent),
            '1' => Ok(LetterResult::PresentNotHere),
            '2' => Ok(LetterResult::Correct),
            other => Err(WordleError::InvalidScore(other)),
        }
    }

    /// The score digit for this result.
    pub fn to_mark(self) -> char {
        match self {
            LetterResult::NotPresent => '0',
            LetterResult::PresentNotHere => '1',
            LetterResult::Correct => '2',
        }
    }

    /// Whether this result says the letter is somewhere in the objective word.
    pub fn is_present(self) -> bool {
        self != LetterResult::NotPresent
    }
}

/// Indicates that an error occurred while loading words or applying feedback.
#[derive(Debug, Error)]
pub enum WordleError {
    /// The word list could not be opened or read.
    #[error("unable to read the word list: {0}")]
    DictionaryUnavailable(#[from] io::Error),
    /// No bundled word list exists with the given name.
    #[error("no bundled word list named {0:?}")]
    UnknownWordList(String),
    /// A word, guess or score did not have the expected length, which is provided.
    #[error("words must be {0} letters long")]
    WordLength(usize),
    /// A word or guess contained a character other than the letters a-z.
    #[error("unsupported character {0:?}, only the letters a-z are allowed")]
    UnsupportedCharacter(char),
    /// A score contained a mark other than `0`, `1` or `2`.
    #[error("unsupported score mark {0:?}, marks must be 0, 1 or 2")]
    InvalidScore(char),
}

// `io::Error` is not comparable, so equality only considers the variant for that case.
impl PartialEq for WordleError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (WordleError::DictionaryUnavailable(a), WordleError::DictionaryUnavailable(b)) => {
                a.kind() == b.kind()
            }
            (WordleError::UnknownWordList(a), WordleError::UnknownWordList(b)) => a == b,
            (WordleError::WordLength(a), WordleError::WordLength(b)) => a == b,
            (WordleError::UnsupportedCharacter(a), WordleError::UnsupportedCharacter(b)) => a == b,
            (WordleError::InvalidScore(a), WordleError::InvalidScore(b)) => a == b,
            _ => false,
        }
    }
}

/// The result of a single word guess.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GuessResult<'a> {
    /// The guess that was made.
    pub guess: &'a str,
    /// The result of each letter, provided in the same leter order as in the guess.
    pub results: Vec<LetterResult>,
}

impl<'a> GuessResult<'a> {
    /// Builds a result from a guess and a score string such as `"02100"`.
    ///
    /// Both must have the same number of characters, the guess must only contain ASCII letters,
    /// and the score must only contain the digits `0`, `1` and `2`.
    pub fn from_score(guess: &'a str, score: &str) -> Result<GuessResult<'a>, WordleError> {
        let guess_length = guess.chars().count();
        if guess_length != score.chars().count() {
            return Err(WordleError::WordLength(guess_length));
        }
        if let Some(letter) = guess.chars().find(|letter| !letter.is_ascii_alphabetic()) {
            return Err(WordleError::UnsupportedCharacter(letter));
        }
        Ok(GuessResult {
            guess,
            results: score
                .chars()
                .map(LetterResult::from_mark)
                .collect::<Result<Vec<LetterResult>, WordleError>>()?,
        })
    }

    /// Renders the results back into a score string.
    pub fn to_score_string(&self) -> String {
        self.results.iter().map(|result| result.to_mark()).collect()
    }

    /// Returns `true` if every letter was correct.
    pub fn is_solved(&self) -> bool {
        self.results
            .iter()
            .all(|result| *result == LetterResult::Correct)
    }
}

impl<'a> fmt::Display for GuessResult<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.to_score_string())
    }
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Exact matches are marked first. Remaining guess letters are then marked
/// [`LetterResult::PresentNotHere`] from left to right, but only as many times as the letter is
/// still unmatched in the objective.
///
/// ```
/// use wordle_hints::*;
///
/// let result = get_result_for_guess("mesas", "sassy").unwrap();
/// assert_eq!(result.to_score_string(), "11200");
/// ```
pub fn get_result_for_guess<'a>(
    objective: &str,
    guess: &'a str,
) -> Result<GuessResult<'a>, WordleError> {
    let objective: Vec<char> = objective.chars().collect();
    let guess_letters: Vec<char> = guess.chars().collect();
    if objective.len() != guess_letters.len() {
        return Err(WordleError::WordLength(objective.len()));
    }
    let mut results = vec![LetterResult::NotPresent; guess_letters.len()];
    let mut unmatched: Vec<char> = Vec::with_capacity(objective.len());
    for (index, (objective_letter, guess_letter)) in
        objective.iter().zip(guess_letters.iter()).enumerate()
    {
        if objective_letter == guess_letter {
            results[index] = LetterResult::Correct;
        } else {
            unmatched.push(*objective_letter);
        }
    }
    for (index, letter) in guess_letters.iter().enumerate() {
        if results[index] == LetterResult::Correct {
            continue;
        }
        if let Some(position) = unmatched.iter().position(|other| other == letter) {
            unmatched.swap_remove(position);
            results[index] = LetterResult::PresentNotHere;
        }
    }
    Ok(GuessResult {
        guess,
        results,
    })
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    /// Indicates that the guesser won the game, and provides the guesses that were given.
    Success(Vec<Box<str>>),
    /// Indicates that the guesser failed to guess the word, and provides the guesses that were
    /// given.
    Failure(Vec<Box<str>>),
    /// Indicates that the given word was not in the word bank.
    UnknownWord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_score_parses_marks() -> Result<(), WordleError> {
        let result = GuessResult::from_score("train", "02010")?;

        assert_eq!(
            result.results,
            vec![
                LetterResult::NotPresent,
                LetterResult::Correct,
                LetterResult::NotPresent,
                LetterResult::PresentNotHere,
                LetterResult::NotPresent,
            ]
        );
        assert_eq!(result.to_score_string(), "02010");
        Ok(())
    }

    #[test]
    fn from_score_rejects_bad_input() {
        assert_eq!(
            GuessResult::from_score("train", "0201"),
            Err(WordleError::WordLength(5))
        );
        assert_eq!(
            GuessResult::from_score("tr4in", "02010"),
            Err(WordleError::UnsupportedCharacter('4'))
        );
        assert_eq!(
            GuessResult::from_score("train", "02013"),
            Err(WordleError::InvalidScore('3'))
        );
    }

    #[test]
    fn display_shows_guess_and_score() -> Result<(), WordleError> {
        let result = GuessResult::from_score("crane", "21000")?;

        assert_eq!(result.to_string(), "crane 21000");
        assert!(!result.is_solved());
        assert!(GuessResult::from_score("crane", "22222")?.is_solved());
        Ok(())
    }
}
