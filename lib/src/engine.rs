use crate::data::*;
use crate::restrictions::WordRestrictions;
use crate::results::*;
use crate::scorers::score_words;
use crate::scorers::WordScore;
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;
use std::result::Result;
use std::sync::Arc;

/// The number of suggestions returned by [`Solver::top_guesses`].
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// A suggested guess along with its scores.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Suggestion {
    pub word: Arc<str>,
    pub score: WordScore,
}

/// A guess that was applied to the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Box<str>,
    pub results: Vec<LetterResult>,
    /// The number of possible words left after applying this guess.
    pub remaining: usize,
}

/// The words that may still be the objective, and their scores.
///
/// The two are only ever replaced together, so the scores always cover exactly the candidates.
#[derive(Debug, Clone)]
struct CandidateState {
    words: HashSet<Arc<str>>,
    scores: HashMap<Arc<str>, WordScore>,
}

impl CandidateState {
    fn new(words: HashSet<Arc<str>>, word_length: usize) -> CandidateState {
        let scores = score_words(&words, word_length);
        CandidateState { words, scores }
    }
}

/// Suggests guesses for a Wordle-style puzzle by ranking the words that are still possible.
///
/// ```
/// use wordle_hints::*;
///
/// let mut solver = Solver::from_words(5, ["crane", "slate", "proud", "drool"]).unwrap();
///
/// assert_eq!(solver.update("train", "02000").unwrap(), 2);
/// let guesses = solver.guess("", 5);
/// assert_eq!(guesses.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    index: LetterIndex,
    dictionary_len: usize,
    candidates: CandidateState,
    history: Vec<GuessRecord>,
}

impl Solver {
    /// Constructs a solver for words of the given length.
    ///
    /// Words are read from the file at `path`, or from the bundled word list if no path is given.
    pub fn new(word_length: usize, path: Option<&Path>) -> Result<Solver, WordleError> {
        let source = match path {
            Some(path) => WordSource::File(path.to_path_buf()),
            None => WordSource::default(),
        };
        Solver::from_config(&SolverConfig {
            word_length,
            source,
            ..SolverConfig::default()
        })
    }

    /// Constructs a solver as described by the given config.
    pub fn from_config(config: &SolverConfig) -> Result<Solver, WordleError> {
        let bank = WordBank::from_source(&config.source, config.word_length, config.invalid_words)?;
        Ok(Solver::from_bank(&bank))
    }

    /// Constructs a solver from the given words. Every word must have `word_length` letters.
    pub fn from_words<I, S>(word_length: usize, words: I) -> Result<Solver, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bank = WordBank::from_iterator(words, word_length, InvalidWordPolicy::Reject)?;
        Ok(Solver::from_bank(&bank))
    }

    /// Constructs a solver from words read one per line from the reader.
    pub fn from_reader<R: BufRead>(word_length: usize, reader: R) -> Result<Solver, WordleError> {
        let bank = WordBank::from_reader(reader, word_length, InvalidWordPolicy::Reject)?;
        Ok(Solver::from_bank(&bank))
    }

    /// Constructs a solver that may guess any word in the bank.
    pub fn from_bank(bank: &WordBank) -> Solver {
        let index = LetterIndex::from_bank(bank);
        let words = index.all_words();
        let dictionary_len = words.len();
        Solver {
            candidates: CandidateState::new(words, bank.word_length()),
            index,
            dictionary_len,
            history: Vec::new(),
        }
    }

    /// The length of every word in this puzzle.
    pub fn word_length(&self) -> usize {
        self.index.word_length()
    }

    /// The number of words in the full dictionary.
    pub fn dictionary_len(&self) -> usize {
        self.dictionary_len
    }

    /// The number of words that may still be the objective.
    pub fn remaining_count(&self) -> usize {
        self.candidates.words.len()
    }

    /// The words that may still be the objective, in no particular order.
    pub fn candidates(&self) -> impl Iterator<Item = &Arc<str>> {
        self.candidates.words.iter()
    }

    /// The current scores of the given word, if it may still be the objective.
    pub fn score_of(&self, word: &str) -> Option<WordScore> {
        self.candidates.scores.get(word).copied()
    }

    /// The guesses applied since construction or the last [`reset`](Solver::reset).
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Applies the result of a guess, given as a score string of `0`, `1` and `2` digits.
    ///
    /// * `0`: the letter is not in the word.
    /// * `1`: the letter is in the word, but not in this location.
    /// * `2`: the letter is in the word at this location.
    ///
    /// Returns the number of possible words remaining. Invalid input is rejected without
    /// changing the solver.
    pub fn update(&mut self, guess: &str, score: &str) -> Result<usize, WordleError> {
        let guess = guess.to_ascii_lowercase();
        let result = GuessResult::from_score(&guess, score)?;
        self.update_with_result(&result)
    }

    /// Applies the given guess result, returning the number of possible words remaining.
    pub fn update_with_result(&mut self, result: &GuessResult) -> Result<usize, WordleError> {
        let restrictions = WordRestrictions::from_result(result, self.word_length())?;
        let before = self.remaining_count();
        let words = restrictions.filter(&self.index, &self.candidates.words)?;
        self.candidates = CandidateState::new(words, self.word_length());
        let remaining = self.remaining_count();
        debug!("Applied {}: {} -> {} possible words", result, before, remaining);
        self.history.push(GuessRecord {
            guess: result.guess.to_ascii_lowercase().into_boxed_str(),
            results: result.results.clone(),
            remaining,
        });
        Ok(remaining)
    }

    /// Returns up to `max_results` of the best guesses, best first.
    ///
    /// Words are ordered by their frequency score, then by their position score, then
    /// alphabetically. Words containing any of the letters in `exclude` are skipped.
    pub fn guess(&self, exclude: &str, max_results: usize) -> Vec<Suggestion> {
        let exclude: Vec<char> = exclude.to_lowercase().chars().collect();
        let mut ranked: Vec<Suggestion> = self
            .candidates
            .scores
            .iter()
            .filter(|(word, _)| !word.chars().any(|letter| exclude.contains(&letter)))
            .map(|(word, score)| Suggestion {
                word: Arc::clone(word),
                score: *score,
            })
            .collect();
        ranked.sort_by(rank_order);
        ranked.truncate(max_results);
        ranked
    }

    /// Returns the [`DEFAULT_MAX_RESULTS`] best guesses with no excluded letters.
    pub fn top_guesses(&self) -> Vec<Suggestion> {
        self.guess("", DEFAULT_MAX_RESULTS)
    }

    /// Makes every dictionary word possible again and forgets the guess history.
    ///
    /// Returns the number of possible words, which is always the dictionary size.
    pub fn reset(&mut self) -> usize {
        self.candidates = CandidateState::new(self.index.all_words(), self.word_length());
        self.history.clear();
        debug!("Reset to {} possible words", self.remaining_count());
        self.remaining_count()
    }
}

/// Orders suggestions best first: by frequency score, then position score, then alphabetically.
fn rank_order(a: &Suggestion, b: &Suggestion) -> Ordering {
    // Adding zero folds -0.0 into 0.0.
    let frequency = |suggestion: &Suggestion| suggestion.score.frequency + 0.0;
    let position = |suggestion: &Suggestion| suggestion.score.position + 0.0;
    frequency(b)
        .total_cmp(&frequency(a))
        .then_with(|| position(b).total_cmp(&position(a)))
        .then_with(|| a.word.cmp(&b.word))
}

/// Attempts to guess the given word within the maximum number of guesses, always playing the
/// solver's best suggestion.
///
/// The solver is reset before the game starts.
///
/// ```
/// use wordle_hints::*;
///
/// let mut solver = Solver::from_words(5, ["crane", "slate", "proud", "drool"]).unwrap();
///
/// assert!(matches!(play_game("proud", 6, &mut solver), GameResult::Success(_)));
/// assert_eq!(play_game("other", 6, &mut solver), GameResult::UnknownWord);
/// ```
pub fn play_game(objective: &str, max_num_guesses: u32, solver: &mut Solver) -> GameResult {
    solver.reset();
    let objective = objective.to_ascii_lowercase();
    if !solver.candidates.words.contains(objective.as_str()) {
        return GameResult::UnknownWord;
    }
    let mut guesses: Vec<Box<str>> = Vec::new();
    for _ in 0..max_num_guesses {
        let Some(best) = solver.guess("", 1).into_iter().next() else {
            break;
        };
        guesses.push(Box::from(&*best.word));
        let Ok(result) = get_result_for_guess(&objective, &best.word) else {
            break;
        };
        if result.is_solved() {
            return GameResult::Success(guesses);
        }
        if solver.update_with_result(&result).is_err() {
            break;
        }
    }
    GameResult::Failure(guesses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_state_scores_match_words() {
        let words: HashSet<Arc<str>> = ["crane", "slate", "proud"]
            .iter()
            .map(|word| Arc::from(*word))
            .collect();

        let state = CandidateState::new(words.clone(), 5);

        assert_eq!(state.words, words);
        assert_eq!(state.scores.keys().cloned().collect::<HashSet<_>>(), words);
    }

    #[test]
    fn rejected_update_leaves_state_alone() -> Result<(), WordleError> {
        let mut solver = Solver::from_words(5, ["crane", "slate", "proud", "drool"])?;
        let before = solver.top_guesses();

        assert_eq!(
            solver.update("crane", "0000"),
            Err(WordleError::WordLength(5))
        );
        assert_eq!(
            solver.update("cranes", "000000"),
            Err(WordleError::WordLength(5))
        );
        assert_eq!(
            solver.update("cr4ne", "00000"),
            Err(WordleError::UnsupportedCharacter('4'))
        );
        assert_eq!(
            solver.update("crane", "0000x"),
            Err(WordleError::InvalidScore('x'))
        );

        assert_eq!(solver.remaining_count(), 4);
        assert_eq!(solver.top_guesses(), before);
        assert!(solver.history().is_empty());
        Ok(())
    }

    fn suggestion(word: &str, frequency: f64, position: f64) -> Suggestion {
        Suggestion {
            word: Arc::from(word),
            score: WordScore {
                frequency,
                position,
            },
        }
    }

    #[test]
    fn rank_order_treats_signed_zeros_as_equal() {
        let mut ranked = vec![
            suggestion("delta", 0.0, -0.0),
            suggestion("gamma", -0.0, 0.0),
            suggestion("alpha", 0.0, 0.0),
            suggestion("omega", -0.5, 0.0),
            suggestion("zulu", 0.25, -0.0),
        ];

        ranked.sort_by(rank_order);

        let words: Vec<&str> = ranked.iter().map(|s| &*s.word).collect();
        assert_eq!(words, vec!["zulu", "alpha", "delta", "gamma", "omega"]);
    }

    #[test]
    fn update_records_history() -> Result<(), WordleError> {
        let mut solver = Solver::from_words(5, ["crane", "slate", "proud", "drool"])?;

        solver.update("TRAIN", "02000")?;

        assert_eq!(
            solver.history(),
            &[GuessRecord {
                guess: Box::from("train"),
                results: vec![
                    LetterResult::NotPresent,
                    LetterResult::Correct,
                    LetterResult::NotPresent,
                    LetterResult::NotPresent,
                    LetterResult::NotPresent,
                ],
                remaining: 2,
            }]
        );
        solver.reset();
        assert!(solver.history().is_empty());
        Ok(())
    }
}
