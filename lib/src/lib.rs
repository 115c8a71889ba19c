//! Suggests guesses for Wordle-style puzzles.
//!
//! A [`Solver`] indexes a dictionary by letter and location, narrows it down as guess results are
//! applied, and ranks the remaining words by how common their letters are among the words that
//! are still possible.
//!
//! ```
//! use wordle_hints::*;
//!
//! let mut solver = Solver::new(5, None)?;
//! let first = solver.top_guesses();
//! assert_eq!(first.len(), DEFAULT_MAX_RESULTS);
//!
//! solver.update(&first[0].word, "01020")?;
//! assert!(solver.remaining_count() < solver.dictionary_len());
//!
//! assert_eq!(solver.reset(), solver.dictionary_len());
//! # Ok::<(), WordleError>(())
//! ```

mod data;
mod engine;
mod restrictions;
mod results;
mod scorers;

pub use data::bundled_word_list;
pub use data::InvalidWordPolicy;
pub use data::SolverConfig;
pub use data::WordBank;
pub use data::WordSource;
pub use data::DEFAULT_WORD_LIST;
pub use engine::*;
pub use results::*;
pub use scorers::WordScore;

/// Building blocks used by the [`Solver`], for callers that want to filter or score words
/// themselves.
pub mod details {
    pub use crate::data::letter_to_index;
    pub use crate::data::LetterIndex;
    pub use crate::data::LocatedLetter;
    pub use crate::data::ALPHABET_SIZE;
    pub use crate::restrictions::WordRestrictions;
    pub use crate::scorers::score_words;
    pub use crate::scorers::LetterCounts;
}
