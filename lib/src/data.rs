use crate::results::WordleError;
use log::{debug, info, warn};
use std::array;
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::ops::Deref;
use std::path::Path;
use std::path::PathBuf;
use std::result::Result;
use std::sync::Arc;

/// Number of letters in the supported alphabet (`a` to `z`).
pub const ALPHABET_SIZE: usize = 26;

/// Name of the word list compiled into the library.
pub const DEFAULT_WORD_LIST: &str = "words.txt";

const BUNDLED_WORD_LISTS: &[(&str, &str)] =
    &[(DEFAULT_WORD_LIST, include_str!("../data/words.txt"))];

/// Returns the contents of the bundled word list with the given name.
pub fn bundled_word_list(name: &str) -> Result<&'static str, WordleError> {
    BUNDLED_WORD_LISTS
        .iter()
        .find(|(list_name, _)| *list_name == name)
        .map(|(_, contents)| *contents)
        .ok_or_else(|| WordleError::UnknownWordList(name.to_string()))
}

/// Returns the zero-based index of the letter in the alphabet, if it is a lowercase letter.
pub fn letter_to_index(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some(letter as usize - 'a' as usize)
    } else {
        None
    }
}

/// Where to read the dictionary from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// A word list compiled into the library, looked up by name.
    Bundled(String),
    /// A plain text file with one word per line.
    File(PathBuf),
}

impl Default for WordSource {
    fn default() -> Self {
        WordSource::Bundled(DEFAULT_WORD_LIST.to_string())
    }
}

/// What to do with dictionary entries that have the wrong length or unsupported characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidWordPolicy {
    /// Fail to load the dictionary.
    #[default]
    Reject,
    /// Drop the entry and log a warning.
    Skip,
}

/// Settings used to construct a [`Solver`](crate::Solver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// The number of letters in every word of the puzzle.
    pub word_length: usize,
    pub source: WordSource,
    pub invalid_words: InvalidWordPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            word_length: 5,
            source: WordSource::default(),
            invalid_words: InvalidWordPolicy::default(),
        }
    }
}

/// Contains all the possible words for this Wordle game.
///
/// Words are trimmed and lower-cased, blank lines are ignored and duplicates are removed. Every
/// word has exactly [`word_length()`](WordBank::word_length) letters from `a` to `z`.
#[derive(Debug, Clone)]
pub struct WordBank {
    all_words: Vec<Arc<str>>,
    word_length: usize,
}

impl WordBank {
    /// Constructs a new `WordBank` by reading words from the given reader, one word per line.
    pub fn from_reader<R: BufRead>(
        word_reader: R,
        word_length: usize,
        policy: InvalidWordPolicy,
    ) -> Result<Self, WordleError> {
        let lines = word_reader.lines().collect::<io::Result<Vec<String>>>()?;
        WordBank::from_iterator(lines, word_length, policy)
    }

    /// Constructs a new `WordBank` from the given words.
    ///
    /// ```
    /// use wordle_hints::*;
    ///
    /// let bank = WordBank::from_iterator(["Crane", "", "slate "], 5, InvalidWordPolicy::Reject)
    ///     .unwrap();
    /// assert_eq!(bank.len(), 2);
    /// assert_eq!(&*bank[0], "crane");
    /// ```
    pub fn from_iterator<I, S>(
        words: I,
        word_length: usize,
        policy: InvalidWordPolicy,
    ) -> Result<Self, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<Arc<str>> = HashSet::new();
        let mut all_words: Vec<Arc<str>> = Vec::new();
        let mut num_skipped = 0;
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if let Err(err) = validate_word(&word, word_length) {
                match policy {
                    InvalidWordPolicy::Reject => return Err(err),
                    InvalidWordPolicy::Skip => {
                        warn!("Skipping dictionary entry {:?}: {}", word, err);
                        num_skipped += 1;
                        continue;
                    }
                }
            }
            let word: Arc<str> = Arc::from(word.as_str());
            if seen.insert(Arc::clone(&word)) {
                all_words.push(word);
            }
        }
        if num_skipped > 0 {
            info!(
                "Skipped {} dictionary entries that were not {}-letter words",
                num_skipped, word_length
            );
        }
        Ok(WordBank {
            all_words,
            word_length,
        })
    }

    /// Constructs a new `WordBank` from a file or a bundled word list.
    pub fn from_source(
        source: &WordSource,
        word_length: usize,
        policy: InvalidWordPolicy,
    ) -> Result<Self, WordleError> {
        let bank = match source {
            WordSource::Bundled(name) => {
                WordBank::from_iterator(bundled_word_list(name)?.lines(), word_length, policy)?
            }
            WordSource::File(path) => WordBank::from_path(path, word_length, policy)?,
        };
        info!("Loaded {} words from {:?}", bank.len(), source);
        Ok(bank)
    }

    /// Constructs a new `WordBank` by reading the file at the given path.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        word_length: usize,
        policy: InvalidWordPolicy,
    ) -> Result<Self, WordleError> {
        let reader = io::BufReader::new(File::open(path)?);
        WordBank::from_reader(reader, word_length, policy)
    }

    /// Returns the number of possible words.
    pub fn len(&self) -> usize {
        self.all_words.len()
    }

    /// Returns `true` if the bank holds no words.
    pub fn is_empty(&self) -> bool {
        self.all_words.is_empty()
    }

    /// Returns the length of each word in the bank.
    pub fn word_length(&self) -> usize {
        self.word_length
    }
}

impl Deref for WordBank {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.all_words
    }
}

fn validate_word(word: &str, word_length: usize) -> Result<(), WordleError> {
    if let Some(letter) = word.chars().find(|letter| letter_to_index(*letter).is_none()) {
        return Err(WordleError::UnsupportedCharacter(letter));
    }
    if word.len() != word_length {
        return Err(WordleError::WordLength(word_length));
    }
    Ok(())
}

/// A letter along with its location in the word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocatedLetter {
    pub letter: char,
    /// The zero-based location (i.e. index) for this letter in a word.
    pub location: u8,
}

impl LocatedLetter {
    pub fn new(letter: char, location: u8) -> LocatedLetter {
        LocatedLetter { letter, location }
    }
}

/// Indexes every word in the dictionary by each letter it contains and the location of that
/// letter.
///
/// The index is built once and never changes. To get all the words that contain a letter, union
/// the sets for every location of that letter.
#[derive(Debug, Clone)]
pub struct LetterIndex {
    word_length: usize,
    words_by_ll: [Vec<HashSet<Arc<str>>>; ALPHABET_SIZE],
}

impl LetterIndex {
    /// Builds the index from the given words of `word_length` lowercase letters.
    ///
    /// Words with a different number of letters are left out.
    pub fn new(words: &[Arc<str>], word_length: usize) -> LetterIndex {
        let mut words_by_ll: [Vec<HashSet<Arc<str>>>; ALPHABET_SIZE] =
            array::from_fn(|_| vec![HashSet::new(); word_length]);
        for word in words {
            if word.chars().count() != word_length {
                warn!("Not indexing {:?}: it does not have {} letters", word, word_length);
                continue;
            }
            for (location, letter) in word.chars().enumerate() {
                if let Some(row) = letter_to_index(letter) {
                    words_by_ll[row][location].insert(Arc::clone(word));
                }
            }
        }
        debug!(
            "Indexed {} words across {} locations",
            words.len(),
            word_length
        );
        LetterIndex {
            word_length,
            words_by_ll,
        }
    }

    /// Builds the index from every word in the bank.
    pub fn from_bank(bank: &WordBank) -> LetterIndex {
        LetterIndex::new(bank, bank.word_length())
    }

    /// Returns the length of the indexed words.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Returns the words with the given letter at the given location.
    ///
    /// Returns `None` if the letter is not in the alphabet or the location is out of range.
    pub fn words_with_located_letter(&self, ll: &LocatedLetter) -> Option<&HashSet<Arc<str>>> {
        letter_to_index(ll.letter)
            .and_then(|row| self.words_by_ll[row].get(ll.location as usize))
    }

    /// Returns the sets of words that contain the letter at each location, in location order.
    pub fn letter_row(&self, letter: char) -> &[HashSet<Arc<str>>] {
        match letter_to_index(letter) {
            Some(row) => &self.words_by_ll[row],
            None => &[],
        }
    }

    /// Returns every word that contains the given letter at any location.
    pub fn words_with_letter(&self, letter: char) -> HashSet<Arc<str>> {
        self.letter_row(letter)
            .iter()
            .flat_map(|words| words.iter().cloned())
            .collect()
    }

    /// Returns every indexed word.
    pub fn all_words(&self) -> HashSet<Arc<str>> {
        self.words_by_ll
            .iter()
            .flatten()
            .flat_map(|words| words.iter().cloned())
            .collect()
    }
}
