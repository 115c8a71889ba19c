use crate::data::letter_to_index;
use crate::data::ALPHABET_SIZE;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// The two frequency-based scores given to a candidate word.
///
/// Scores have no fixed range. They are only meaningful when compared with the scores of other
/// words from the same set of candidates; a higher score indicates a better guess.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordScore {
    /// Based on how often each of the word's letters appears anywhere in the candidates.
    pub frequency: f64,
    /// Based on how often each of the word's letters appears in the same location in the
    /// candidates.
    pub position: f64,
}

/// Counts how often each letter occurs across a set of words, both overall and per location.
#[derive(Debug, Clone)]
pub struct LetterCounts {
    overall: [u32; ALPHABET_SIZE],
    by_location: Vec<[u32; ALPHABET_SIZE]>,
    num_words: usize,
}

impl LetterCounts {
    /// Counts the letters in the given words. Words that do not have `word_length` letters are
    /// not counted.
    pub fn new<'a, I>(words: I, word_length: usize) -> LetterCounts
    where
        I: IntoIterator<Item = &'a Arc<str>>,
    {
        let mut counts = LetterCounts {
            overall: [0; ALPHABET_SIZE],
            by_location: vec![[0; ALPHABET_SIZE]; word_length],
            num_words: 0,
        };
        for word in words {
            if word.chars().count() != word_length {
                continue;
            }
            counts.num_words += 1;
            for (location, letter) in word.chars().enumerate() {
                if let Some(row) = letter_to_index(letter) {
                    counts.overall[row] += 1;
                    counts.by_location[location][row] += 1;
                }
            }
        }
        counts
    }

    /// The number of times the letter appears in any location.
    pub fn num_letter(&self, letter: char) -> u32 {
        letter_to_index(letter).map_or(0, |row| self.overall[row])
    }

    /// The number of times the letter appears in the given location.
    pub fn num_located_letter(&self, letter: char, location: usize) -> u32 {
        match (letter_to_index(letter), self.by_location.get(location)) {
            (Some(row), Some(counts)) => counts[row],
            _ => 0,
        }
    }

    /// The number of letters counted across every word.
    pub fn total_letters(&self) -> usize {
        self.num_words * self.by_location.len()
    }

    /// The number of letters counted in a single location.
    pub fn total_at_location(&self, location: usize) -> usize {
        if location < self.by_location.len() {
            self.num_words
        } else {
            0
        }
    }

    /// Scores a single word against these counts.
    ///
    /// Each distinct letter with multiplicity `m` multiplies the scores once per occurrence:
    ///
    /// * frequency by `(num_letter / m - m) / total_letters`
    /// * position by `(num_located_letter / m - m) / total_at_location`
    ///
    /// This penalizes repeated letters, since a repeat reveals less about the objective word.
    pub fn score_word(&self, word: &str) -> WordScore {
        let mut locations_by_letter: BTreeMap<char, Vec<usize>> = BTreeMap::new();
        for (location, letter) in word.chars().enumerate() {
            locations_by_letter.entry(letter).or_default().push(location);
        }
        let total_letters = self.total_letters() as f64;
        let mut score = WordScore {
            frequency: 1.0,
            position: 1.0,
        };
        for (letter, locations) in &locations_by_letter {
            let multiplicity = locations.len() as f64;
            for location in locations {
                score.frequency *= (self.num_letter(*letter) as f64 / multiplicity - multiplicity)
                    / total_letters;
                score.position *= (self.num_located_letter(*letter, *location) as f64
                    / multiplicity
                    - multiplicity)
                    / self.total_at_location(*location) as f64;
            }
        }
        score
    }
}

/// Computes the score of every candidate word, based on the letter counts of the candidates
/// themselves.
///
/// An empty set of candidates produces an empty map.
pub fn score_words(
    candidates: &HashSet<Arc<str>>,
    word_length: usize,
) -> HashMap<Arc<str>, WordScore> {
    if candidates.is_empty() || word_length == 0 {
        return HashMap::new();
    }
    let counts = LetterCounts::new(candidates, word_length);

    #[cfg(feature = "parallel")]
    let scores = candidates
        .par_iter()
        .map(|word| (Arc::clone(word), counts.score_word(word)))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let scores = candidates
        .iter()
        .map(|word| (Arc::clone(word), counts.score_word(word)))
        .collect();

    scores
}
