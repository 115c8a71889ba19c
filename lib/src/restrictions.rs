use crate::data::letter_to_index;
use crate::data::LetterIndex;
use crate::data::LocatedLetter;
use crate::results::GuessResult;
use crate::results::LetterResult;
use crate::results::WordleError;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::result::Result;
use std::sync::Arc;

/// The marks one letter received across every location it occupies in a guess.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct LetterMarks {
    marks: Vec<(usize, LetterResult)>,
}

impl LetterMarks {
    /// The number of times this letter was marked as being in the word.
    fn num_present(&self) -> usize {
        self.marks
            .iter()
            .filter(|(_, result)| result.is_present())
            .count()
    }
}

/// Defines the letter restrictions that one guess result imposes on the objective word.
///
/// * A [`LetterResult::Correct`] letter must be in that location.
/// * A [`LetterResult::PresentNotHere`] letter must be in the word, but not in that location.
/// * A [`LetterResult::NotPresent`] letter is not in the word at all, unless the same letter was
///   marked present elsewhere in the guess. In that case it is only excluded from that location.
///
/// Every letter marked present must also appear in the word at least as many times as it was
/// marked present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRestrictions {
    word_length: usize,
    letters: BTreeMap<char, LetterMarks>,
}

impl WordRestrictions {
    /// Returns the restrictions imposed by the given result, for words of the given length.
    ///
    /// Letters are compared case-insensitively.
    pub fn from_result(
        result: &GuessResult,
        word_length: usize,
    ) -> Result<WordRestrictions, WordleError> {
        if result.results.len() != word_length || result.guess.chars().count() != word_length {
            return Err(WordleError::WordLength(word_length));
        }
        let mut letters: BTreeMap<char, LetterMarks> = BTreeMap::new();
        for ((location, letter), mark) in result.guess.chars().enumerate().zip(&result.results) {
            let letter = letter.to_ascii_lowercase();
            if letter_to_index(letter).is_none() {
                return Err(WordleError::UnsupportedCharacter(letter));
            }
            letters
                .entry(letter)
                .or_default()
                .marks
                .push((location, *mark));
        }
        Ok(WordRestrictions {
            word_length,
            letters,
        })
    }

    /// Returns the minimum number of times the letter must appear in the word.
    pub fn min_count(&self, letter: char) -> usize {
        self.letters
            .get(&letter)
            .map_or(0, |marks| marks.num_present())
    }

    /// Returns `true` iff the given word satisfies these restrictions.
    pub fn is_satisfied_by(&self, word: &str) -> bool {
        let word_letters: Vec<char> = word.chars().collect();
        word_letters.len() == self.word_length
            && self.letters.iter().all(|(letter, marks)| {
                let num_present = marks.num_present();
                let is_here = |location: usize| word_letters.get(location) == Some(letter);
                let satisfies_marks = marks.marks.iter().all(|(location, result)| match result {
                    LetterResult::Correct => is_here(*location),
                    LetterResult::PresentNotHere => {
                        !is_here(*location)
                            && (0..word_letters.len())
                                .any(|other| other != *location && is_here(other))
                    }
                    LetterResult::NotPresent if num_present > 0 => !is_here(*location),
                    LetterResult::NotPresent => !word_letters.contains(letter),
                });
                satisfies_marks
                    && word_letters.iter().filter(|other| *other == letter).count() >= num_present
            })
    }

    /// Returns the subset of `candidates` that satisfies these restrictions, using the index to
    /// look up which words have each letter in each location.
    ///
    /// Fails with [`WordleError::WordLength`] if the index was built for a different word length.
    pub fn filter(
        &self,
        index: &LetterIndex,
        candidates: &HashSet<Arc<str>>,
    ) -> Result<HashSet<Arc<str>>, WordleError> {
        if index.word_length() != self.word_length {
            return Err(WordleError::WordLength(index.word_length()));
        }
        let mut remaining = candidates.clone();
        for (letter, marks) in &self.letters {
            let row = index.letter_row(*letter);
            let letter_is_present = marks.num_present() > 0;
            for (location, result) in &marks.marks {
                let here = u8::try_from(*location)
                    .ok()
                    .and_then(|location| {
                        index.words_with_located_letter(&LocatedLetter::new(*letter, location))
                    })
                    .ok_or(WordleError::WordLength(self.word_length))?;
                match result {
                    LetterResult::Correct => {
                        remaining.retain(|word| here.contains(word));
                    }
                    LetterResult::PresentNotHere => {
                        remaining.retain(|word| {
                            !here.contains(word)
                                && row
                                    .iter()
                                    .enumerate()
                                    .any(|(other, words)| {
                                        other != *location && words.contains(word)
                                    })
                        });
                    }
                    // The letter shows up elsewhere in this guess, so only this location is
                    // ruled out.
                    LetterResult::NotPresent if letter_is_present => {
                        remaining.retain(|word| !here.contains(word));
                    }
                    LetterResult::NotPresent => {
                        for words in row {
                            remaining.retain(|word| !words.contains(word));
                        }
                    }
                }
            }
        }
        // Lower bounds run last, once every located mark has been applied.
        for letter in self.letters.keys() {
            let min_count = self.min_count(*letter);
            if min_count > 0 {
                remaining.retain(|word| word.chars().filter(|c| c == letter).count() >= min_count);
            }
        }
        Ok(remaining)
    }
}
