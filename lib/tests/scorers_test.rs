use wordle_hints::details::*;
use wordle_hints::*;

use std::collections::HashSet;
use std::result::Result;
use std::sync::Arc;

fn candidates(bank: &WordBank) -> HashSet<Arc<str>> {
    bank.iter().cloned().collect()
}

#[test]
fn letter_counts_from_bank() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(
        ["alpha", "allot", "begot", "below", "endow", "ingot"],
        5,
        InvalidWordPolicy::Reject,
    )?;

    let counts = LetterCounts::new(bank.iter(), bank.word_length());

    assert_eq!(counts.num_letter('a'), 3);
    assert_eq!(counts.num_letter('l'), 4);
    assert_eq!(counts.num_letter('o'), 5);
    assert_eq!(counts.num_located_letter('o', 3), 5);
    assert_eq!(counts.num_located_letter('t', 4), 3);
    assert_eq!(counts.total_letters(), 30);
    assert_eq!(counts.total_at_location(0), 6);
    Ok(())
}

#[test]
fn score_words_matches_solver_scores() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(
        ["alpha", "allot", "begot", "below", "endow", "ingot"],
        5,
        InvalidWordPolicy::Reject,
    )?;
    let solver = Solver::from_bank(&bank);

    let scores = score_words(&candidates(&bank), bank.word_length());

    assert_eq!(scores.len(), bank.len());
    for word in bank.iter() {
        assert_eq!(solver.score_of(word), scores.get(word).copied());
    }
    Ok(())
}

#[test]
fn score_words_penalizes_repeated_letters() -> Result<(), WordleError> {
    // Both words use letters that are equally common, but "sassy" repeats its 's'.
    let bank = WordBank::from_iterator(
        ["sassy", "salsa", "satyr", "stray", "sways"],
        5,
        InvalidWordPolicy::Reject,
    )?;

    let scores = score_words(&candidates(&bank), bank.word_length());

    assert!(scores["satyr"].frequency > scores["sassy"].frequency);
    assert!(scores["stray"].frequency > scores["sassy"].frequency);
    Ok(())
}

#[test]
fn solver_scores_follow_candidates() -> Result<(), WordleError> {
    let mut solver = Solver::from_words(
        5,
        ["alpha", "allot", "begot", "below", "endow", "ingot"],
    )?;
    let before = solver.score_of("ingot");

    solver.update("begot", "01020")?;

    let remaining: HashSet<Arc<str>> = solver.candidates().cloned().collect();
    assert_eq!(remaining, HashSet::from([Arc::from("endow")]));
    assert_eq!(
        solver.score_of("endow"),
        score_words(&remaining, 5).get("endow").copied()
    );
    assert!(before.is_some());
    assert_eq!(solver.score_of("ingot"), None);
    Ok(())
}
