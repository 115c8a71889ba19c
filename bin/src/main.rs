use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::io;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use wordle_hints::*;

/// Suggests guesses for a Wordle-style puzzle based on the feedback you give it.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// The number of letters in each word.
    #[arg(default_value_t = 5)]
    word_length: usize,

    /// Path to a file that contains a list of possible words, with one word on each line. The
    /// bundled word list is used if this is not given.
    words_file: Option<PathBuf>,

    /// Skip words in the word list that have the wrong length or unsupported characters, instead
    /// of failing.
    #[arg(long)]
    skip_invalid: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Get suggestions for a puzzle you are playing. This is the default.
    Interactive,
    /// Let the solver play a single game against the given word.
    Single { word: String },
    /// Let the solver play against every word in the word list, and report how many guesses it
    /// needed.
    Benchmark {
        /// Only play against this many randomly chosen words.
        #[arg(long)]
        sample: Option<usize>,
        /// Give up on a word after this many guesses.
        #[arg(long, default_value_t = 128)]
        max_guesses: u32,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let start_time = Instant::now();
    let args = Args::parse();

    let config = SolverConfig {
        word_length: args.word_length,
        source: args
            .words_file
            .map(WordSource::File)
            .unwrap_or_default(),
        invalid_words: if args.skip_invalid {
            InvalidWordPolicy::Skip
        } else {
            InvalidWordPolicy::Reject
        },
    };
    let mut solver = Solver::from_config(&config)
        .with_context(|| format!("failed to load words from {:?}", config.source))?;
    info!("There are {} possible words.", solver.dictionary_len());

    match args.command.unwrap_or(Command::Interactive) {
        Command::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_interactive(&mut solver, stdin.lock(), stdout.lock())?;
        }
        Command::Single { word } => play_single_game(&word, &mut solver)?,
        Command::Benchmark {
            sample,
            max_guesses,
        } => run_benchmark(&mut solver, sample, max_guesses),
    }

    info!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// A single line of input in the interactive shell.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Quit,
    Help,
    Guess { exclude: String },
    Feedback { guess: String, score: String },
    Reset,
    History,
    Invalid(String),
}

fn parse_command(line: &str, word_length: usize) -> ShellCommand {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(name) = parts.first() else {
        return ShellCommand::Invalid("Invalid command".to_string());
    };
    match name.to_lowercase().as_str() {
        "q" | "quit" => ShellCommand::Quit,
        "h" | "help" => ShellCommand::Help,
        "g" | "guess" => ShellCommand::Guess {
            exclude: parts.get(1).unwrap_or(&"").to_string(),
        },
        "f" | "feedback" => match validate_feedback(&parts, word_length) {
            Ok(()) => ShellCommand::Feedback {
                guess: parts[1].to_string(),
                score: parts[2].to_string(),
            },
            Err(message) => ShellCommand::Invalid(message),
        },
        "r" | "reset" => ShellCommand::Reset,
        "history" => ShellCommand::History,
        _ => ShellCommand::Invalid("Invalid command".to_string()),
    }
}

fn validate_feedback(parts: &[&str], word_length: usize) -> Result<(), String> {
    if parts.len() != 3 {
        return Err(feedback_help(word_length));
    }
    let (guess, score) = (parts[1], parts[2]);
    if guess.chars().count() != word_length {
        Err(format!("Word must be {} letters.", word_length))
    } else if !guess.chars().all(|letter| letter.is_ascii_alphabetic()) {
        Err("Word must only contain letters".to_string())
    } else if score.chars().count() != word_length {
        Err(format!("Score must be {} digits.", word_length))
    } else if !score.chars().all(|mark| matches!(mark, '0'..='2')) {
        Err("Score must only contain digits between 0 and 2".to_string())
    } else {
        Ok(())
    }
}

fn help() -> String {
    "\n(Q) Quit: Quit playing\n\
     (H) Help: Show this menu\n\
     (G) Guess: Show the top guesses as \"{word} = ( {letterFrequencyScore}, {letterAtPositionFrequencyScore} )\". \
     Add letters to avoid, e.g. \"g xyz\"\n\
     (F) Feedback: Give feedback on the last guess. Example: \"f adieu 11020\"\n\
     (R) Reset: Reset the solver state for a new puzzle\n\
     History: Show the feedback given so far"
        .to_string()
}

fn feedback_help(word_length: usize) -> String {
    format!(
        "Usage: \"feedback {{ guess }} {{ score }}\", where score is composed of {} digits from 0 to 2.\n\
         0: Wrong letter\n\
         1: Correct letter, wrong position\n\
         2: Correct letter, correct position\n\
         Example: \"f adieu 11020\"\n",
        word_length
    )
}

fn write_suggestions<W: Write>(output: &mut W, suggestions: &[Suggestion]) -> io::Result<()> {
    if suggestions.is_empty() {
        return writeln!(output, "No words match.");
    }
    for suggestion in suggestions {
        writeln!(
            output,
            "{} = ( {}, {} )",
            suggestion.word, suggestion.score.frequency, suggestion.score.position
        )?;
    }
    Ok(())
}

fn run_interactive<R: BufRead, W: Write>(
    solver: &mut Solver,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "\n--- Welcome to Wordle Hints ---")?;
    writeln!(output, "{}", help())?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line, solver.word_length()) {
            ShellCommand::Quit => break,
            ShellCommand::Help => writeln!(output, "{}", help())?,
            ShellCommand::Guess { exclude } => {
                write_suggestions(&mut output, &solver.guess(&exclude, DEFAULT_MAX_RESULTS))?
            }
            ShellCommand::Feedback { guess, score } => match solver.update(&guess, &score) {
                Ok(remaining) => {
                    writeln!(output, "{} word(s) remain", remaining)?;
                    write_suggestions(&mut output, &solver.top_guesses())?;
                }
                Err(err) => writeln!(output, "{}", err)?,
            },
            ShellCommand::Reset => writeln!(output, "{} word(s) remain", solver.reset())?,
            ShellCommand::History => {
                for record in solver.history() {
                    let score: String = record.results.iter().map(|r| r.to_mark()).collect();
                    writeln!(
                        output,
                        "{} {} -> {} word(s)",
                        record.guess, score, record.remaining
                    )?;
                }
            }
            ShellCommand::Invalid(message) => writeln!(output, "{}", message)?,
        }
    }
    writeln!(output, "Goodbye.")?;
    Ok(())
}

fn play_single_game(word: &str, solver: &mut Solver) -> anyhow::Result<()> {
    match play_game(word, 128, solver) {
        GameResult::Success(guesses) => {
            println!("Solved it! It took me {} guesses.", guesses.len());
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::Failure(guesses) => {
            println!(
                "I still couldn't solve it after {} guesses :(",
                guesses.len()
            );
            for guess in guesses.iter() {
                println!("\t{}", guess);
            }
        }
        GameResult::UnknownWord => bail!("given word {:?} is not in the word list", word),
    }
    Ok(())
}

fn run_benchmark(solver: &mut Solver, sample: Option<usize>, max_guesses: u32) {
    let mut words: Vec<String> = solver.candidates().map(|word| word.to_string()).collect();
    words.sort_unstable();
    if let Some(sample) = sample {
        words = words
            .choose_multiple(&mut rand::thread_rng(), sample)
            .cloned()
            .collect();
    }

    let mut num_guesses_per_game: Vec<u32> = Vec::new();
    let mut num_failures = 0;
    for word in words.iter() {
        match play_game(word, max_guesses, solver) {
            GameResult::Success(guesses) => num_guesses_per_game.push(guesses.len() as u32),
            _ => num_failures += 1,
        }
    }
    println!(
        "Solved {} of {} words. Results:",
        num_guesses_per_game.len(),
        words.len()
    );
    if num_guesses_per_game.is_empty() {
        return;
    }

    let mut num_games_per_round: BTreeMap<u32, u32> = BTreeMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    for (num_round, num_games) in num_games_per_round.iter() {
        println!("|{}|{}|", num_round, num_games);
    }
    if num_failures > 0 {
        println!("|failed|{}|", num_failures);
    }

    let average: f64 = num_guesses_per_game.iter().sum::<u32>() as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
}
