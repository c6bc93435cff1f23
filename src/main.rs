//! Wordle Expected-Size Minimizer - CLI
//!
//! Greedy Wordle solver that picks the guess minimizing the expected size
//! of the remaining candidate set.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordle_minexp::{
    commands::{
        BatchConfig, PlayConfig, best_pair, evaluate_pair, play_word, run_assist, run_batch,
        sweep_openers,
    },
    core::Word,
    output::{
        print_batch_statistics, print_opener_results, print_play_result, print_score_table,
    },
    solver::{ConstraintState, SessionConfig, score_table},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle_minexp",
    about = "Wordle solver minimizing the expected remaining candidate count",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess vocabulary file (one 5-letter word per line)
    #[arg(short = 'g', long, global = true, default_value = "guess_words.txt")]
    guesses: PathBuf,

    /// Answer vocabulary file; defaults to the guess list
    #[arg(short = 'a', long, global = true)]
    answers: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Assist {
        /// Only suggest words that can still be the answer
        #[arg(long)]
        answers_only: bool,

        /// Switch to answer-consistent suggestions after N rounds
        #[arg(long)]
        restrict_after: Option<usize>,
    },

    /// Play out a specific target word
    Play {
        /// The target word to solve
        word: String,

        /// Override the first guess
        #[arg(short, long)]
        first: Option<String>,

        /// Switch to answer-consistent guesses after N rounds
        #[arg(long)]
        restrict_after: Option<usize>,

        /// Show per-round candidate counts and scores
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play every answer word and aggregate statistics
    Batch {
        /// First word for every game
        #[arg(short, long)]
        first: Option<String>,

        /// Limit the number of answers played
        #[arg(short, long)]
        limit: Option<usize>,

        /// Play a random sample of N answers
        #[arg(short, long)]
        sample: Option<usize>,

        /// Switch each game to answer-consistent guesses after N rounds
        #[arg(long, default_value_t = 2)]
        restrict_after: usize,
    },

    /// Sweep opening pairs and report the best one
    Openers {
        /// Limit the number of first guesses swept
        #[arg(short, long)]
        limit: Option<usize>,

        /// How many pairs to print
        #[arg(long, default_value_t = 10)]
        top: usize,
    },

    /// Evaluate one fixed opening pair
    Evaluate {
        /// First word of the pair
        first: String,

        /// Second word of the pair
        second: String,
    },

    /// Score every guess against the opening position
    Scores {
        /// How many entries to print
        #[arg(long, default_value_t = 20)]
        top: usize,
    },
}

/// Load the guess and answer vocabularies
///
/// Without an explicit answers file the guess list doubles as the answer
/// list (full-vocabulary mode).
fn load_wordlists(guesses: &Path, answers: Option<&Path>) -> Result<(Vec<Word>, Vec<Word>)> {
    let guess_words = load_from_file(guesses)
        .with_context(|| format!("Failed to load guess list from {}", guesses.display()))?;

    let answer_words = match answers {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load answer list from {}", path.display()))?,
        None => guess_words.clone(),
    };

    Ok((guess_words, answer_words))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (guess_words, answer_words) = load_wordlists(&cli.guesses, cli.answers.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Assist {
        answers_only: false,
        restrict_after: None,
    });

    match command {
        Commands::Assist {
            answers_only,
            restrict_after,
        } => {
            let config = SessionConfig {
                answers_only,
                restrict_after,
            };
            run_assist(&guess_words, &answer_words, config).map_err(|e| anyhow::anyhow!(e))
        }

        Commands::Play {
            word,
            first,
            restrict_after,
            verbose,
        } => {
            let mut config = PlayConfig::new(word);
            config.first_guess = first;
            config.restrict_after = restrict_after;

            let result =
                play_word(&config, &guess_words, &answer_words).map_err(|e| anyhow::anyhow!(e))?;
            print_play_result(&result, verbose);
            Ok(())
        }

        Commands::Batch {
            first,
            limit,
            sample,
            restrict_after,
        } => {
            let config = BatchConfig {
                first_guess: first,
                restrict_after: Some(restrict_after),
                limit,
                sample,
            };

            let stats = run_batch(&config, &guess_words, &answer_words)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_batch_statistics(&stats);
            Ok(())
        }

        Commands::Openers { limit, top } => {
            println!(
                "Sweeping opening pairs over {} first guesses...",
                limit.unwrap_or(guess_words.len()).min(guess_words.len())
            );
            let pairs = sweep_openers(&guess_words, &answer_words, limit);
            print_opener_results(&pairs, best_pair(&pairs), top);
            Ok(())
        }

        Commands::Evaluate { first, second } => {
            let score = evaluate_pair(&first, &second, &answer_words)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!(
                "{} + {}: {score:.4} expected remaining candidates (of {})",
                first.to_uppercase(),
                second.to_uppercase(),
                answer_words.len()
            );
            Ok(())
        }

        Commands::Scores { top } => {
            let table = score_table(&guess_words, &ConstraintState::new(), &answer_words);
            print_score_table(&table, answer_words.len(), top);
            Ok(())
        }
    }
}
