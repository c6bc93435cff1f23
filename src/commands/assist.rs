//! Interactive assistant mode
//!
//! Suggests guesses for a game played elsewhere; the user reports the
//! observed feedback after each round.

use crate::core::{ResponsePattern, Word};
use crate::solver::{GuesserSession, SessionConfig, SessionStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive assistant loop
///
/// # Errors
///
/// Returns an error if reading user input fails or the guess vocabulary is
/// empty.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist(
    guesses: &[Word],
    answers: &[Word],
    config: SessionConfig,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║          Wordle Assistant - Expected-Size Minimizer          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest the guess that minimizes the expected number of");
    println!("remaining candidates. After each guess, enter the feedback:\n");
    println!("  - g for green (correct position)");
    println!("  - o for orange (in the word, wrong position)");
    println!("  - b for black (not credited)\n");
    println!("Commands: 'play <word>' to use your own guess, 'win' if solved,");
    println!("'new' for a new game, 'quit' to exit\n");

    let mut session = GuesserSession::new(guesses.to_vec(), answers.to_vec(), config);
    let mut round = 1;

    loop {
        let remaining = session.candidates().len();
        println!("────────────────────────────────────────────────────────────");
        println!("Round {round}: {remaining} candidates remaining");
        println!("────────────────────────────────────────────────────────────");

        let (suggested, score) = session.recommend_guess().map_err(|e| e.to_string())?;
        println!(
            "\nSuggested guess: {}",
            suggested.as_str().to_uppercase().bright_yellow().bold()
        );
        println!("Expected remaining: {score:.3} candidates\n");

        if remaining <= 10 {
            println!("Remaining candidates:");
            for candidate in session.candidates() {
                println!("  • {}", candidate.as_str().to_uppercase());
            }
            println!();
        }

        let mut current = suggested;

        let response = loop {
            let input = get_user_input("Enter feedback (g/o/b, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nGood luck out there!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    println!("\nNew game started!\n");
                    break None;
                }
                "win" | "correct" | "solved" => {
                    println!(
                        "\n{}",
                        format!("Solved in {round} rounds!").green().bold()
                    );
                    return Ok(());
                }
                _ => {
                    if let Some(word_text) = input.strip_prefix("play ") {
                        match Word::new(word_text.trim()) {
                            Ok(word) => {
                                current = word;
                                println!(
                                    "Using your guess: {}",
                                    word.as_str().to_uppercase().bright_yellow()
                                );
                            }
                            Err(e) => println!("{e}"),
                        }
                        continue;
                    }

                    match ResponsePattern::from_text(&input) {
                        Some(response) => break Some(response),
                        None => println!("Enter exactly 5 of g/o/b, e.g. 'gobbb'"),
                    }
                }
            }
        };

        let Some(response) = response else {
            // New game requested
            session = GuesserSession::new(guesses.to_vec(), answers.to_vec(), config);
            round = 1;
            continue;
        };

        match session.record_round(&current, &response) {
            Ok(SessionStatus::Solved) => {
                println!(
                    "\n{}",
                    format!("Solved in {round} rounds!").green().bold()
                );
                return Ok(());
            }
            Ok(_) => round += 1,
            Err(e) => {
                println!("\n{}", e.to_string().red());
                println!("The feedback so far rules out every word. Starting over.\n");
                session = GuesserSession::new(guesses.to_vec(), answers.to_vec(), config);
                round = 1;
            }
        }
    }
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
