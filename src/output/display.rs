//! Display functions for command results

use super::formatters::{response_to_emoji, score_bar};
use crate::commands::{BatchStatistics, OpenerPair, PlayResult};
use crate::core::Word;
use colored::Colorize;

/// Print the result of playing out a word
pub fn print_play_result(result: &PlayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Playing: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            response_to_emoji(&step.response)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(score) = step.score {
                println!("  Expected:   {score:.3} candidates");
            }
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} rounds", result.rounds.len())
                .red()
                .bold()
        );
    }
}

/// Print aggregated batch statistics
pub fn print_batch_statistics(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\nWords played:     {}", stats.total_words);
    println!(
        "Solved:           {} ({:.1}%)",
        stats.solved,
        100.0 * stats.solved as f64 / stats.total_words.max(1) as f64
    );
    if stats.failed > 0 {
        println!("Failed:           {}", stats.failed.to_string().red());
    }
    println!("Average rounds:   {:.3}", stats.average_guesses);
    println!("Min / Max:        {} / {}", stats.min_guesses, stats.max_guesses);
    println!(
        "Throughput:       {:.1} words/s ({:.1?} total)",
        stats.words_per_second, stats.duration
    );

    println!("\nRound distribution:");
    let mut rounds: Vec<_> = stats.distribution.iter().collect();
    rounds.sort();
    let largest = stats.distribution.values().copied().max().unwrap_or(1);
    for (round, count) in rounds {
        println!(
            "  {round}: {:30} {count}",
            score_bar(*count as f64, largest, 30)
        );
    }

    if !stats.worst_words.is_empty() {
        println!("\nHardest words:");
        for (word, rounds) in &stats.worst_words {
            println!("  {} ({rounds} rounds)", word.to_uppercase());
        }
    }
}

/// Print a sweep of opening pairs and the winner
pub fn print_opener_results(pairs: &[OpenerPair], best: Option<&OpenerPair>, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING PAIR SWEEP".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let mut sorted: Vec<&OpenerPair> = pairs.iter().collect();
    sorted.sort_by(|a, b| a.score.total_cmp(&b.score));

    println!("\nTop pairs (expected remaining after both):");
    for pair in sorted.iter().take(top) {
        println!(
            "  {} + {}  →  {:.3}",
            pair.first.as_str().to_uppercase(),
            pair.second.as_str().to_uppercase(),
            pair.score
        );
    }

    if let Some(best) = best {
        println!(
            "\n{} {} + {} ({:.3} expected remaining)",
            "Best pair:".green().bold(),
            best.first.as_str().to_uppercase().bright_yellow().bold(),
            best.second.as_str().to_uppercase().bright_yellow().bold(),
            best.score
        );
    }
}

/// Print a per-word score table, best first
pub fn print_score_table(table: &[(Word, f64)], total_candidates: usize, top: usize) {
    let mut sorted: Vec<&(Word, f64)> = table.iter().collect();
    sorted.sort_by(|(_, a), (_, b)| a.total_cmp(b));

    println!("\nExpected remaining candidates per guess:");
    for (word, score) in sorted.iter().take(top) {
        println!(
            "  {}  {:30} {score:.3}",
            word.as_str().to_uppercase(),
            score_bar(*score, total_candidates, 30)
        );
    }
}
