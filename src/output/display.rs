//! Display functions for batch results

use super::formatters::{create_progress_bar, progression};
use crate::commands::{BatchReport, BatchStatistics, WordResult};
use colored::Colorize;

/// Print batch statistics with colored formatting
pub fn print_batch_statistics(report: &BatchReport, stats: &BatchStatistics, max_tries: usize) {
    println!("\n{}", "═".repeat(70));
    println!(" Batch Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words:         {}", stats.total_words);
    if stats.total_words == 0 {
        return;
    }
    println!(
        "  Solved:              {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words as f64 * 100.0
        )
        .green()
    );
    if stats.exhausted > 0 {
        println!(
            "  Out of attempts:     {} {}",
            stats.exhausted,
            format!(
                "({:.1}%)",
                stats.exhausted as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average attempts:    {}",
        format!("{:.3}", stats.average_attempts).bright_yellow().bold()
    );
    println!("  Solver calls:        {}", report.solver_calls);
    println!(
        "  Total time:          {:.2}s",
        report.duration.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        report.duration.as_millis() as f64 / stats.total_words as f64
    );

    println!("\n📈 {}", "Attempt Distribution".bright_cyan().bold());
    let max_count = stats.distribution.values().copied().max().unwrap_or(0);
    for attempts in 1..=max_tries {
        let count = stats.distribution.get(&attempts).copied().unwrap_or(0);
        let percentage = if stats.solved > 0 {
            count as f64 / stats.solved as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {attempts:2} attempts: {} {count:4} ({percentage:5.1}%)", bar.green());
    }

    if !stats.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Solved Words".yellow().bold());
        for (word, attempts) in &stats.hardest {
            println!("  {} ({attempts} attempts)", word.to_uppercase().yellow());
        }
    }
}

/// Print the guess path of every word that ran out of attempts
pub fn print_exhausted_words(results: &[WordResult]) {
    let exhausted: Vec<&WordResult> = results.iter().filter(|r| !r.solved()).collect();
    if exhausted.is_empty() {
        return;
    }

    println!("\n❌ {}", "Unsolved Words".red().bold());
    for result in exhausted {
        println!(
            "  {}: {}",
            result.word.text().to_uppercase().red(),
            progression(&result.attempts)
        );
    }
}
