//! Display functions for command results

use super::formatters::{create_progress_bar, format_board, format_path};
use crate::commands::{GenerateResult, ProfileResult, SolveResult};
use crate::core::score_of;
use colored::Colorize;
use std::time::Duration;

/// Print how long building the dictionary trie took
pub fn print_dictionary_loaded(source: &str, words: i32, duration: Duration) {
    println!(
        "{} {} words from {} in {:.1} ms",
        "📖 Loaded".bright_cyan(),
        words.to_string().bright_yellow(),
        source,
        duration.as_secs_f64() * 1000.0
    );
}

/// Print a generated board with its words and quality
pub fn print_generate_result(result: &GenerateResult, show_words: bool) {
    let generated = &result.generated;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}×{} ",
        "GENERATED BOARD".bright_cyan().bold(),
        generated.board.size(),
        generated.board.size()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}\n", format_board(&generated.board));

    // Bar spans up to three standard deviations above the mean
    let ceiling = f64::from(result.profile.mean_score) + 3.0 * f64::from(result.profile.std_score);
    let bar = create_progress_bar(f64::from(generated.score), ceiling, 30);

    println!(
        "📊 Total possible points: {}",
        generated.score.to_string().bright_yellow().bold()
    );
    println!("   Quality:   [{}] {}", bar.green(), result.quality.tier().name());
    println!("   Threshold: {:.0} points", result.threshold());
    println!("   Words:     {}", generated.words.len());
    println!("   Attempts:  {}", generated.attempts);
    println!("   Time:      {:.2}s", result.duration.as_secs_f64());

    if show_words {
        println!("\n📝 {}", "Words:".bright_cyan().bold());
        for word in &generated.words {
            println!("   {:>5}  {}", score_of(word), word);
        }
    }
}

/// Print every word on a solved board
pub fn print_solve_result(result: &SolveResult, show_paths: bool) {
    println!("\n{}\n", format_board(&result.board));
    println!(
        "Found {} words worth {} points",
        result.words.len().to_string().bright_cyan().bold(),
        result.score.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for solved in &result.words {
        if show_paths {
            println!(
                "{:>5}  {:<12} {}",
                solved.points,
                solved.word.bright_white().bold(),
                format_path(&result.board, &solved.path).bright_black()
            );
        } else {
            println!("{:>5}  {}", solved.points, solved.word);
        }
    }
}

/// Print the result of a profiling run
pub fn print_profile_result(result: &ProfileResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}×{} ",
        "SCORE PROFILE".bright_cyan().bold(),
        result.size,
        result.size
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Scores:".bright_cyan().bold());
    println!("   Boards sampled:   {}", result.samples);
    println!(
        "   Mean:             {}",
        format!("{:.0}", result.mean).bright_yellow().bold()
    );
    println!("   Std deviation:    {:.0}", result.std_dev);
    println!("   Median:           {}", result.median);
    println!("   5th percentile:   {}", result.p5);
    println!("   Min / Max:        {} / {}", result.min, result.max);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    let suggested = result.suggested();
    println!("\n📈 {}", "Suggested profile:".bright_cyan().bold());
    println!(
        "   mean {}  std {}  min {}",
        suggested.mean_score.to_string().green(),
        suggested.std_score.to_string().green(),
        suggested.min_score.to_string().green()
    );
}
