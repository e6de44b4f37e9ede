//! Text-mode play
//!
//! Generates a board and lets the player type the words they spot.

use super::generate::{GenerateConfig, run_generate};
use crate::core::{Round, Submission, Trie};
use crate::output::formatters::format_board;
use colored::Colorize;
use std::io::{self, Write};

/// Run an interactive round on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no board
/// meeting the configured quality can be generated.
pub fn run_play(dictionary: &Trie, config: &GenerateConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Hunt - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Trace words through neighbouring letters (diagonals count) and type them in.");
    println!("Words need at least 3 letters and each cell is used once per word.\n");
    println!("Commands: ':board' to redraw, ':reveal' to give up, ':new' for a new board, ':quit' to exit\n");

    loop {
        let result = run_generate(dictionary, config).map_err(|e| e.to_string())?;
        let mut round = Round::new(result.generated.words);
        let board = result.generated.board;

        println!("{}", format_board(&board));
        println!(
            "\n{} words worth {} points are hidden on this board.\n",
            round.words().len().to_string().bright_cyan().bold(),
            round.total_points().to_string().bright_yellow().bold()
        );

        loop {
            match PlayInput::parse(&get_user_input("Word")?) {
                PlayInput::Empty => {}
                PlayInput::Quit => {
                    print_summary(&round);
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                PlayInput::Board => println!("{}\n", format_board(&board)),
                PlayInput::New => {
                    print_summary(&round);
                    println!("\n🔄 New board!\n");
                    break;
                }
                PlayInput::Reveal => {
                    let missed = round.reveal_all();
                    println!("\nMissed {} words:", missed.len());
                    for word in &missed {
                        println!("  • {}", word.bright_black());
                    }
                    print_summary(&round);

                    match get_user_input("Play again? (yes/no)")?
                        .to_lowercase()
                        .as_str()
                    {
                        "yes" | "y" => {
                            println!("\n🔄 New board!\n");
                            break;
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
                PlayInput::Unknown(command) => {
                    println!("  Unknown command ':{command}'");
                }
                PlayInput::Word(word) => match round.submit(word) {
                    Submission::Accepted { points } => {
                        println!(
                            "  {} +{}  ({} / {})",
                            word.to_uppercase().green().bold(),
                            points.to_string().bright_yellow(),
                            round.points(),
                            round.total_points()
                        );
                        if round.remaining() == 0 {
                            println!("\n{}", "🎉 Every word found!".bright_green().bold());
                        }
                    }
                    Submission::AlreadyFound => {
                        println!("  {} already found", word.to_uppercase().yellow());
                    }
                    Submission::NotOnBoard => {
                        println!("  {} is not on this board", word.to_uppercase().red());
                    }
                },
            }
        }
    }
}

/// One line typed during play
///
/// Commands carry a `:` prefix, which no word can contain, so words such as
/// NEW or QUIT are always scored as words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayInput<'a> {
    Empty,
    Word(&'a str),
    Board,
    New,
    Reveal,
    Quit,
    Unknown(&'a str),
}

impl<'a> PlayInput<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return if line.is_empty() {
                Self::Empty
            } else {
                Self::Word(line)
            };
        };

        match command.trim().to_lowercase().as_str() {
            "board" | "b" => Self::Board,
            "new" | "n" => Self::New,
            "reveal" | "r" => Self::Reveal,
            "quit" | "q" | "exit" => Self::Quit,
            _ => Self::Unknown(command.trim()),
        }
    }
}

fn print_summary(round: &Round) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Found {} of {} words, {} of {} points",
        round.found_words().len(),
        round.words().len(),
        round.points().to_string().bright_yellow().bold(),
        round.total_points()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_words() {
        for line in ["new", "board", "quit", "exit", "reveal", "q", "cats"] {
            assert_eq!(PlayInput::parse(line), PlayInput::Word(line));
        }
        assert_eq!(PlayInput::parse("  Seat \n"), PlayInput::Word("Seat"));
    }

    #[test]
    fn prefixed_lines_are_commands() {
        assert_eq!(PlayInput::parse(":new"), PlayInput::New);
        assert_eq!(PlayInput::parse(":N"), PlayInput::New);
        assert_eq!(PlayInput::parse(":board"), PlayInput::Board);
        assert_eq!(PlayInput::parse(":reveal"), PlayInput::Reveal);
        assert_eq!(PlayInput::parse(" :quit "), PlayInput::Quit);
        assert_eq!(PlayInput::parse(":exit"), PlayInput::Quit);
        assert_eq!(PlayInput::parse(":undo"), PlayInput::Unknown("undo"));
    }

    #[test]
    fn blank_line_is_ignored() {
        assert_eq!(PlayInput::parse(""), PlayInput::Empty);
        assert_eq!(PlayInput::parse("   "), PlayInput::Empty);
    }

    #[test]
    fn command_names_score_as_board_words() {
        let words: Vec<String> = ["REVEAL", "BOARD", "QUIT", "EXIT", "NEW"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut round = Round::new(words);

        for line in ["reveal", "board", "quit", "exit", "new"] {
            let PlayInput::Word(word) = PlayInput::parse(line) else {
                panic!("{line} should be read as a word");
            };
            assert!(matches!(round.submit(word), Submission::Accepted { .. }));
        }
        assert_eq!(round.remaining(), 0);
        assert_eq!(round.points(), 1400 + 800 + 400 + 400 + 100);
    }
}
