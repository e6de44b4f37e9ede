//! Board solving command
//!
//! Lists every word on a given board with its points and a path tracing it.

use crate::core::{Board, Trie, compare_words, score_of};
use crate::generator::find_word_paths;

/// A word found on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedWord {
    pub word: String,
    pub points: u32,
    /// Cell indices, row-major, in tracing order
    pub path: Vec<usize>,
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    /// Longest first, then alphabetical
    pub words: Vec<SolvedWord>,
    pub score: u32,
}

/// Solve a board given as row-major letters
///
/// Whitespace, `/` and `,` may separate rows.
///
/// # Errors
///
/// Returns an error if the letters do not form a square board of
/// alphabetic characters.
pub fn solve_board(letters: &str, dictionary: &Trie) -> Result<SolveResult, String> {
    let board = Board::parse(letters).map_err(|e| format!("Invalid board: {e}"))?;

    let mut words: Vec<SolvedWord> = find_word_paths(&board, dictionary)
        .into_iter()
        .map(|(word, path)| SolvedWord {
            points: score_of(&word),
            word,
            path,
        })
        .collect();
    words.sort_by(|a, b| compare_words(&a.word, &b.word));

    let score = words.iter().map(|w| w.points).sum();

    Ok(SolveResult {
        board,
        words,
        score,
    })
}
