//! Core domain types for word hunt
//!
//! The dictionary trie, the letter grid, scoring and round bookkeeping.
//! Everything here is deterministic; randomness lives in the generator.

mod board;
mod round;
mod score;
mod trie;

pub use board::{Board, BoardError};
pub use round::{Round, Submission};
pub use score::{POINT_VALUES, compare_words, score_of, sort_words, total_score};
pub use trie::{Trie, TrieNode, is_word};
