//! Dictionaries for word hunt
//!
//! Provides an embedded English dictionary and loaders that build a trie from
//! newline-delimited word lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
