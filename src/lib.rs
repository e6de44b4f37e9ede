//! Word Hunt
//!
//! Generates letter grids for a Boggle-style word game and finds every
//! dictionary word that can be traced through them.
//!
//! # Quick Start
//!
//! ```rust
//! use word_hunt::core::{Board, Trie};
//! use word_hunt::generator::find_words;
//!
//! // Build the dictionary once
//! let dictionary = Trie::from_words(["CAT", "CATS", "AT"]);
//!
//! // Find every word on a board
//! let board = Board::parse("CAT/ATS/XXX").unwrap();
//! let words = find_words(&board, &dictionary);
//! assert_eq!(words.len(), 3);
//! ```

// Core domain types
pub mod core;

// Board generation and word search
pub mod generator;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
