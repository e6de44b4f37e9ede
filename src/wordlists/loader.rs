//! Dictionary loading utilities
//!
//! Every loader trims lines, skips blank ones and upper-cases the rest before
//! insertion, since lookups match against upper case.

use crate::core::Trie;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary trie from a newline-delimited file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_hunt::wordlists::loader::load_from_file;
///
/// let trie = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", trie.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Trie> {
    let content = fs::read_to_string(path)?;
    Ok(trie_from_text(&content))
}

/// Build a dictionary trie from newline-delimited text
///
/// # Examples
/// ```
/// use word_hunt::wordlists::loader::trie_from_text;
///
/// let trie = trie_from_text("cat\n\n  dog \r\n");
/// assert!(trie.contains("CAT"));
/// assert!(trie.contains("DOG"));
/// assert_eq!(trie.len(), 2);
/// ```
#[must_use]
pub fn trie_from_text(text: &str) -> Trie {
    let mut trie = Trie::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            trie.insert(&trimmed.to_uppercase());
        }
    }
    trie
}

/// Build a dictionary trie from an embedded word slice
///
/// # Examples
/// ```
/// use word_hunt::wordlists::WORDS;
/// use word_hunt::wordlists::loader::trie_from_slice;
///
/// let trie = trie_from_slice(WORDS);
/// assert!(trie.contains("CAT"));
/// ```
#[must_use]
pub fn trie_from_slice(slice: &[&str]) -> Trie {
    let mut trie = Trie::new();
    for word in slice {
        let trimmed = word.trim();
        if !trimmed.is_empty() {
            trie.insert(&trimmed.to_uppercase());
        }
    }
    trie
}
