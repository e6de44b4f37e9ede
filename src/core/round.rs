//! Found-word bookkeeping for one game round

use super::score::{score_of, total_score};
use super::trie::Trie;
use rustc_hash::FxHashSet;

/// Outcome of submitting a word during a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// New word, points awarded
    Accepted { points: u32 },
    /// Already found earlier this round
    AlreadyFound,
    /// Not one of the board's words
    NotOnBoard,
}

/// State of a single round on one board
///
/// Keeps its own trie of found words, independent of the dictionary.
#[derive(Debug, Clone)]
pub struct Round {
    words: Vec<String>,
    possible: FxHashSet<String>,
    found: Trie,
    found_order: Vec<String>,
    points: u32,
}

impl Round {
    /// Start a round over the words reachable on a board
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let possible = words.iter().cloned().collect();
        Self {
            words,
            possible,
            found: Trie::new(),
            found_order: Vec::new(),
            points: 0,
        }
    }

    /// Submit a word traced or typed by the player
    ///
    /// Input is trimmed and upper-cased before checking.
    pub fn submit(&mut self, word: &str) -> Submission {
        let word = word.trim().to_uppercase();

        if !self.possible.contains(&word) {
            return Submission::NotOnBoard;
        }
        if self.found.contains(&word) {
            return Submission::AlreadyFound;
        }

        self.found.insert(&word);
        let points = score_of(&word);
        self.points += points;
        self.found_order.push(word);
        Submission::Accepted { points }
    }

    /// Mark every remaining word as found without awarding points
    ///
    /// Returns the words the player missed, in board order.
    pub fn reveal_all(&mut self) -> Vec<String> {
        let missed: Vec<String> = self
            .words
            .iter()
            .filter(|w| !self.found.contains(w))
            .cloned()
            .collect();

        for word in &missed {
            self.found.insert(word);
        }
        missed
    }

    #[must_use]
    pub fn has_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    /// Points earned so far
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Points available on the board
    #[must_use]
    pub fn total_points(&self) -> u32 {
        total_score(&self.words)
    }

    /// Words found by the player, in the order they were submitted
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found_order
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.words.len() - self.found_order.len()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round() -> Round {
        Round::new(vec!["CATS".into(), "CAT".into(), "ACT".into()])
    }

    #[test]
    fn accepts_new_words_once() {
        let mut round = round();
        assert_eq!(round.submit("cat"), Submission::Accepted { points: 100 });
        assert_eq!(round.submit("CAT"), Submission::AlreadyFound);
        assert_eq!(round.points(), 100);
        assert!(round.has_found("cat"));
    }

    #[test]
    fn rejects_words_not_on_board() {
        let mut round = round();
        assert_eq!(round.submit("DOG"), Submission::NotOnBoard);
        assert_eq!(round.submit("CA"), Submission::NotOnBoard);
        assert_eq!(round.points(), 0);
    }

    #[test]
    fn tracks_points_and_remaining() {
        let mut round = round();
        round.submit("CATS");
        round.submit(" act ");
        assert_eq!(round.points(), 500);
        assert_eq!(round.total_points(), 600);
        assert_eq!(round.remaining(), 1);
        assert_eq!(round.found_words(), ["CATS", "ACT"]);
    }

    #[test]
    fn reveal_returns_missed_words_without_points() {
        let mut round = round();
        round.submit("CAT");
        let missed = round.reveal_all();
        assert_eq!(missed, ["CATS", "ACT"]);
        assert_eq!(round.points(), 100);
        assert!(round.has_found("CATS"));
        assert_eq!(round.submit("ACT"), Submission::AlreadyFound);
    }
}
