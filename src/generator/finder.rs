//! Trie-pruned word search over a board
//!
//! A depth-first walk from every cell that only descends while the dictionary
//! still has a word continuing with the letters collected so far.

use crate::core::{Board, Trie, TrieNode};
use rustc_hash::{FxHashMap, FxHashSet};

/// Find every dictionary word that can be traced on the board
///
/// A word is traced through side- or diagonal-adjacent cells without reusing a
/// cell. Each word appears once no matter how many paths spell it.
///
/// # Examples
/// ```
/// use word_hunt::core::{Board, Trie};
/// use word_hunt::generator::find_words;
///
/// let trie = Trie::from_words(["CAT", "CATS", "AT", "CATFISH"]);
/// let board = Board::parse("CAT ATS XXX").unwrap();
///
/// let words = find_words(&board, &trie);
/// assert_eq!(words.len(), 3);
/// assert!(words.contains("CATS"));
/// assert!(!words.contains("CATFISH"));
/// ```
#[must_use]
pub fn find_words(board: &Board, trie: &Trie) -> FxHashSet<String> {
    let mut search = Search::new(board);
    let mut found: FxHashSet<String> = FxHashSet::default();
    search.run(trie, |word, _| {
        if !found.contains(word) {
            found.insert(word.to_string());
        }
    });
    found
}

/// Find every word along with the first path that spells it
///
/// Paths are flat cell indices in the order they are traced.
#[must_use]
pub fn find_word_paths(board: &Board, trie: &Trie) -> FxHashMap<String, Vec<usize>> {
    let mut search = Search::new(board);
    let mut found: FxHashMap<String, Vec<usize>> = FxHashMap::default();
    search.run(trie, |word, path| {
        if !found.contains_key(word) {
            found.insert(word.to_string(), path.to_vec());
        }
    });
    found
}

/// Backtracking state for one board
///
/// Owns its visited matrix so independent searches never share state.
struct Search<'b> {
    board: &'b Board,
    visited: Vec<bool>,
    word: String,
    path: Vec<usize>,
}

impl<'b> Search<'b> {
    fn new(board: &'b Board) -> Self {
        Self {
            board,
            visited: vec![false; board.len()],
            word: String::with_capacity(board.len()),
            path: Vec::with_capacity(board.len()),
        }
    }

    fn run<F: FnMut(&str, &[usize])>(&mut self, trie: &Trie, mut on_word: F) {
        for start in 0..self.board.len() {
            self.visit(start, trie.root(), &mut on_word);
        }
    }

    fn visit<F: FnMut(&str, &[usize])>(&mut self, cell: usize, node: &TrieNode, on_word: &mut F) {
        let letter = self.board.cells()[cell];
        let Some(next) = node.child(letter) else {
            return;
        };

        self.visited[cell] = true;
        self.word.push(letter);
        self.path.push(cell);

        if next.is_word() {
            on_word(self.word.as_str(), self.path.as_slice());
        }

        let board = self.board;
        for neighbor in board.neighbors(cell) {
            if !self.visited[neighbor] {
                self.visit(neighbor, next, on_word);
            }
        }

        self.path.pop();
        self.word.pop();
        self.visited[cell] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{POINT_VALUES, sort_words, total_score};

    fn scenario() -> (Board, Trie) {
        let trie = Trie::from_words(["CAT", "CATS", "AT", "CATFISH"]);
        let board = Board::parse("CAT/ATS/XXX").unwrap();
        (board, trie)
    }

    #[test]
    fn finds_exactly_the_traceable_words() {
        let (board, trie) = scenario();
        let words = find_words(&board, &trie);

        let expected: FxHashSet<String> = ["CAT", "CATS", "AT"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn scenario_sorts_and_scores() {
        let (board, trie) = scenario();
        let mut words: Vec<String> = find_words(&board, &trie).into_iter().collect();
        sort_words(&mut words);

        assert_eq!(words, ["CATS", "CAT", "AT"]);
        assert_eq!(
            total_score(&words),
            POINT_VALUES[4] + POINT_VALUES[3] + POINT_VALUES[2]
        );
    }

    #[test]
    fn cells_are_not_reused() {
        let trie = Trie::from_words(["AA", "AAA", "ABA"]);
        let board = Board::parse("AB/XX").unwrap();
        let words = find_words(&board, &trie);
        assert!(words.is_empty());

        let board = Board::parse("AA/XX").unwrap();
        let words = find_words(&board, &trie);
        assert!(words.contains("AA"));
        assert!(!words.contains("AAA"));
    }

    #[test]
    fn diagonal_moves_count() {
        let trie = Trie::from_words(["AD", "BC"]);
        let board = Board::parse("AB/CD").unwrap();
        let words = find_words(&board, &trie);
        assert!(words.contains("AD"));
        assert!(words.contains("BC"));
    }

    #[test]
    fn non_adjacent_letters_do_not_join() {
        let trie = Trie::from_words(["AC"]);
        let board = Board::parse("ABC/XXX/XXX").unwrap();
        assert!(find_words(&board, &trie).is_empty());
    }

    #[test]
    fn many_paths_yield_one_entry() {
        let trie = Trie::from_words(["EAT"]);
        let board = Board::parse("EAT/TAE/EAT").unwrap();
        let words = find_words(&board, &trie);
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let board = Board::parse("ABCD").unwrap();
        assert!(find_words(&board, &Trie::new()).is_empty());
    }

    #[test]
    fn lowercase_dictionary_never_matches() {
        let trie = Trie::from_words(["cat"]);
        let board = Board::parse("CA/TX").unwrap();
        assert!(find_words(&board, &trie).is_empty());
    }

    #[test]
    fn paths_spell_their_words() {
        let (board, trie) = scenario();
        let paths = find_word_paths(&board, &trie);

        assert_eq!(paths.len(), 3);
        for (word, path) in &paths {
            let spelled: String = path.iter().map(|&i| board.cells()[i]).collect();
            assert_eq!(&spelled, word);

            for pair in path.windows(2) {
                assert!(board.neighbors(pair[0]).any(|n| n == pair[1]));
            }
            let unique: FxHashSet<&usize> = path.iter().collect();
            assert_eq!(unique.len(), path.len());
        }
        assert_eq!(paths["CATS"], vec![0, 1, 2, 5]);
    }

    #[test]
    fn paths_and_words_agree() {
        let trie = Trie::from_words(["TEA", "EAT", "ATE", "TEAS", "SEAT", "EATS", "SATE"]);
        let board = Board::parse("SEAT/TEAS/EATS/ATES").unwrap();
        let words = find_words(&board, &trie);
        let paths = find_word_paths(&board, &trie);

        let path_words: FxHashSet<String> = paths.into_keys().collect();
        assert_eq!(words, path_words);
    }
}
