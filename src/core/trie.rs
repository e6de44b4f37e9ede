//! Dictionary prefix tree
//!
//! Each node owns its children outright. Every inserted word bumps the
//! reference count of every node on its path, root included.

use rustc_hash::FxHashMap;

/// One prefix position in the trie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    is_word: bool,
    ref_count: i32,
}

impl TrieNode {
    /// Child reached by consuming `c`, if any word continues with it
    #[inline]
    #[must_use]
    pub fn child(&self, c: char) -> Option<&Self> {
        self.children.get(&c)
    }

    /// True iff the path from the root to this node spells an inserted word
    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        self.is_word
    }

    /// Number of insertions that walked through this node, minus removals
    #[inline]
    #[must_use]
    pub const fn ref_count(&self) -> i32 {
        self.ref_count
    }

    /// Number of distinct continuations from this prefix
    #[inline]
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Prefix tree over dictionary words
///
/// The dictionary trie is built once and then shared read-only; a round keeps a
/// second, independent trie of the words found so far.
///
/// # Examples
/// ```
/// use word_hunt::core::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("CAT");
/// assert!(trie.contains("cat"));
/// assert!(!trie.contains("CA"));
/// assert!(trie.has_prefix("CA"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a sequence of words, inserting each one as given
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Root node, the starting point of every walk
    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of insertions currently recorded at the root
    ///
    /// A word inserted twice counts twice. [`Trie::remove`] lowers this count
    /// without forgetting anything, so after it `len` no longer matches the
    /// words `contains` reports and can disagree with [`Trie::is_empty`].
    /// [`Trie::delete`] keeps the two in step.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> i32 {
        self.root.ref_count
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Insert a word
    ///
    /// Surrounding whitespace is trimmed; case is kept as given. Inserting the
    /// same word twice keeps membership unchanged but counts both insertions.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        node.ref_count += 1;
        for c in word.trim().chars() {
            node = node.children.entry(c).or_default();
            node.ref_count += 1;
        }
        node.is_word = true;
    }

    /// Decrement reference counts along the path of `word`
    ///
    /// Leaves `is_word` and every child link in place, so `contains` still
    /// reports the word afterwards. Characters with no matching child are
    /// skipped and counts are allowed to go negative for words that were never
    /// inserted. Use [`Trie::delete`] to actually forget a word.
    pub fn remove(&mut self, word: &str) {
        remove_from(&mut self.root, word.chars());
    }

    /// Forget a word previously inserted
    ///
    /// Returns `false` and leaves the trie untouched when the word is not
    /// present. Otherwise takes every insertion of the word off the counts
    /// along its path, clears the word flag and prunes every node no remaining
    /// insertion walks through.
    pub fn delete(&mut self, word: &str) -> bool {
        let key = normalize(word);
        let Some(terminal) = self.node(&key).filter(|node| node.is_word) else {
            return false;
        };

        // Insertions ending here are whatever the children do not account for
        let passing: i32 = terminal.children.values().map(|child| child.ref_count).sum();
        let copies = (terminal.ref_count - passing).max(1);

        let chars: Vec<char> = key.chars().collect();
        delete_from(&mut self.root, &chars, copies);
        true
    }

    /// Check whether `word` is a dictionary entry
    ///
    /// The query is trimmed and upper-cased before the walk; proper prefixes of
    /// words are not members.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.node(word).is_some_and(TrieNode::is_word)
    }

    /// Check whether any inserted word starts with `prefix`
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node(prefix).is_some()
    }

    /// Node reached by walking the normalized `prefix` from the root
    #[must_use]
    pub fn node(&self, prefix: &str) -> Option<&TrieNode> {
        normalize(prefix)
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }
}

/// Membership check tolerating an absent trie
///
/// A dictionary that has not been loaded yet contains nothing.
///
/// # Examples
/// ```
/// use word_hunt::core::{Trie, is_word};
///
/// let trie = Trie::from_words(["HELLO"]);
/// assert!(is_word(Some(&trie), "hello"));
/// assert!(!is_word(None, "hello"));
/// ```
#[must_use]
pub fn is_word(trie: Option<&Trie>, word: &str) -> bool {
    trie.is_some_and(|t| t.contains(word))
}

fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}

fn remove_from(node: &mut TrieNode, mut rest: std::str::Chars<'_>) {
    node.ref_count -= 1;
    while let Some(c) = rest.next() {
        if let Some(child) = node.children.get_mut(&c) {
            remove_from(child, rest);
            return;
        }
    }
}

fn delete_from(node: &mut TrieNode, rest: &[char], copies: i32) {
    node.ref_count -= copies;
    let Some((&c, tail)) = rest.split_first() else {
        node.is_word = false;
        return;
    };

    if let Some(child) = node.children.get_mut(&c) {
        delete_from(child, tail, copies);
        if child.ref_count <= 0 {
            node.children.remove(&c);
        }
    }
}
