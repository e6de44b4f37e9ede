//! Word scoring and result ordering

use std::cmp::Ordering;

/// Points awarded for a word, indexed by its length
///
/// Lengths 0-2 score nothing. Index 25 covers the longest simple path on a
/// 5×5 board.
pub const POINT_VALUES: [u32; 26] = [
    0, 0, 0, 100, 400, 800, 1400, 1800, 2200, 2600, 3000, 3400, 3800, 4200, 4600, 5000, 5400,
    5800, 6200, 6600, 7000, 7400, 7800, 8200, 8600, 9000,
];

/// Point value of a single word
///
/// # Examples
/// ```
/// use word_hunt::core::score_of;
///
/// assert_eq!(score_of("AT"), 0);
/// assert_eq!(score_of("CAT"), 100);
/// assert_eq!(score_of("CATS"), 400);
/// ```
#[must_use]
pub fn score_of(word: &str) -> u32 {
    POINT_VALUES
        .get(word.chars().count())
        .copied()
        .unwrap_or(0)
}

/// Total points of a word collection
///
/// Order does not matter.
pub fn total_score<I, S>(words: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(|w| score_of(w.as_ref())).sum()
}

/// Display ordering: longer words first, then alphabetical
#[must_use]
pub fn compare_words(a: &str, b: &str) -> Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

/// Sort words for display
///
/// # Examples
/// ```
/// use word_hunt::core::sort_words;
///
/// let mut words = vec!["AT".to_string(), "CAT".to_string(), "ACT".to_string(), "CATS".to_string()];
/// sort_words(&mut words);
/// assert_eq!(words, ["CATS", "ACT", "CAT", "AT"]);
/// ```
pub fn sort_words<S: AsRef<str>>(words: &mut [S]) {
    words.sort_by(|a, b| compare_words(a.as_ref(), b.as_ref()));
}
