//! Frequency-weighted letter pool
//!
//! Letters are drawn from a multiset in which each letter appears as many
//! times as its observed frequency.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Letter counts observed over 200 sampled word hunt boards
pub const LETTER_COUNTS: [(char, u32); 26] = [
    ('E', 649),
    ('A', 516),
    ('T', 515),
    ('O', 481),
    ('I', 462),
    ('S', 440),
    ('N', 431),
    ('R', 383),
    ('H', 379),
    ('D', 291),
    ('L', 266),
    ('U', 196),
    ('C', 194),
    ('F', 170),
    ('W', 169),
    ('M', 159),
    ('P', 140),
    ('Y', 137),
    ('G', 133),
    ('B', 121),
    ('V', 77),
    ('K', 54),
    ('X', 12),
    ('J', 10),
    ('Q', 8),
    ('Z', 7),
];

/// Error type for letter pools
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    Empty,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Letter pool has no letters to draw from"),
        }
    }
}

impl std::error::Error for PoolError {}

/// A multiset of letters to sample board cells from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Build a pool containing each letter `count` times
    ///
    /// # Errors
    /// Returns `PoolError::Empty` if the counts sum to zero.
    ///
    /// # Examples
    /// ```
    /// use word_hunt::generator::LetterPool;
    ///
    /// let pool = LetterPool::from_counts(&[('A', 2), ('B', 1)]).unwrap();
    /// assert_eq!(pool.letters(), &['A', 'A', 'B']);
    /// ```
    pub fn from_counts(counts: &[(char, u32)]) -> Result<Self, PoolError> {
        let letters: Vec<char> = counts
            .iter()
            .flat_map(|&(letter, count)| std::iter::repeat_n(letter, count as usize))
            .collect();

        if letters.is_empty() {
            return Err(PoolError::Empty);
        }

        Ok(Self { letters })
    }

    /// Pool built from [`LETTER_COUNTS`]
    #[must_use]
    pub fn standard() -> Self {
        let letters = LETTER_COUNTS
            .iter()
            .flat_map(|&(letter, count)| std::iter::repeat_n(letter, count as usize))
            .collect();
        Self { letters }
    }

    /// Shuffle the pool in place
    ///
    /// Sampling is uniform over positions, so this does not change the
    /// distribution of drawn letters.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.letters.shuffle(rng);
    }

    /// Draw one letter uniformly at random, with replacement
    #[inline]
    pub fn sample<R: Rng>(&self, rng: &mut R) -> char {
        self.letters[rng.random_range(0..self.letters.len())]
    }

    /// Draw `count` letters independently
    pub fn draw<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<char> {
        (0..count).map(|_| self.sample(rng)).collect()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Total number of letters, the sum of all counts
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for LetterPool {
    fn default() -> Self {
        Self::standard()
    }
}
