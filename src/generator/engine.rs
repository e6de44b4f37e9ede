//! Rejection-sampling board generator

use super::finder::find_words;
use super::pool::LetterPool;
use super::quality::{QualityConfig, QualityProfile};
use crate::core::{Board, Trie, sort_words, total_score};
use rand::Rng;
use rayon::prelude::*;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// An accepted board with its words, sorted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    pub board: Board,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    pub score: u32,
    /// Candidates drawn before (and including) the accepted one
    pub attempts: u64,
}

impl GeneratedBoard {
    /// Board letters, row-major
    #[must_use]
    pub fn letters(&self) -> &[char] {
        self.board.cells()
    }
}

/// Error type for board generation
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    /// Only 4×4 and 5×5 boards have quality profiles
    UnsupportedSize(usize),
    /// The attempt budget ran out before any board met the threshold
    QualityUnreachable { attempts: u64, threshold: f64 },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize(size) => {
                write!(f, "Grid size must be 4 or 5, got {size}")
            }
            Self::QualityUnreachable {
                attempts,
                threshold,
            } => write!(
                f,
                "Quality threshold of {threshold:.0} points unreachable for this grid size \
                 after {attempts} attempts"
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Draws random boards until one scores well enough
///
/// The dictionary is borrowed, never owned, so one trie can back any number of
/// generators.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_hunt::core::Trie;
/// use word_hunt::generator::{BoardGenerator, QualityConfig};
///
/// let trie = Trie::from_words(["TEA", "EAT", "ATE", "SEAT"]);
/// let quality = QualityConfig::new(0.0).without_floor().with_bypass(Some(0.0));
/// let generator = BoardGenerator::new(&trie, 4, quality);
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let generated = generator.generate_with_rng(&mut rng).unwrap();
/// assert_eq!(generated.letters().len(), 16);
/// ```
pub struct BoardGenerator<'a> {
    dictionary: &'a Trie,
    size: usize,
    quality: QualityConfig,
    max_attempts: Option<u64>,
    pool: LetterPool,
}

impl<'a> BoardGenerator<'a> {
    /// Create a generator for `size × size` boards
    ///
    /// Without an attempt bound the generator keeps drawing until a board is
    /// accepted, which never happens for unreachable thresholds.
    #[must_use]
    pub fn new(dictionary: &'a Trie, size: usize, quality: QualityConfig) -> Self {
        Self {
            dictionary,
            size,
            quality,
            max_attempts: None,
            pool: LetterPool::standard(),
        }
    }

    /// Give up after `max_attempts` rejected candidates
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Draw letters from a custom pool instead of the standard frequencies
    #[must_use]
    pub fn with_pool(mut self, pool: LetterPool) -> Self {
        self.pool = pool;
        self
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn quality(&self) -> &QualityConfig {
        &self.quality
    }

    /// Generate a board using the thread-local RNG
    ///
    /// # Errors
    /// See [`BoardGenerator::generate_with_rng`].
    pub fn generate(&self) -> Result<GeneratedBoard, GenerateError> {
        self.generate_with_rng(&mut rand::rng())
    }

    /// Generate a board using a specific RNG (for testing/seeding)
    ///
    /// # Errors
    /// Returns `UnsupportedSize` for sizes other than 4 and 5, and
    /// `QualityUnreachable` when an attempt bound is set and exhausted.
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> Result<GeneratedBoard, GenerateError> {
        let profile = self.profile()?;

        let mut pool = self.pool.clone();
        pool.shuffle(rng);

        let mut attempts = 0;
        loop {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(self.unreachable(&profile, attempts));
            }
            attempts += 1;

            let candidate = self.draw_board(&pool, rng);
            if let Some(generated) = self.evaluate(candidate, &profile, attempts) {
                return Ok(generated);
            }
        }
    }

    /// Generate a board with `workers` parallel samplers
    ///
    /// Each worker has its own RNG and candidate; only the dictionary is
    /// shared. The first accepted board wins and the other workers stop. The
    /// attempt bound, if any, is shared by all workers.
    ///
    /// # Errors
    /// Same as [`BoardGenerator::generate_with_rng`].
    pub fn generate_parallel(&self, workers: usize) -> Result<GeneratedBoard, GenerateError> {
        let profile = self.profile()?;

        let done = AtomicBool::new(false);
        let attempts = AtomicU64::new(0);

        let winner = (0..workers.max(1)).into_par_iter().find_map_any(|_| {
            let mut rng = rand::rng();
            let mut pool = self.pool.clone();
            pool.shuffle(&mut rng);

            while !done.load(Ordering::Relaxed) {
                let attempt = attempts.fetch_add(1, Ordering::Relaxed) + 1;
                if self.max_attempts.is_some_and(|max| attempt > max) {
                    break;
                }

                let candidate = self.draw_board(&pool, &mut rng);
                if let Some(generated) = self.evaluate(candidate, &profile, attempt) {
                    done.store(true, Ordering::Relaxed);
                    return Some(generated);
                }
            }
            None
        });

        winner.ok_or_else(|| {
            let drawn = attempts.load(Ordering::Relaxed);
            let attempts = self.max_attempts.map_or(drawn, |max| drawn.min(max));
            self.unreachable(&profile, attempts)
        })
    }

    fn profile(&self) -> Result<QualityProfile, GenerateError> {
        QualityProfile::for_size(self.size).ok_or(GenerateError::UnsupportedSize(self.size))
    }

    fn draw_board<R: Rng>(&self, pool: &LetterPool, rng: &mut R) -> Board {
        let cells = pool.draw(self.size * self.size, rng);
        Board::new(cells).expect("size * size cells form a square board")
    }

    fn evaluate(
        &self,
        board: Board,
        profile: &QualityProfile,
        attempts: u64,
    ) -> Option<GeneratedBoard> {
        let found = find_words(&board, self.dictionary);
        let score = total_score(&found);
        if !self.quality.accepts(profile, score) {
            return None;
        }

        let mut words: Vec<String> = found.into_iter().collect();
        sort_words(&mut words);
        Some(GeneratedBoard {
            board,
            words,
            score,
            attempts,
        })
    }

    fn unreachable(&self, profile: &QualityProfile, attempts: u64) -> GenerateError {
        GenerateError::QualityUnreachable {
            attempts,
            threshold: profile.threshold(self.quality.factor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score_of;
    use crate::wordlists::{WORDS, loader::trie_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn accept_all() -> QualityConfig {
        QualityConfig::new(0.0).without_floor().with_bypass(Some(0.0))
    }

    #[test]
    fn generates_board_of_requested_size() {
        let trie = trie_from_slice(WORDS);
        for size in [4, 5] {
            let generator = BoardGenerator::new(&trie, size, accept_all());
            let mut rng = StdRng::seed_from_u64(5);
            let generated = generator.generate_with_rng(&mut rng).unwrap();

            assert_eq!(generated.board.size(), size);
            assert_eq!(generated.letters().len(), size * size);
            assert_eq!(generated.attempts, 1);
            assert!(generated.letters().iter().all(char::is_ascii_uppercase));
        }
    }

    #[test]
    fn result_is_sorted_and_scored() {
        let trie = trie_from_slice(WORDS);
        let generator = BoardGenerator::new(&trie, 5, accept_all());
        let mut rng = StdRng::seed_from_u64(11);
        let generated = generator.generate_with_rng(&mut rng).unwrap();

        let expected: u32 = generated.words.iter().map(|w| score_of(w)).sum();
        assert_eq!(generated.score, expected);
        for pair in generated.words.windows(2) {
            assert!(pair[0].len() >= pair[1].len());
            if pair[0].len() == pair[1].len() {
                assert!(pair[0] < pair[1]);
            }
        }
        for word in &generated.words {
            assert!(trie.contains(word));
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let trie = trie_from_slice(WORDS);
        let generator = BoardGenerator::new(&trie, 4, accept_all());

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(
            generator.generate_with_rng(&mut rng1),
            generator.generate_with_rng(&mut rng2)
        );
    }

    /// All-'A' boards with every run of A's in the dictionary score exactly
    /// the sum of `POINT_VALUES[3..=16]` on a 4×4 grid.
    fn all_a() -> (Trie, LetterPool) {
        let words: Vec<String> = (3..=16).map(|n| "A".repeat(n)).collect();
        let pool = LetterPool::from_counts(&[('A', 1)]).unwrap();
        (Trie::from_words(&words), pool)
    }

    #[test]
    fn accepts_board_meeting_the_threshold() {
        let (trie, pool) = all_a();
        // 73_000 - 0.7 × 50_000 = 38_000
        let generator = BoardGenerator::new(&trie, 4, QualityConfig::new(-0.7)).with_pool(pool);
        let mut rng = StdRng::seed_from_u64(0);
        let generated = generator.generate_with_rng(&mut rng).unwrap();

        assert_eq!(generated.score, 38_700);
        assert_eq!(generated.words.len(), 14);
        assert_eq!(generated.words[0], "A".repeat(16));
        assert!(f64::from(generated.score) >= QualityProfile::FOUR.threshold(-0.7));
        assert!(generated.score >= QualityProfile::FOUR.min_score);
    }

    #[test]
    fn rejects_board_below_the_threshold() {
        let (trie, pool) = all_a();
        // 73_000 - 0.6 × 50_000 = 43_000
        let generator = BoardGenerator::new(&trie, 4, QualityConfig::new(-0.6))
            .with_pool(pool)
            .with_max_attempts(Some(5));
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            generator.generate_with_rng(&mut rng),
            Err(GenerateError::QualityUnreachable { attempts: 5, .. })
        ));
    }

    #[test]
    fn unreachable_quality_is_reported() {
        let trie = trie_from_slice(WORDS);
        let generator = BoardGenerator::new(&trie, 4, QualityConfig::new(1000.0))
            .with_max_attempts(Some(25));
        let mut rng = StdRng::seed_from_u64(3);

        match generator.generate_with_rng(&mut rng) {
            Err(GenerateError::QualityUnreachable {
                attempts,
                threshold,
            }) => {
                assert_eq!(attempts, 25);
                assert!(threshold > 50_000_000.0);
            }
            other => panic!("Expected QualityUnreachable, got {other:?}"),
        }
    }

    #[test]
    fn zero_attempt_budget_fails_immediately() {
        let trie = Trie::new();
        let generator =
            BoardGenerator::new(&trie, 4, accept_all()).with_max_attempts(Some(0));
        assert!(matches!(
            generator.generate(),
            Err(GenerateError::QualityUnreachable { attempts: 0, .. })
        ));
    }

    #[test]
    fn unsupported_size_is_rejected() {
        let trie = Trie::new();
        for size in [0, 3, 6] {
            let generator = BoardGenerator::new(&trie, size, accept_all());
            assert_eq!(
                generator.generate(),
                Err(GenerateError::UnsupportedSize(size))
            );
        }
    }

    #[test]
    fn parallel_generation_returns_a_board() {
        let trie = trie_from_slice(WORDS);
        let generator = BoardGenerator::new(&trie, 5, accept_all());
        let generated = generator.generate_parallel(4).unwrap();
        assert_eq!(generated.letters().len(), 25);
        assert_eq!(generated.score, total_score(&generated.words));
    }

    #[test]
    fn parallel_generation_respects_budget() {
        let trie = trie_from_slice(WORDS);
        let generator = BoardGenerator::new(&trie, 4, QualityConfig::new(1000.0))
            .with_max_attempts(Some(40));

        match generator.generate_parallel(4) {
            Err(GenerateError::QualityUnreachable { attempts, .. }) => assert_eq!(attempts, 40),
            other => panic!("Expected QualityUnreachable, got {other:?}"),
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            GenerateError::UnsupportedSize(7).to_string(),
            "Grid size must be 4 or 5, got 7"
        );
        let msg = GenerateError::QualityUnreachable {
            attempts: 10,
            threshold: 123_000.0,
        }
        .to_string();
        assert!(msg.contains("123000"));
        assert!(msg.contains("10 attempts"));
    }
}
