//! Board generation command
//!
//! Generates one board meeting the requested quality and times the search.

use crate::core::Trie;
use crate::generator::{BoardGenerator, GenerateError, GeneratedBoard, QualityConfig, QualityProfile};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Attempts allowed before giving up, unless the caller asks for no bound
pub const DEFAULT_MAX_ATTEMPTS: u64 = 200_000;

/// Configuration for generating a board
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub size: usize,
    pub quality: QualityConfig,
    pub max_attempts: Option<u64>,
    /// Parallel samplers; ignored when a seed is given
    pub workers: usize,
    /// Seed for a reproducible board
    pub seed: Option<u64>,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(size: usize, quality: QualityConfig) -> Self {
        Self {
            size,
            quality,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            workers: 1,
            seed: None,
        }
    }
}

/// Result of generating a board
pub struct GenerateResult {
    pub generated: GeneratedBoard,
    pub quality: QualityConfig,
    pub profile: QualityProfile,
    pub duration: Duration,
}

impl GenerateResult {
    /// Score the board had to reach
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.profile.threshold(self.quality.factor)
    }
}

/// Generate a board from the dictionary
///
/// # Errors
///
/// Returns an error if:
/// - The grid size is not 4 or 5
/// - The attempt budget runs out before a board meets the quality bar
pub fn run_generate(dictionary: &Trie, config: &GenerateConfig) -> Result<GenerateResult, GenerateError> {
    let profile = QualityProfile::for_size(config.size)
        .ok_or(GenerateError::UnsupportedSize(config.size))?;
    let generator = BoardGenerator::new(dictionary, config.size, config.quality)
        .with_max_attempts(config.max_attempts);

    let start = Instant::now();
    let generated = match config.seed {
        Some(seed) => generator.generate_with_rng(&mut StdRng::seed_from_u64(seed))?,
        None if config.workers > 1 => generator.generate_parallel(config.workers)?,
        None => generator.generate()?,
    };

    Ok(GenerateResult {
        generated,
        quality: config.quality,
        profile,
        duration: start.elapsed(),
    })
}
