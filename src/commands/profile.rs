//! Score profiling command
//!
//! Samples unfiltered boards and measures their score distribution, which is
//! where the quality profile constants come from.

use crate::core::{Board, Trie, total_score};
use crate::generator::{LetterPool, QualityProfile, find_words};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a profiling run
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub size: usize,
    pub samples: usize,
    /// Base seed; sample `i` uses `seed + i`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl ProfileConfig {
    #[must_use]
    pub const fn new(size: usize, samples: usize) -> Self {
        Self {
            size,
            samples,
            seed: None,
            show_progress: true,
        }
    }
}

/// Score statistics over the sampled boards
#[derive(Debug, Clone)]
pub struct ProfileResult {
    pub size: usize,
    pub samples: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub median: u32,
    /// 5th percentile, a reasonable absolute floor
    pub p5: u32,
    pub duration: Duration,
    pub boards_per_second: f64,
}

impl ProfileResult {
    /// Profile constants suggested by this run
    #[must_use]
    pub fn suggested(&self) -> QualityProfile {
        QualityProfile::new(self.mean.round() as u32, self.std_dev.round() as u32, self.p5)
    }
}

/// Sample random boards and report their score distribution
///
/// # Errors
///
/// Returns an error if the grid size is zero.
///
/// # Panics
///
/// Will not panic - the progress template is a valid constant.
pub fn run_profile(dictionary: &Trie, config: &ProfileConfig) -> Result<ProfileResult, String> {
    if config.size == 0 {
        return Err("Grid size must be at least 1".to_string());
    }

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.samples as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("progress template is valid")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let pool = LetterPool::standard();
    let cells = config.size * config.size;
    let start = Instant::now();

    let mut scores: Vec<u32> = (0..config.samples)
        .into_par_iter()
        .map(|i| {
            let letters = match config.seed {
                Some(seed) => pool.draw(cells, &mut StdRng::seed_from_u64(seed.wrapping_add(i as u64))),
                None => pool.draw(cells, &mut rand::rng()),
            };
            let score = Board::new(letters)
                .map(|board| total_score(&find_words(&board, dictionary)))
                .unwrap_or(0);
            pb.inc(1);
            score
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    scores.sort_unstable();
    Ok(summarize(config, &scores, duration))
}

fn summarize(config: &ProfileConfig, sorted: &[u32], duration: Duration) -> ProfileResult {
    let samples = sorted.len();
    let (mean, std_dev) = mean_and_std(sorted);

    ProfileResult {
        size: config.size,
        samples,
        mean,
        std_dev,
        min: sorted.first().copied().unwrap_or(0),
        max: sorted.last().copied().unwrap_or(0),
        median: percentile(sorted, 50),
        p5: percentile(sorted, 5),
        duration,
        boards_per_second: samples as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Population mean and standard deviation
fn mean_and_std(values: &[u32]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }

    let n = values.len() as f64;
    let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|&v| (f64::from(v) - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, variance.sqrt())
}

/// Nearest-rank percentile of sorted values
fn percentile(sorted: &[u32], pct: usize) -> u32 {
    if sorted.is_empty() {
        return 0;
    }
    let rank = (pct * sorted.len()).div_ceil(100).max(1);
    sorted[rank.min(sorted.len()) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::trie_from_slice;

    fn quiet(size: usize, samples: usize) -> ProfileConfig {
        let mut config = ProfileConfig::new(size, samples);
        config.show_progress = false;
        config.seed = Some(7);
        config
    }

    #[test]
    fn profile_runs() {
        let trie = trie_from_slice(WORDS);
        let result = run_profile(&trie, &quiet(4, 50)).unwrap();

        assert_eq!(result.samples, 50);
        assert!(result.min <= result.median);
        assert!(result.median <= result.max);
        assert!(result.mean >= f64::from(result.min));
        assert!(result.mean <= f64::from(result.max));
        assert!(result.std_dev >= 0.0);
    }

    #[test]
    fn seeded_profiles_match() {
        let trie = trie_from_slice(WORDS);
        let a = run_profile(&trie, &quiet(5, 20)).unwrap();
        let b = run_profile(&trie, &quiet(5, 20)).unwrap();
        assert_eq!(a.min, b.min);
        assert_eq!(a.max, b.max);
        assert!((a.mean - b.mean).abs() < 1e-9);
    }

    #[test]
    fn empty_profile() {
        let trie = trie_from_slice(WORDS);
        let result = run_profile(&trie, &quiet(4, 0)).unwrap();
        assert_eq!(result.samples, 0);
        assert_eq!(result.max, 0);
        assert!(result.mean.abs() < f64::EPSILON);
    }

    #[test]
    fn zero_size_is_an_error() {
        let trie = Trie::new();
        assert!(run_profile(&trie, &quiet(0, 10)).is_err());
    }

    #[test]
    fn statistics_helpers() {
        let (mean, std) = mean_and_std(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert!((mean - 5.0).abs() < 1e-9);
        assert!((std - 2.0).abs() < 1e-9);

        let sorted: Vec<u32> = (1..=100).collect();
        assert_eq!(percentile(&sorted, 5), 5);
        assert_eq!(percentile(&sorted, 50), 50);
        assert_eq!(percentile(&[42], 5), 42);
    }

    #[test]
    fn suggested_profile_rounds() {
        let config = quiet(4, 3);
        let result = summarize(&config, &[100, 200, 300], Duration::from_secs(1));
        let suggested = result.suggested();
        assert_eq!(suggested.mean_score, 200);
        assert_eq!(suggested.std_score, 82);
        assert_eq!(suggested.min_score, 100);
    }
}
