//! Board generation and word search
//!
//! Letter sampling, trie-pruned word discovery and the rejection-sampling
//! loop that ties them together.

mod engine;
mod finder;
pub mod pool;
pub mod quality;

pub use engine::{BoardGenerator, GenerateError, GeneratedBoard};
pub use finder::{find_word_paths, find_words};
pub use pool::{LETTER_COUNTS, LetterPool, PoolError};
pub use quality::{QualityConfig, QualityProfile, QualityTier};
