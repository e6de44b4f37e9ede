//! Command implementations

pub mod generate;
pub mod play;
pub mod profile;
pub mod solve;

pub use generate::{DEFAULT_MAX_ATTEMPTS, GenerateConfig, GenerateResult, run_generate};
pub use play::run_play;
pub use profile::{ProfileConfig, ProfileResult, run_profile};
pub use solve::{SolveResult, SolvedWord, solve_board};
