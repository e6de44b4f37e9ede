//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_dictionary_loaded, print_generate_result, print_profile_result, print_solve_result,
};
