//! Word Hunt - CLI
//!
//! Generates quality-gated word hunt boards, solves given boards and lets you
//! play a round in the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::time::Instant;
use word_hunt::{
    commands::{
        DEFAULT_MAX_ATTEMPTS, GenerateConfig, ProfileConfig, run_generate, run_play, run_profile,
        solve_board,
    },
    core::Trie,
    generator::QualityConfig,
    output::{
        print_dictionary_loaded, print_generate_result, print_profile_result, print_solve_result,
    },
    wordlists::{
        WORDS,
        loader::{load_from_file, trie_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_hunt",
    about = "Word hunt board generator and solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: embedded English list)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,
}

/// Options shared by commands that generate boards
#[derive(clap::Args)]
struct BoardArgs {
    /// Grid size: 4 or 5
    #[arg(short, long, default_value = "4")]
    size: usize,

    /// Quality slider position (-10 = any board, 0 = average, 50 = best)
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    quality: i32,

    /// Quality as standard deviations above the mean (overrides --quality)
    #[arg(long, allow_negative_numbers = true)]
    factor: Option<f64>,

    /// Do not require the minimum score floor
    #[arg(long)]
    no_floor: bool,

    /// Give up after this many candidate boards
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u64,

    /// Keep drawing boards until one is accepted, however long it takes
    #[arg(long, conflicts_with = "max_attempts")]
    unbounded: bool,
}

impl BoardArgs {
    fn config(&self) -> GenerateConfig {
        let mut quality = match self.factor {
            Some(factor) => QualityConfig::new(factor),
            None => QualityConfig::from_slider(self.quality),
        };
        if self.no_floor {
            quality = quality.without_floor();
        }

        let mut config = GenerateConfig::new(self.size, quality);
        config.max_attempts = (!self.unbounded).then_some(self.max_attempts);
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a board (default)
    Generate {
        #[command(flatten)]
        board: BoardArgs,

        /// Parallel samplers
        #[arg(short = 'j', long, default_value = "1")]
        workers: usize,

        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,

        /// Hide the word list
        #[arg(long)]
        no_words: bool,
    },

    /// Find every word on a given board
    Solve {
        /// Letters row by row, e.g. "CATS/ATES/TEAS/SEAT"
        letters: String,

        /// Show the path tracing each word
        #[arg(short, long)]
        paths: bool,
    },

    /// Sample random boards and report their score distribution
    Profile {
        /// Grid size
        #[arg(short, long, default_value = "4")]
        size: usize,

        /// Number of boards to sample
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Base seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play a round in the terminal
    Play {
        #[command(flatten)]
        board: BoardArgs,
    },
}

/// Build the dictionary trie from the -d flag, or the embedded list
fn load_dictionary(path: Option<&str>) -> Result<Trie> {
    let start = Instant::now();
    let (trie, source) = match path {
        Some(path) => {
            let trie = load_from_file(path)
                .with_context(|| format!("Failed to read dictionary {path}"))?;
            (trie, path)
        }
        None => (trie_from_slice(WORDS), "embedded list"),
    };
    print_dictionary_loaded(source, trie.len(), start.elapsed());
    Ok(trie)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;

    // Default to generating a board if no command given
    let command = cli.command.unwrap_or(Commands::Generate {
        board: BoardArgs {
            size: 4,
            quality: 0,
            factor: None,
            no_floor: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            unbounded: false,
        },
        workers: 1,
        seed: None,
        no_words: false,
    });

    match command {
        Commands::Generate {
            board,
            workers,
            seed,
            no_words,
        } => {
            let mut config = board.config();
            config.workers = workers;
            config.seed = seed;
            let result = run_generate(&dictionary, &config)?;
            print_generate_result(&result, !no_words);
            Ok(())
        }
        Commands::Solve { letters, paths } => {
            let result = solve_board(&letters, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, paths);
            Ok(())
        }
        Commands::Profile { size, count, seed } => {
            let mut config = ProfileConfig::new(size, count);
            config.seed = seed;
            let result = run_profile(&dictionary, &config).map_err(|e| anyhow::anyhow!(e))?;
            print_profile_result(&result);
            Ok(())
        }
        Commands::Play { board } => {
            run_play(&dictionary, &board.config()).map_err(|e| anyhow::anyhow!(e))
        }
    }
}
