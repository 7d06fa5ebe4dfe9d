use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

pub use error::{status_code, MoveError, Result, STATUS_INVALID_ARGUMENT, STATUS_OK};
pub use harness::{Harness, RandomConfig, ScenarioReport, SuiteReport};
pub use movers::{RuntimeOptimized, SpaceOptimized, ZeroMover};

pub mod check;
mod error;
pub mod harness;
pub mod logger;
pub mod movers;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct ZeroesOptions {
    /// Movers to exercise. Defaults to all of them, in declaration order.
    #[arg(short, long, value_enum)]
    pub strategy: Vec<Strategy>,

    /// Number of generated arrays to check per mover. Zero skips the random scenario.
    #[arg(short, long, default_value_t = 0)]
    pub random_trials: usize,

    /// Longest generated array.
    #[arg(long, default_value_t = 32)]
    pub max_len: usize,

    /// Seed for the generated arrays.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the suite report as JSON to this path.
    #[arg(short, long)]
    pub json: Option<std::path::PathBuf>,

    /// Exit with a non-zero status when a scenario fails.
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Log level used when RUST_LOG is unset.
    #[arg(short, long, default_value_t = log::Level::Warn)]
    pub log_level: log::Level,

    /// Include file and line in log records.
    #[arg(long, default_value_t = false)]
    pub line_numbers: bool,
}

impl Default for ZeroesOptions {
    fn default() -> Self {
        ZeroesOptions {
            strategy: vec![],
            random_trials: 0,
            max_len: 32,
            seed: None,
            json: None,
            strict: false,
            log_level: log::Level::Warn,
            line_numbers: false,
        }
    }
}

impl ZeroesOptions {
    pub fn selected_strategies(&self) -> Vec<Strategy> {
        if self.strategy.is_empty() {
            Strategy::value_variants().to_vec()
        } else {
            self.strategy.clone()
        }
    }

    pub fn random_config(&self) -> RandomConfig {
        RandomConfig {
            trials: self.random_trials,
            max_len: self.max_len,
            seed: self.seed,
        }
    }
}

/// Describes the movers available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[clap(rename_all = "kebab_case")]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    RuntimeOptimized,
    SpaceOptimized,
}

impl Strategy {
    pub fn mover(&self) -> Box<dyn ZeroMover> {
        match self {
            Strategy::RuntimeOptimized => Box::new(RuntimeOptimized),
            Strategy::SpaceOptimized => Box::new(SpaceOptimized),
        }
    }
}
