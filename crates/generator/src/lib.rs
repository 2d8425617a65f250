//! Synthetic dataset engine for the crypto dashboard
//!
//! Produces a linked leaderboard, market snapshot, OHLC history, and
//! sentiment feed from a single seeded RNG. Cross-file consistency is
//! checked before any dataset leaves this crate.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod market;
pub mod sentiment;
pub mod traders;
pub mod walk;

pub use catalog::{SymbolSpec, CATALOG};
pub use config::GeneratorConfig;
pub use dataset::{check_consistency, generate_dataset, generate_dataset_at};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("consistency check failed: {0}")]
    Consistency(String),
}

pub type GenResult<T> = Result<T, GeneratorError>;
