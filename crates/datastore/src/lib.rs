//! Flat-file dataset store for the crypto dashboard
//!
//! Owns the persisted record types, validation at the load boundary,
//! atomic batch writes (write-temp-then-rename), and the TTL-cached
//! reader the dashboard side goes through.

pub mod cache;
pub mod sample;
pub mod store;
pub mod types;

pub use cache::{Cached, CachedDataset, DEFAULT_TTL};
pub use store::{Datastore, FILE_HISTORY, FILE_MARKET, FILE_SENTIMENT, FILE_TRADERS};
pub use types::*;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing file: {0}")]
    Missing(PathBuf),

    #[error("validation failed for {path}: {reason}")]
    Validation { path: PathBuf, reason: String },
}

pub type StoreResult<T> = Result<T, StoreError>;
