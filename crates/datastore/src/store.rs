//! Atomic flat-file store
//!
//! Writes go through a staged batch: every file is serialized to a
//! `.tmp` sibling first, and only once all four temps exist are they
//! renamed over the live files. The rename is the commit point, so a
//! concurrent reader (the dashboard process) never observes a torn
//! write. A failure during staging deletes the temps and leaves any
//! previously committed files untouched.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::sample;
use crate::types::{
    validate_history, validate_market, validate_sentiment, validate_traders, Dataset,
    HistoricalBar, MarketData, SentimentData, Trader,
};
use crate::{StoreError, StoreResult};

pub const FILE_TRADERS: &str = "top_traders_extended.json";
pub const FILE_MARKET: &str = "market_data_extended.json";
pub const FILE_HISTORY: &str = "historical_data.json";
pub const FILE_SENTIMENT: &str = "sentiment_data.json";

const TMP_SUFFIX: &str = ".tmp";

/// Handle on the dataset directory. The generator is the only writer;
/// readers only ever go through the loaders.
pub struct Datastore {
    dir: PathBuf,
}

impl Datastore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    // -----------------------------------------------------------------------
    // Writing
    // -----------------------------------------------------------------------

    /// Commit all four files as one batch. All-or-nothing: if any temp
    /// file fails to stage, nothing is renamed and the previous dataset
    /// stays live.
    pub fn write_dataset(&self, dataset: &Dataset) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let parts: [(&str, Vec<u8>); 4] = [
            (FILE_TRADERS, self.to_json(FILE_TRADERS, &dataset.traders)?),
            (FILE_MARKET, self.to_json(FILE_MARKET, &dataset.market)?),
            (FILE_HISTORY, self.to_json(FILE_HISTORY, &dataset.history)?),
            (FILE_SENTIMENT, self.to_json(FILE_SENTIMENT, &dataset.sentiment)?),
        ];

        // Stage phase: no live file is touched yet
        let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(parts.len());
        for (name, bytes) in &parts {
            let tmp = self.path(&format!("{name}{TMP_SUFFIX}"));
            if let Err(source) = fs::write(&tmp, bytes) {
                self.discard(&staged);
                let _ = fs::remove_file(&tmp);
                return Err(StoreError::Io { path: tmp, source });
            }
            staged.push((tmp, self.path(name)));
        }

        // Commit phase: renames only
        for (i, (tmp, live)) in staged.iter().enumerate() {
            if let Err(source) = fs::rename(tmp, live) {
                self.discard(&staged[i..]);
                return Err(StoreError::Io {
                    path: tmp.clone(),
                    source,
                });
            }
        }

        info!(
            dir = %self.dir.display(),
            traders = dataset.traders.len(),
            assets = dataset.market.cryptocurrencies.len(),
            bars = dataset.history.len(),
            signals = dataset.sentiment.signals.len(),
            "dataset committed"
        );
        Ok(())
    }

    fn to_json<T: Serialize>(&self, name: &str, value: &T) -> StoreResult<Vec<u8>> {
        serde_json::to_vec_pretty(value).map_err(|source| StoreError::Json {
            path: self.path(name),
            source,
        })
    }

    fn discard(&self, staged: &[(PathBuf, PathBuf)]) {
        for (tmp, _) in staged {
            let _ = fs::remove_file(tmp);
        }
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    pub fn load_traders(&self) -> StoreResult<Vec<Trader>> {
        let traders: Vec<Trader> = self.read_json(FILE_TRADERS)?;
        validate_traders(&traders).map_err(|reason| StoreError::Validation {
            path: self.path(FILE_TRADERS),
            reason,
        })?;
        Ok(traders)
    }

    pub fn load_market(&self) -> StoreResult<MarketData> {
        let market: MarketData = self.read_json(FILE_MARKET)?;
        validate_market(&market).map_err(|reason| StoreError::Validation {
            path: self.path(FILE_MARKET),
            reason,
        })?;
        Ok(market)
    }

    pub fn load_history(&self) -> StoreResult<Vec<HistoricalBar>> {
        let history: Vec<HistoricalBar> = self.read_json(FILE_HISTORY)?;
        validate_history(&history).map_err(|reason| StoreError::Validation {
            path: self.path(FILE_HISTORY),
            reason,
        })?;
        Ok(history)
    }

    pub fn load_sentiment(&self) -> StoreResult<SentimentData> {
        let sentiment: SentimentData = self.read_json(FILE_SENTIMENT)?;
        validate_sentiment(&sentiment).map_err(|reason| StoreError::Validation {
            path: self.path(FILE_SENTIMENT),
            reason,
        })?;
        Ok(sentiment)
    }

    pub fn load_dataset(&self) -> StoreResult<Dataset> {
        Ok(Dataset {
            traders: self.load_traders()?,
            market: self.load_market()?,
            history: self.load_history()?,
            sentiment: self.load_sentiment()?,
        })
    }

    /// Reader-side contract: missing or malformed files fall back to
    /// the bundled minimal sample instead of failing the dashboard.
    pub fn load_dataset_or_sample(&self) -> Dataset {
        match self.load_dataset() {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!(error = %e, "dataset unavailable, using bundled sample");
                sample::minimal_dataset()
            }
        }
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> StoreResult<T> {
        let path = self.path(name);
        if !path.exists() {
            return Err(StoreError::Missing(path));
        }
        let bytes = fs::read(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Json { path, source })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
