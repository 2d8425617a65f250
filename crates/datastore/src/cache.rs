//! TTL memoization for dataset reads
//!
//! An explicit value-plus-timestamp slot passed by reference, not a
//! module-level global: callers own the cache and inject `now`, which
//! keeps expiry testable.

use std::time::{Duration, Instant};

use crate::store::Datastore;
use crate::types::Dataset;

/// Default freshness window for dashboard reads.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// A cached value and the instant it was fetched.
#[derive(Debug, Clone)]
pub struct Cached<T> {
    pub value: T,
    pub fetched_at: Instant,
}

impl<T> Cached<T> {
    pub fn new(value: T, fetched_at: Instant) -> Self {
        Self { value, fetched_at }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.fetched_at) >= ttl
    }
}

/// Dashboard-side accessor: reloads through the store once the cached
/// copy ages out, falling back to the bundled sample when the files are
/// missing or malformed.
pub struct CachedDataset {
    store: Datastore,
    ttl: Duration,
    slot: Option<Cached<Dataset>>,
}

impl CachedDataset {
    pub fn new(store: Datastore, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            slot: None,
        }
    }

    /// Return the cached dataset, reloading it when empty or expired.
    pub fn get(&mut self, now: Instant) -> &Dataset {
        let fresh = self
            .slot
            .as_ref()
            .is_some_and(|c| !c.is_expired(now, self.ttl));
        if !fresh {
            let value = self.store.load_dataset_or_sample();
            return &self.slot.insert(Cached::new(value, now)).value;
        }
        &self.slot.as_ref().expect("slot checked above").value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use tempfile::tempdir;

    #[test]
    fn expiry_respects_ttl() {
        let t0 = Instant::now();
        let cached = Cached::new(42u32, t0);
        let ttl = Duration::from_secs(10);
        assert!(!cached.is_expired(t0, ttl));
        assert!(!cached.is_expired(t0 + Duration::from_secs(9), ttl));
        assert!(cached.is_expired(t0 + Duration::from_secs(10), ttl));
        assert!(cached.is_expired(t0 + Duration::from_secs(60), ttl));
    }

    #[test]
    fn cached_dataset_serves_stale_copy_until_ttl() {
        let dir = tempdir().unwrap();
        let store = Datastore::new(dir.path());
        let dataset = sample::minimal_dataset();
        store.write_dataset(&dataset).unwrap();

        let ttl = Duration::from_secs(10);
        let mut cache = CachedDataset::new(Datastore::new(dir.path()), ttl);

        let t0 = Instant::now();
        let traders_before = cache.get(t0).traders.len();
        assert_eq!(traders_before, dataset.traders.len());

        // Replace the files with a smaller dataset; within the TTL the
        // cache keeps serving the old copy.
        let mut changed = dataset.clone();
        changed.traders.clear();
        store.write_dataset(&changed).unwrap();
        assert_eq!(cache.get(t0 + Duration::from_secs(5)).traders.len(), traders_before);

        // Past the TTL the reload picks up the new files.
        assert_eq!(cache.get(t0 + ttl).traders.len(), 0);
    }

    #[test]
    fn reload_falls_back_to_sample_when_files_vanish() {
        let dir = tempdir().unwrap();
        let mut cache = CachedDataset::new(Datastore::new(dir.path()), Duration::from_secs(10));
        // Nothing on disk at all: first read already serves the sample
        let dataset = cache.get(Instant::now());
        assert_eq!(dataset, &sample::minimal_dataset());
    }
}
