//! TTL-bounded memoization for data-source calls
//!
//! Wraps an in-memory LRU store with the two rules the dashboard relies on:
//! - A stored value younger than its TTL is returned as-is; anything older
//!   is recomputed by the caller-supplied producer and stored again.
//! - Concurrent callers of the same key share one producer run: the first
//!   caller computes while the rest wait on a per-key slot, then read the
//!   freshly stored value.
//!
//! Producer errors are returned to the caller and never stored, so a failed
//! fetch leaves the next attempt free to recompute.

use lru::LruCache;
use std::{
    collections::HashMap,
    future::Future,
    hash::Hash,
    num::NonZeroUsize,
    sync::{Arc, Mutex, Weak},
    time::{Duration, Instant},
};

use crate::Result;


struct Entry<V> {
    value: V,
    stored_at: Instant,
}

/// Time-boxed memoization cache keyed by the full argument tuple of the
/// wrapped call.
pub struct TtlCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    values: Mutex<LruCache<K, Entry<V>>>,
    /// One lock per key so only one producer runs at a time for that key.
    /// Held weak: a slot lives exactly as long as the callers holding it,
    /// and dead entries are pruned before a new slot is inserted.
    slots: Mutex<HashMap<K, Weak<tokio::sync::Mutex<()>>>>,
    capacity: usize,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a cache holding up to `capacity` values.
    pub fn new(capacity: usize) -> Self {
        let bounded = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            values: Mutex::new(LruCache::new(bounded)),
            slots: Mutex::new(HashMap::new()),
            capacity: bounded.get(),
        }
    }

    /// Return the value for `key`, invoking `producer` only when no stored
    /// value is younger than `ttl`.
    ///
    /// A zero `ttl` turns the cache into a pass-through.
    pub async fn get_or_compute<F, Fut>(&self, key: K, ttl: Duration, producer: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>>,
    {
        if let Some(value) = self.fresh_value(&key, ttl) {
            return Ok(value);
        }

        let slot = self.slot_for(&key);
        let _guard = slot.lock().await;

        // A caller that queued behind the producing one finds the value here.
        if let Some(value) = self.fresh_value(&key, ttl) {
            return Ok(value);
        }

        let value = producer().await?;
        self.store(key, value.clone());
        Ok(value)
    }

    /// Stored value for `key` if it is still inside the `ttl` window.
    fn fresh_value(&self, key: &K, ttl: Duration) -> Option<V> {
        let mut values = self.values.lock().unwrap();
        match values.get(key) {
            Some(entry) if entry.stored_at.elapsed() < ttl => Some(entry.value.clone()),
            _ => None,
        }
    }

    fn store(&self, key: K, value: V) {
        let mut values = self.values.lock().unwrap();
        values.put(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    fn slot_for(&self, key: &K) -> Arc<tokio::sync::Mutex<()>> {
        let mut slots = self.slots.lock().unwrap();
        if let Some(slot) = slots.get(key).and_then(Weak::upgrade) {
            return slot;
        }

        slots.retain(|_, slot| slot.strong_count() > 0);
        let slot = Arc::new(tokio::sync::Mutex::new(()));
        slots.insert(key.clone(), Arc::downgrade(&slot));
        slot
    }

    /// Get cache statistics: (entries stored, capacity).
    pub fn memory_stats(&self) -> (usize, usize) {
        let values = self.values.lock().unwrap();
        (values.len(), self.capacity)
    }
}
