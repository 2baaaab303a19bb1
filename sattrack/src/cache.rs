//! Bounded memoization with least-recently-used eviction

use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::debug;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
}

/// Computes each value at most once per key and keeps up to `capacity` of them
///
/// The map lock is only held to find or create a slot. The value itself is
/// produced outside of it, so a computation may use the cache for other keys,
/// while concurrent callers asking for the same key wait on the slot and share
/// its result.
pub struct MemoCache<K, V> {
    capacity: usize,
    inner: Mutex<Inner<K, V>>,
}

struct Inner<K, V> {
    slots: HashMap<K, Slot<V>>,
    /// Keys by last use, oldest first
    recency: BTreeMap<u64, K>,
    clock: u64,
    stats: CacheStats,
}

struct Slot<V> {
    value: Arc<OnceLock<V>>,
    last_used: u64,
}

impl<K: Eq + Hash + Clone, V: Clone> MemoCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(Inner {
                slots: HashMap::new(),
                recency: BTreeMap::new(),
                clock: 0,
                stats: CacheStats::default(),
            }),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get_or_compute<F: FnOnce() -> V>(&self, key: K, compute: F) -> V {
        let value = {
            let mut guard = self.lock();
            let inner = &mut *guard;
            inner.clock += 1;
            let now = inner.clock;

            if let Some(slot) = inner.slots.get_mut(&key) {
                inner.recency.remove(&slot.last_used);
                inner.recency.insert(now, key);
                slot.last_used = now;
                inner.stats.hits += 1;
                slot.value.clone()
            } else {
                let value = Arc::new(OnceLock::new());
                inner.recency.insert(now, key.clone());
                inner.slots.insert(
                    key,
                    Slot {
                        value: value.clone(),
                        last_used: now,
                    },
                );
                inner.stats.misses += 1;
                self.evict(inner);
                value
            }
        };

        value.get_or_init(compute).clone()
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            entries: inner.slots.len(),
            ..inner.stats
        }
    }

    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.slots.clear();
        inner.recency.clear();
        inner.stats = CacheStats::default();
    }

    fn evict(&self, inner: &mut Inner<K, V>) {
        while inner.slots.len() > self.capacity {
            let Some((_, oldest)) = inner.recency.pop_first() else {
                break;
            };
            inner.slots.remove(&oldest);
            inner.stats.evictions += 1;
        }
        if inner.stats.evictions > 0 && inner.stats.evictions % self.capacity as u64 == 0 {
            debug!(
                evictions = inner.stats.evictions,
                capacity = self.capacity,
                "Cache turned over"
            );
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
