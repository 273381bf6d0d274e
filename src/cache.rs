//! LRU memoization of compiled pattern sets.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::trace;

use crate::compile::{compile_patterns, CompiledPatternSet};
use crate::error::Result;
use crate::types::{MatchOptions, PatternInput};

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Cache key: the resolved pattern list plus the options it was compiled with
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    patterns: Vec<String>,
    options: MatchOptions,
}

/// Bounded cache of compiled pattern sets, shareable across threads.
///
/// `"a, b"` and `["a", "b"]` resolve to the same key. Compilation failures are
/// returned to the caller and never stored.
pub struct PatternCache {
    cache: Mutex<LruCache<CacheKey, Arc<CompiledPatternSet>>>,
}

impl PatternCache {
    /// Create a new cache. A capacity of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Return the compiled set for `patterns`, compiling it on a miss.
    pub fn get_or_compile(
        &self,
        patterns: impl Into<PatternInput>,
        options: &MatchOptions,
    ) -> Result<Arc<CompiledPatternSet>> {
        let patterns: PatternInput = patterns.into();
        let key = CacheKey {
            patterns: patterns.into_patterns(),
            options: *options,
        };

        let mut cache = self.cache.lock();

        if let Some(set) = cache.get(&key) {
            trace!(patterns = ?key.patterns, "pattern cache hit");
            return Ok(Arc::clone(set));
        }

        // Compiled while holding the lock so concurrent misses on the same
        // key compile once.
        trace!(patterns = ?key.patterns, "pattern cache miss");
        let set = Arc::new(compile_patterns(key.patterns.clone(), options)?);
        cache.put(key, Arc::clone(&set));

        Ok(set)
    }

    /// Cached equivalent of [`crate::url_match`]
    pub fn url_match(
        &self,
        patterns: impl Into<PatternInput>,
        url: &str,
        options: &MatchOptions,
    ) -> Result<bool> {
        Ok(self.get_or_compile(patterns, options)?.is_match(url))
    }

    /// Get the number of cached sets
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Clear the cache
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}
