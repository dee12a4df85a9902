//! Result caching keyed by argument values
//!
//! The cache key is the compact JSON encoding of the argument value, so two
//! calls hit the same entry exactly when their arguments serialize to the
//! same text. Pass several arguments as a tuple.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use serde::Serialize;
#[cfg(feature = "observability")]
use tracing::trace;

use crate::error::{CommonError, CommonResult};

enum MemoCache<R> {
    Unbounded(HashMap<String, R>),
    Bounded(LruCache<String, R>),
}

impl<R: Clone> MemoCache<R> {
    fn get(&mut self, key: &str) -> Option<R> {
        match self {
            Self::Unbounded(map) => map.get(key).cloned(),
            Self::Bounded(lru) => lru.get(key).cloned(),
        }
    }

    fn insert(&mut self, key: String, value: R) {
        match self {
            Self::Unbounded(map) => {
                map.insert(key, value);
            }
            Self::Bounded(lru) => {
                lru.put(key, value);
            }
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Unbounded(map) => map.len(),
            Self::Bounded(lru) => lru.len(),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Unbounded(map) => map.clear(),
            Self::Bounded(lru) => lru.clear(),
        }
    }
}

/// A function wrapped with a result cache
///
/// Created by [`memoize`] or [`memoize_bounded`]. The cache lock is not
/// held while the wrapped function runs, so concurrent misses on the same
/// key may both compute; the later result overwrites the earlier one.
pub struct Memoized<F, A, R> {
    func: F,
    cache: Mutex<MemoCache<R>>,
    _args: PhantomData<fn(A)>,
}

impl<F, A, R> Memoized<F, A, R>
where
    F: Fn(A) -> R,
    A: Serialize,
    R: Clone,
{
    /// Return the cached result for `args`, computing it on first use
    ///
    /// # Errors
    ///
    /// Returns `CommonError::Serialization` when `args` cannot be encoded as
    /// a cache key. The wrapped function is not called in that case.
    pub fn call(&self, args: A) -> CommonResult<R> {
        let key = serde_json::to_string(&args)?;

        if let Some(hit) = self.cache.lock().get(&key) {
            #[cfg(feature = "observability")]
            trace!(key = %key, "memoize cache hit");
            return Ok(hit);
        }

        #[cfg(feature = "observability")]
        trace!(key = %key, "memoize cache miss");
        let result = (self.func)(args);
        self.cache.lock().insert(key, result.clone());
        Ok(result)
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached result
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl<F, A, R> fmt::Debug for Memoized<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, len) = match &*self.cache.lock() {
            MemoCache::Unbounded(map) => ("unbounded", map.len()),
            MemoCache::Bounded(lru) => ("bounded", lru.len()),
        };
        f.debug_struct("Memoized").field("cache", &kind).field("len", &len).finish()
    }
}

/// Cache every result of `func` for the lifetime of the wrapper
///
/// ```
/// use awesome_common::helpers::memoize;
///
/// let square = memoize(|n: u64| n * n);
/// assert_eq!(square.call(4).unwrap(), 16);
/// assert_eq!(square.call(4).unwrap(), 16);
/// assert_eq!(square.len(), 1);
/// ```
pub fn memoize<F, A, R>(func: F) -> Memoized<F, A, R>
where
    F: Fn(A) -> R,
    A: Serialize,
    R: Clone,
{
    Memoized { func, cache: Mutex::new(MemoCache::Unbounded(HashMap::new())), _args: PhantomData }
}

/// Cache at most `capacity` results, evicting the least recently used
///
/// # Errors
///
/// Returns `CommonError::InvalidInput` when `capacity` is zero.
pub fn memoize_bounded<F, A, R>(func: F, capacity: usize) -> CommonResult<Memoized<F, A, R>>
where
    F: Fn(A) -> R,
    A: Serialize,
    R: Clone,
{
    let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
        CommonError::invalid_input("capacity", "memoize capacity must be greater than zero")
    })?;
    Ok(Memoized {
        func,
        cache: Mutex::new(MemoCache::Bounded(LruCache::new(capacity))),
        _args: PhantomData,
    })
}

#[cfg(test)]
mod tests {
    //! Unit tests for helpers::memoize.
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    /// Validates `memoize` calls the function once per distinct argument.
    ///
    /// Assertions:
    /// - Confirms repeated arguments are served from the cache.
    /// - Confirms tuple arguments key on every element.
    #[test]
    fn test_memoize_caches_by_args() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let add = memoize(move |(a, b): (i32, i32)| {
            counter.fetch_add(1, Ordering::SeqCst);
            a + b
        });

        assert_eq!(add.call((1, 2)).unwrap(), 3);
        assert_eq!(add.call((1, 2)).unwrap(), 3);
        assert_eq!(add.call((2, 1)).unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(add.len(), 2);

        add.clear();
        assert!(add.is_empty());
        assert_eq!(add.call((1, 2)).unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    /// Validates `memoize_bounded` eviction order.
    ///
    /// Assertions:
    /// - Confirms the least recently used entry is recomputed.
    /// - Ensures zero capacity is rejected.
    #[test]
    fn test_memoize_bounded_evicts_lru() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let double = memoize_bounded(
            move |n: u32| {
                counter.fetch_add(1, Ordering::SeqCst);
                n * 2
            },
            2,
        )
        .unwrap();

        double.call(1).unwrap();
        double.call(2).unwrap();
        double.call(1).unwrap();
        double.call(3).unwrap();
        assert_eq!(double.len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        double.call(2).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        double.call(3).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 4);

        let err = memoize_bounded(|n: u32| n, 0).unwrap_err();
        assert!(err.is_invalid_input());
    }

    /// Validates key failures surface as serialization errors.
    ///
    /// Assertions:
    /// - Ensures a map with non-string keys cannot be memoized.
    #[test]
    fn test_memoize_unserializable_args() {
        let size = memoize(|m: BTreeMap<(u8, u8), u8>| m.len());
        let mut args = BTreeMap::new();
        args.insert((1, 2), 3);
        let err = size.call(args).unwrap_err();
        assert!(!err.is_invalid_input());
        assert!(size.is_empty());
    }
}
