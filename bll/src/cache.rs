//! Resting place for [GamesCache]


use model::game::Game;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};
use dashmap::{DashMap, mapref::entry::Entry};
use log::debug;


/// Keeps the games built for each log source, so repeated queries don't re-read & re-parse the same log.\
/// Failed computations are never cached. Entries older than `ttl` (if any) are recomputed.
pub struct GamesCache {
    ttl: Option<Duration>,
    entries: DashMap<String, CacheEntry>,
}

struct CacheEntry {
    games: Arc<Vec<Game>>,
    created: Instant,
}

impl GamesCache {

    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            entries: DashMap::new(),
        }
    }

    /// Returns the cached games for `key` or computes them with `compute`, caching the outcome if it succeeds.\
    /// The shard holding `key` stays locked during `compute`, so concurrent requests for the same log parse it only once.
    /// `compute` must not use this cache.
    pub fn get_or_try_insert_with<E>(&self, key: &str, compute: impl FnOnce() -> Result<Vec<Game>, E>) -> Result<Arc<Vec<Game>>, E> {
        match self.entries.entry(key.to_owned()) {
            Entry::Occupied(mut occupied) => {
                if self.is_fresh(occupied.get()) {
                    debug!("Games cache hit for '{key}'");
                    return Ok(Arc::clone(&occupied.get().games))
                }
                debug!("Games cache entry for '{key}' expired");
                match compute() {
                    Ok(games) => {
                        let games = Arc::new(games);
                        occupied.insert(CacheEntry::new(Arc::clone(&games)));
                        Ok(games)
                    },
                    Err(err) => {
                        occupied.remove();
                        Err(err)
                    },
                }
            },
            Entry::Vacant(vacant) => {
                let games = Arc::new(compute()?);
                vacant.insert(CacheEntry::new(Arc::clone(&games)));
                Ok(games)
            },
        }
    }

    /// Forgets the games for `key`, returning whether there was anything to forget
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.clear()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        self.ttl
            .map_or(true, |ttl| entry.created.elapsed() < ttl)
    }

}

impl CacheEntry {
    fn new(games: Arc<Vec<Game>>) -> Self {
        Self { games, created: Instant::now() }
    }
}


/// Unit tests for the [cache](super) module
#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, sync::Barrier, thread};
    use std::sync::atomic::{AtomicU32, Ordering::Relaxed};


    #[test]
    fn hits_and_misses() {
        let cache = GamesCache::new(None);
        let computations = Cell::new(0);
        let compute = || -> Result<Vec<Game>, String> {
            computations.set(computations.get() + 1);
            Ok(vec![Game::new(), Game::new()])
        };
        let first = cache.get_or_try_insert_with("qgames.log", compute).expect("Computation shouldn't fail");
        let second = cache.get_or_try_insert_with("qgames.log", compute).expect("Computation shouldn't fail");
        assert_eq!(computations.get(), 1, "The second request should have been a cache hit");
        assert!(Arc::ptr_eq(&first, &second), "Cache hits should share the same games");
        assert_eq!(second.len(), 2);

        cache.get_or_try_insert_with("other.log", compute).expect("Computation shouldn't fail");
        assert_eq!(computations.get(), 2, "Different keys have different entries");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn invalidation() {
        let cache = GamesCache::new(None);
        let computations = Cell::new(0);
        let compute = || -> Result<Vec<Game>, String> {
            computations.set(computations.get() + 1);
            Ok(vec![])
        };
        cache.get_or_try_insert_with("qgames.log", compute).expect("Computation shouldn't fail");
        assert!(cache.invalidate("qgames.log"), "An existing entry should have been invalidated");
        assert!(!cache.invalidate("qgames.log"), "Nothing should be left to invalidate");
        cache.get_or_try_insert_with("qgames.log", compute).expect("Computation shouldn't fail");
        assert_eq!(computations.get(), 2, "Invalidated entries must be recomputed");

        cache.clear();
        assert!(cache.is_empty());
    }

    /// Expired entries are recomputed
    #[test]
    fn time_to_live() {
        let cache = GamesCache::new(Some(Duration::ZERO));
        let computations = Cell::new(0);
        let compute = || -> Result<Vec<Game>, String> {
            computations.set(computations.get() + 1);
            Ok(vec![])
        };
        cache.get_or_try_insert_with("qgames.log", compute).expect("Computation shouldn't fail");
        cache.get_or_try_insert_with("qgames.log", compute).expect("Computation shouldn't fail");
        assert_eq!(computations.get(), 2, "A zero TTL should never produce cache hits");
    }

    /// Errors are propagated & not cached
    #[test]
    fn errors_are_not_cached() {
        let cache = GamesCache::new(None);
        let result = cache.get_or_try_insert_with("broken.log", || Err("read failure".to_owned()));
        assert_eq!(result, Err("read failure".to_owned()));
        assert!(cache.is_empty(), "A failed computation shouldn't leave an entry behind");
        let games = cache.get_or_try_insert_with("broken.log", || -> Result<Vec<Game>, String> { Ok(vec![Game::new()]) })
            .expect("The retry should succeed");
        assert_eq!(games.len(), 1);
    }

    /// An expired entry whose recomputation fails is dropped, never served stale
    #[test]
    fn failed_refresh_drops_the_expired_entry() {
        let cache = GamesCache::new(Some(Duration::ZERO));
        cache.get_or_try_insert_with("qgames.log", || -> Result<Vec<Game>, String> { Ok(vec![Game::new()]) })
            .expect("Computation shouldn't fail");
        assert_eq!(cache.len(), 1);
        let result = cache.get_or_try_insert_with("qgames.log", || Err("read failure".to_owned()));
        assert_eq!(result, Err("read failure".to_owned()));
        assert!(cache.is_empty(), "The expired entry should be gone after a failed refresh");
    }

    /// Threads racing for the same key share a single computation
    #[test]
    fn concurrent_requests_compute_once() {
        const THREADS: usize = 8;
        let cache = GamesCache::new(None);
        let computations = AtomicU32::new(0);
        let barrier = Barrier::new(THREADS);
        let all_games: Vec<Arc<Vec<Game>>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| scope.spawn(|| {
                    barrier.wait();
                    cache.get_or_try_insert_with("qgames.log", || -> Result<Vec<Game>, String> {
                        computations.fetch_add(1, Relaxed);
                        thread::sleep(Duration::from_millis(10));
                        Ok(vec![Game::new()])
                    }).expect("Computation shouldn't fail")
                }))
                .collect();
            handles.into_iter()
                .map(|handle| handle.join().expect("Cache users shouldn't panic"))
                .collect()
        });
        assert_eq!(computations.load(Relaxed), 1, "The log should have been parsed only once");
        assert!(all_games.iter().all(|games| Arc::ptr_eq(games, &all_games[0])), "Every thread should get the same games");
    }

}
