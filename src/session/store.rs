use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::models::session_state::SessionState;

struct Entry {
    state: SessionState,
    touched: Instant,
}

struct Entries {
    map: HashMap<String, Entry>,
    last_pruned: Instant,
}

impl Entries {
    /// Drop expired entries, at most once per `ttl`. Loading entries stay;
    /// their detached generation call still has to land.
    fn prune_if_due(&mut self, now: Instant, ttl: Duration) {
        if now.duration_since(self.last_pruned) < ttl {
            return;
        }
        let before = self.map.len();
        self.map
            .retain(|_, entry| now.duration_since(entry.touched) < ttl || entry.state.is_loading());
        self.last_pruned = now;
        if self.map.len() < before {
            log::debug!("Pruned {} expired session states", before - self.map.len());
        }
    }
}

/// In-memory `SessionState` per browser session, keyed by deck id.
///
/// Entries untouched for longer than the TTL are dropped lazily on access.
/// Nothing is persisted.
#[derive(Clone)]
pub struct SessionStore {
    entries: Arc<Mutex<Entries>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Entries {
                map: HashMap::new(),
                last_pruned: Instant::now(),
            })),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the state for `deck_id`; a fresh `Idle` state if unknown.
    /// Unknown ids are not stored.
    pub fn snapshot(&self, deck_id: &str) -> SessionState {
        let mut entries = self.lock();
        let now = Instant::now();
        entries.prune_if_due(now, self.ttl);

        match entries.map.get_mut(deck_id) {
            Some(entry) if now.duration_since(entry.touched) < self.ttl || entry.state.is_loading() => {
                entry.touched = now;
                entry.state.clone()
            }
            _ => SessionState::new(),
        }
    }

    /// Run `f` against the state for `deck_id` under the lock.
    ///
    /// `f` must not block; the gateway call happens outside.
    pub fn update<R>(&self, deck_id: &str, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut entries = self.lock();
        let now = Instant::now();
        let ttl = self.ttl;
        entries.prune_if_due(now, ttl);

        let entry = entries.map.entry(deck_id.to_string()).or_insert_with(|| Entry {
            state: SessionState::new(),
            touched: now,
        });
        if now.duration_since(entry.touched) >= ttl && !entry.state.is_loading() {
            entry.state = SessionState::new();
        }
        entry.touched = now;
        f(&mut entry.state)
    }

    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_deck_starts_idle() {
        let store = SessionStore::new(Duration::from_secs(60));
        let state = store.snapshot("a");
        assert_eq!(state, SessionState::new());
        assert!(store.is_empty());
    }

    #[test]
    fn updates_are_kept_per_deck() {
        let store = SessionStore::new(Duration::from_secs(60));
        store.update("a", |s| s.set_source("hello"));
        assert_eq!(store.snapshot("a").source(), "hello");
        assert_eq!(store.snapshot("b").source(), "");
    }

    #[test]
    fn expired_entries_are_pruned() {
        let store = SessionStore::new(Duration::ZERO);
        store.update("a", |s| s.set_source("hello"));
        store.update("b", |_| ());
        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot("a").source(), "");
    }

    #[test]
    fn loading_entries_survive_expiry() {
        let store = SessionStore::new(Duration::ZERO);
        store.update("a", |s| {
            s.set_source("hello");
            s.begin_submit().unwrap();
        });
        store.update("b", |_| ());
        assert!(store.snapshot("a").is_loading());
    }

    #[test]
    fn anonymous_snapshots_do_not_grow_the_store() {
        let store = SessionStore::new(Duration::from_secs(60));
        for i in 0..100 {
            store.snapshot(&format!("anon-{i}"));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn expired_state_is_not_served() {
        let store = SessionStore::new(Duration::from_millis(20));
        store.update("a", |s| s.set_source("hello"));
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(store.snapshot("a").source(), "");
        assert_eq!(store.update("a", |s| s.source().to_string()), "");
    }
}
