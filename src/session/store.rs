//! Explicit session registry.
//!
//! A front end owns one `SessionStore`, keyed by whatever identifies a game
//! on its side (a channel id, a room name). Each table sits behind its own
//! mutex: operations on one session are serialized, and different sessions
//! can be driven from different threads at once.

use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use super::table::Table;

/// A table shared between the store and whoever is driving it.
pub type SharedTable = Arc<Mutex<Table>>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("a game is already running for session {0}")]
    AlreadyExists(String),

    #[error("no game is running for session {0}")]
    NotFound(String),
}

/// Live tables by session id.
///
/// ```
/// use uno_engine::core::{GameRng, Identity, UnoConfig};
/// use uno_engine::session::{SessionStore, Table};
///
/// let mut store = SessionStore::new();
/// let players = vec![Identity::human("alice"), Identity::automated("UNO Bot 1")];
/// let table = Table::new(players, UnoConfig::default(), GameRng::new(1)).unwrap();
///
/// store.create(42u64, table).unwrap();
/// assert!(store.get(&42).is_some());
/// store.destroy(&42).unwrap();
/// assert!(store.is_empty());
/// ```
#[derive(Debug)]
pub struct SessionStore<K> {
    sessions: FxHashMap<K, SharedTable>,
}

impl<K> Default for SessionStore<K> {
    fn default() -> Self {
        Self {
            sessions: FxHashMap::default(),
        }
    }
}

impl<K: Eq + Hash + Debug> SessionStore<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `table` under `key`. Fails if a game is already running there.
    pub fn create(&mut self, key: K, table: Table) -> Result<SharedTable, SessionError> {
        if self.sessions.contains_key(&key) {
            tracing::warn!(session = ?key, "session already exists");
            return Err(SessionError::AlreadyExists(format!("{key:?}")));
        }
        let shared = Arc::new(Mutex::new(table));
        tracing::debug!(session = ?key, "session created");
        self.sessions.insert(key, Arc::clone(&shared));
        Ok(shared)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<SharedTable> {
        self.sessions.get(key).cloned()
    }

    /// Stop tracking a session and hand back its table.
    pub fn destroy(&mut self, key: &K) -> Result<SharedTable, SessionError> {
        match self.sessions.remove(key) {
            Some(table) => {
                tracing::debug!(session = ?key, "session destroyed");
                Ok(table)
            }
            None => {
                tracing::warn!(session = ?key, "no session to destroy");
                Err(SessionError::NotFound(format!("{key:?}")))
            }
        }
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.sessions.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.sessions.keys()
    }
}
