//! Session registry: lock-striped per-identity session store.
//!
//! Owns the mapping from identity to [`Session`] and enforces the central
//! invariant: at most one session per identity at any time. The map is
//! sharded across independent `RwLock`ed stripes so mutations for one
//! identity serialize on its shard while identities on other shards proceed
//! untouched. The snapshot handed over at enable time and returned at
//! disable time moves under the same shard write lock, so a disable racing
//! a second enable can never lose it.
//!
//! The registry is an owned value injected by the host, not a process-wide
//! singleton; tests construct as many as they like.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::RwLock;

use tracing::debug;
use uuid::Uuid;

use crate::error::SessionError;
use crate::items::ItemSnapshot;
use crate::session::Session;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default number of shards. Power of 2 for fast modulo.
const DEFAULT_SHARDS: usize = 16;

/// Resolve an identity to a shard index.
#[inline]
fn shard_for(id: &Uuid, shard_count: usize) -> usize {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    id.hash(&mut hasher);
    (hasher.finish() as usize) % shard_count
}

// ---------------------------------------------------------------------------
// Padded shard
// ---------------------------------------------------------------------------

/// A single shard: a padded RwLock<HashMap>.
///
/// 128-byte alignment prevents false sharing between adjacent shards.
#[repr(align(128))]
struct Shard {
    map: RwLock<HashMap<Uuid, Session>>,
}

impl Shard {
    fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionRegistry
// ---------------------------------------------------------------------------

/// Thread-safe store of active selection sessions, keyed by identity.
pub struct SessionRegistry {
    shards: Box<[Shard]>,
    shard_count: usize,
}

impl std::fmt::Debug for SessionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry")
            .field("shard_count", &self.shard_count)
            .field("sessions", &self.len())
            .finish()
    }
}

impl SessionRegistry {
    /// Create a registry with the default shard count.
    #[must_use]
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }

    /// Create with a specific shard count.
    ///
    /// Clamped to `[1, 256]`.
    #[must_use]
    pub fn with_shards(n: usize) -> Self {
        let n = n.clamp(1, 256);
        let shards: Vec<Shard> = (0..n).map(|_| Shard::new()).collect();
        Self {
            shards: shards.into_boxed_slice(),
            shard_count: n,
        }
    }

    /// Number of shards.
    #[must_use]
    pub fn shard_count(&self) -> usize {
        self.shard_count
    }

    #[inline]
    fn shard(&self, id: &Uuid) -> &Shard {
        &self.shards[shard_for(id, self.shard_count)]
    }

    /// Start a session for `id`, capturing its held items for later
    /// restoration.
    ///
    /// Fails with [`SessionError::AlreadyActive`] when a session exists;
    /// the existing session (corners, snapshot and all) is left untouched.
    pub fn enable(&self, id: Uuid, held_items: ItemSnapshot) -> Result<(), SessionError> {
        let mut guard = self
            .shard(&id)
            .map
            .write()
            .unwrap_or_else(|e| e.into_inner());
        if guard.contains_key(&id) {
            return Err(SessionError::AlreadyActive(id));
        }
        guard.insert(id, Session::new(id, held_items));
        debug!(actor = %id, sessions = guard.len(), "selection session enabled");
        Ok(())
    }

    /// End the session for `id`, returning the snapshot captured at enable
    /// time for the caller to restore to the identity exactly once.
    ///
    /// Fails with [`SessionError::NotActive`] when no session exists.
    pub fn disable(&self, id: &Uuid) -> Result<ItemSnapshot, SessionError> {
        let mut guard = self
            .shard(id)
            .map
            .write()
            .unwrap_or_else(|e| e.into_inner());
        let session = guard.remove(id).ok_or(SessionError::NotActive(*id))?;
        debug!(actor = %id, sessions = guard.len(), "selection session disabled");
        Ok(session.into_saved_items())
    }

    /// Whether `id` has an active session.
    #[must_use]
    pub fn is_active(&self, id: &Uuid) -> bool {
        let guard = self
            .shard(id)
            .map
            .read()
            .unwrap_or_else(|e| e.into_inner());
        guard.contains_key(id)
    }

    /// Clone of the session for `id`, if any. Lookup only, no mutation.
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<Session> {
        let guard = self
            .shard(id)
            .map
            .read()
            .unwrap_or_else(|e| e.into_inner());
        guard.get(id).cloned()
    }

    /// Apply a function to the session under a read lock.
    ///
    /// Returns `None` if no session exists.
    pub fn read_with<F, R>(&self, id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&Session) -> R,
    {
        let guard = self
            .shard(id)
            .map
            .read()
            .unwrap_or_else(|e| e.into_inner());
        guard.get(id).map(f)
    }

    /// Apply a mutating function to the session under the shard write lock.
    ///
    /// This is the only mutation path for corner updates and commits, so a
    /// corner write cannot interleave with a disable for the same identity.
    /// Returns `None` if no session exists.
    pub fn update<F, R>(&self, id: &Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut guard = self
            .shard(id)
            .map
            .write()
            .unwrap_or_else(|e| e.into_inner());
        guard.get_mut(id).map(f)
    }

    /// Total number of active sessions across all shards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|s| s.map.read().unwrap_or_else(|e| e.into_inner()).len())
            .sum()
    }

    /// Whether no sessions are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shards
            .iter()
            .all(|s| s.map.read().unwrap_or_else(|e| e.into_inner()).is_empty())
    }

    /// Identities with an active session (snapshot).
    #[must_use]
    pub fn active_ids(&self) -> Vec<Uuid> {
        let mut result = Vec::new();
        for shard in &self.shards {
            let guard = shard.map.read().unwrap_or_else(|e| e.into_inner());
            result.extend(guard.keys().copied());
        }
        result
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
