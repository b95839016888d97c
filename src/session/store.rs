//! Session registry keyed by session id.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;
use uuid::Uuid;

use super::FeedbackAccumulator;

/// One session's accumulator behind its own async lock, so operations
/// within a session run to completion in order while other sessions
/// proceed independently.
pub type SharedAccumulator = Arc<AsyncMutex<FeedbackAccumulator>>;

/// Maps session ids to their accumulators.
///
/// The map lock is synchronous and never held across an await; the
/// per-session locks are what serialize the actual operations.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, SharedAccumulator>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    /// Returns the session for `id`, creating a fresh one when the id is
    /// absent or unknown. A provided but unknown id is honored so clients
    /// keep their id across a server restart.
    pub fn get_or_create(&self, id: Option<Uuid>) -> (Uuid, SharedAccumulator) {
        let mut sessions = self
            .sessions
            .lock()
            .expect("session store lock poisoned");

        let id = id.unwrap_or_else(Uuid::new_v4);
        let session = sessions
            .entry(id)
            .or_insert_with(|| {
                debug!("Creating session {}", id);
                Arc::new(AsyncMutex::new(FeedbackAccumulator::new()))
            })
            .clone();
        (id, session)
    }

    /// Looks up an existing session without creating one.
    pub fn get(&self, id: &Uuid) -> Option<SharedAccumulator> {
        self.sessions
            .lock()
            .expect("session store lock poisoned")
            .get(id)
            .cloned()
    }
}
