#![cfg(feature = "server")]

//! Per-session game ownership. Each session's [`Game`] sits behind its own
//! lock: commands hold it for writing until fully applied, polls share it for
//! reading. Sessions never share state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;

use crate::config::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION};
use crate::game::Game;

/// Longest session id accepted from a client.
pub const MAX_SESSION_ID_LEN: usize = 64;

pub type SharedGame = Arc<RwLock<Game>>;

struct Session {
    game: SharedGame,
    last_used: AtomicU64,
}

/// Owns every live session. Holds at most `max_sessions`; opening one more
/// evicts the session that was used least recently.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    clock: AtomicU64,
    max_sessions: usize,
    base_seed: u64,
    auto_start: bool,
}

impl SessionStore {
    /// `auto_start` moves each new session straight to `Placing`; otherwise
    /// it waits for an explicit start command.
    pub fn new(base_seed: u64, auto_start: bool) -> Self {
        SessionStore {
            sessions: RwLock::new(HashMap::new()),
            clock: AtomicU64::new(0),
            max_sessions: DEFAULT_MAX_SESSIONS,
            base_seed,
            auto_start,
        }
    }

    /// Limit the number of live sessions (at least one).
    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions.max(1);
        self
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    fn tick(&self) -> u64 {
        self.clock.fetch_add(1, Ordering::Relaxed)
    }

    /// Fetch a session, creating it on first use.
    pub async fn session(&self, id: &str) -> SharedGame {
        if let Some(session) = self.sessions.read().await.get(id) {
            session.last_used.store(self.tick(), Ordering::Relaxed);
            return session.game.clone();
        }
        let mut sessions = self.sessions.write().await;
        if let Some(session) = sessions.get(id) {
            session.last_used.store(self.tick(), Ordering::Relaxed);
            return session.game.clone();
        }
        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, s)| s.last_used.load(Ordering::Relaxed))
                .map(|(key, _)| key.clone());
            match oldest {
                Some(key) => {
                    sessions.remove(&key);
                    info!("evicted idle session {key:?}");
                }
                None => break,
            }
        }

        let mut game = Game::new(session_seed(self.base_seed, id));
        if self.auto_start {
            let _ = game.begin();
        }
        info!("opened session {id:?}");
        let game = Arc::new(RwLock::new(game));
        sessions.insert(
            id.to_string(),
            Session {
                game: game.clone(),
                last_used: AtomicU64::new(self.tick()),
            },
        );
        game
    }

    /// Run a read-only view against a session.
    pub async fn read<R>(&self, id: &str, f: impl FnOnce(&Game) -> R) -> R {
        let game = self.session(id).await;
        let guard = game.read().await;
        f(&guard)
    }

    /// Run a command against a session with exclusive access.
    pub async fn write<R>(&self, id: &str, f: impl FnOnce(&mut Game) -> R) -> R {
        let game = self.session(id).await;
        let mut guard = game.write().await;
        f(&mut guard)
    }

    /// Whether a session is currently live. Does not open or touch it.
    pub async fn contains(&self, id: &str) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Normalise a client-supplied session id; blank or oversized ids fall back
/// to the default session.
pub fn session_id(raw: Option<&str>) -> &str {
    raw.map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_SESSION_ID_LEN)
        .unwrap_or(DEFAULT_SESSION)
}

/// Per-session seed: FNV-1a over the id, folded into the base seed.
pub fn session_seed(base_seed: u64, id: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
    id.bytes()
        .fold(FNV_OFFSET ^ base_seed, |h, b| (h ^ b as u64).wrapping_mul(FNV_PRIME))
}
