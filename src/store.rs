//! In-memory holder of the audio session collection.
//!
//! The backend owns the truth; this store only mirrors it. A poll replaces
//! the whole collection, a user gesture patches a single entry in place, and
//! whichever lands last wins at whole-field granularity.

use tracing::trace;

use crate::audio::AudioSession;

/// Subset of the mutable fields of a session. Unset fields are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionPatch {
    pub volume: Option<f32>,
    pub muted: Option<bool>,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Vec<AudioSession>,
    loading: bool,
    last_error: Option<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sessions in backend-reported order.
    pub fn sessions(&self) -> &[AudioSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the whole collection with a fresh backend snapshot.
    ///
    /// No diffing against pending local edits: an optimistic edit the backend
    /// has not picked up yet is reverted here and stays reverted until a later
    /// snapshot reports the new value.
    pub fn replace_all(&mut self, sessions: Vec<AudioSession>) {
        self.sessions = sessions;
    }

    /// Apply a local patch to the session with the given pid.
    ///
    /// A missing pid is a silent no-op: the user interacted with a session
    /// that has since disappeared from the backend.
    pub fn patch_by_pid(&mut self, pid: u32, patch: SessionPatch) {
        let Some(session) = self.sessions.iter_mut().find(|s| s.pid == pid) else {
            trace!(pid, "patch for unknown pid ignored");
            return;
        };
        if let Some(volume) = patch.volume {
            session.volume = volume;
        }
        if let Some(muted) = patch.muted {
            session.muted = muted;
        }
    }

    /// Record the most recent failure, or clear it. Last write wins.
    pub fn set_error(&mut self, error: Option<String>) {
        self.last_error = error;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
