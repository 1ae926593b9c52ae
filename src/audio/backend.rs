use thiserror::Error;

use super::session::AudioSession;

#[derive(Debug, Clone, Error)]
pub enum BackendError {
    #[error("failed to enumerate audio sessions: {0}")]
    Enumerate(String),
    #[error("failed to set volume for pid {pid}: {reason}")]
    SetVolume { pid: u32, reason: String },
    #[error("failed to set mute for pid {pid}: {reason}")]
    SetMute { pid: u32, reason: String },
}

pub trait AudioBackend: Send + Sync {
    /// All current audio sessions, in the backend's order.
    fn enumerate_sessions(&self) -> Result<Vec<AudioSession>, BackendError>;

    /// Set volume (0.0 to 1.0) for the session owned by `pid`.
    fn set_volume(&self, pid: u32, volume: f32) -> Result<(), BackendError>;

    /// Set mute state for the session owned by `pid`.
    fn set_mute(&self, pid: u32, muted: bool) -> Result<(), BackendError>;
}
