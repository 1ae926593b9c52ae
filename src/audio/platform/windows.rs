use crate::audio::{AudioBackend, AudioSession, BackendError};

/// WASAPI-backed session control, via the `winmix` wrapper.
///
/// Sessions are keyed by pid; set calls re-enumerate because the volume
/// interfaces are not kept alive between polls.
pub struct WindowsAudioBackend;

impl WindowsAudioBackend {
    pub fn new() -> Self {
        Self
    }
}

impl AudioBackend for WindowsAudioBackend {
    fn enumerate_sessions(&self) -> Result<Vec<AudioSession>, BackendError> {
        let winmix = winmix::WinMix::default();
        let sessions =
            unsafe { winmix.enumerate() }.map_err(|e| BackendError::Enumerate(e.to_string()))?;

        let mut result = Vec::with_capacity(sessions.len());
        for session in sessions {
            let volume = unsafe { session.vol.get_master_volume() }.unwrap_or(0.0);
            let muted = unsafe { session.vol.get_mute() }.unwrap_or(false);

            // TODO: extract the real exe icon instead of the shared placeholder
            result.push(AudioSession {
                pid: session.pid,
                name: display_name(&session.path),
                icon_path: crate::utils::icon::placeholder_icon_path(),
                volume,
                muted,
            });
        }
        Ok(result)
    }

    fn set_volume(&self, pid: u32, volume: f32) -> Result<(), BackendError> {
        let winmix = winmix::WinMix::default();
        let sessions = unsafe { winmix.enumerate() }.map_err(|e| BackendError::SetVolume {
            pid,
            reason: e.to_string(),
        })?;

        for session in sessions {
            if session.pid == pid {
                return unsafe { session.vol.set_master_volume(volume) }.map_err(|e| {
                    BackendError::SetVolume {
                        pid,
                        reason: e.to_string(),
                    }
                });
            }
        }
        Err(BackendError::SetVolume {
            pid,
            reason: "no audio session with that pid".into(),
        })
    }

    fn set_mute(&self, pid: u32, muted: bool) -> Result<(), BackendError> {
        let winmix = winmix::WinMix::default();
        let sessions = unsafe { winmix.enumerate() }.map_err(|e| BackendError::SetMute {
            pid,
            reason: e.to_string(),
        })?;

        for session in sessions {
            if session.pid == pid {
                return unsafe { session.vol.set_mute(muted) }.map_err(|e| BackendError::SetMute {
                    pid,
                    reason: e.to_string(),
                });
            }
        }
        Err(BackendError::SetMute {
            pid,
            reason: "no audio session with that pid".into(),
        })
    }
}

/// Executable name without directory or extension, e.g. "C:\\...\\spotify.exe" → "spotify".
fn display_name(path: &str) -> String {
    let file = path.rsplit('\\').next().unwrap_or(path);
    match file.rfind('.') {
        Some(dot) => file[..dot].to_string(),
        None => file.to_string(),
    }
}
