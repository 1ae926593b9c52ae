use crate::audio::{AudioBackend, AudioSession, BackendError};

pub struct MacOSAudioBackend;

impl MacOSAudioBackend {
    pub fn new() -> Self {
        Self
    }
}

impl AudioBackend for MacOSAudioBackend {
    fn enumerate_sessions(&self) -> Result<Vec<AudioSession>, BackendError> {
        Ok(Vec::new())
    }

    fn set_volume(&self, _pid: u32, _volume: f32) -> Result<(), BackendError> {
        Ok(())
    }

    fn set_mute(&self, _pid: u32, _muted: bool) -> Result<(), BackendError> {
        Ok(())
    }
}
