#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub mod macos;

use std::sync::Arc;

use super::backend::AudioBackend;

pub fn create_backend() -> Arc<dyn AudioBackend> {
    #[cfg(target_os = "windows")]
    return Arc::new(windows::WindowsAudioBackend::new());

    #[cfg(target_os = "linux")]
    return Arc::new(linux::LinuxAudioBackend::new());

    #[cfg(target_os = "macos")]
    return Arc::new(macos::MacOSAudioBackend::new());

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    compile_error!("Unsupported platform");
}
