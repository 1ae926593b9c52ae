mod backend;
pub mod platform;
mod session;

pub use backend::{AudioBackend, BackendError};
pub use platform::create_backend;
pub use session::AudioSession;
