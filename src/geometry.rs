//! Window geometry derived from the session collection.
//!
//! Height is a pure function of how many sessions are displayed; individual
//! session content never affects it.

pub const WINDOW_WIDTH: f32 = 250.0;
pub const TITLE_BAR_HEIGHT: f32 = 30.0;
pub const SESSION_ROW_HEIGHT: f32 = 60.0;
pub const CONTENT_PADDING: f32 = 20.0;
pub const MIN_HEIGHT: f32 = 100.0;

/// Minimal window height that fits `session_count` rows without clipping.
pub fn window_height(session_count: usize) -> f32 {
    let total = TITLE_BAR_HEIGHT + session_count as f32 * SESSION_ROW_HEIGHT + CONTENT_PADDING;
    total.max(MIN_HEIGHT)
}
